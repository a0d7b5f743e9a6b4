//! Telegram Bot API notifier

use super::{Notifier, NotifyError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Telegram Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Sends messages to a single Telegram chat
pub struct TelegramNotifier {
    api_url: String,
    token: String,
    chat_id: String,
    http: Client,
}

impl TelegramNotifier {
    /// Create a notifier for the given bot and chat
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            api_url: api_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
            http,
        })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let params = [("chat_id", self.chat_id.as_str()), ("text", message)];

        let response = self
            .http
            .post(self.send_message_url())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(chat_id = %self.chat_id, "Telegram message delivered");
        Ok(())
    }
}
