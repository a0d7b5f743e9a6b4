//! Notification module
//!
//! Delivers entry alerts; delivery is best-effort and failures are reported
//! back to the caller for logging only

mod message;
mod telegram;

pub use message::format_entry_message;
pub use telegram::{TelegramNotifier, TELEGRAM_API_URL};

use crate::config::NotifyConfig;
use async_trait::async_trait;
use thiserror::Error;

/// Notification delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport failure (URL stripped, it carries the bot token)
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),
    /// Non-success response from the messaging API
    #[error("Notification rejected with {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        NotifyError::Http(e.without_url())
    }
}

/// Trait for notification sinks
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Writes messages to the log only
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        tracing::info!("{message}");
        Ok(())
    }
}

/// Telegram when credentials are configured, otherwise log only
pub fn from_config(config: &NotifyConfig) -> Result<Box<dyn Notifier>, NotifyError> {
    match config.telegram_credentials() {
        Some((token, chat_id)) => {
            tracing::info!(chat_id, "Telegram notifications enabled");
            Ok(Box::new(TelegramNotifier::new(
                &config.telegram_api_url,
                token,
                chat_id,
            )?))
        }
        None => {
            tracing::warn!("Telegram credentials not set, notifications go to the log only");
            Ok(Box::new(LogNotifier))
        }
    }
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Box<T> {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        (**self).notify(message).await
    }
}
