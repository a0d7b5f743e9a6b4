//! exchangerate-api.com pair conversion client

use super::types::PairResponse;
use super::{FeedError, PriceSource};
use crate::config::FeedConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// exchangerate-api v6 base URL
pub const EXCHANGERATE_API_URL: &str = "https://v6.exchangerate-api.com";

/// Configuration for the exchangerate-api client
#[derive(Debug, Clone)]
pub struct ExchangeRateConfig {
    /// API base URL
    pub base_url: String,
    /// API key embedded in the request path
    pub api_key: String,
    /// Currency being priced
    pub base_currency: String,
    /// Currency the rate is quoted in
    pub quote_currency: String,
    /// Request timeout
    pub timeout: Duration,
}

impl ExchangeRateConfig {
    /// USD/JPY with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: EXCHANGERATE_API_URL.to_string(),
            api_key: api_key.into(),
            base_currency: "USD".to_string(),
            quote_currency: "JPY".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Build from the feed section of the config file
    pub fn from_feed(feed: &FeedConfig, api_key: impl Into<String>) -> Self {
        Self {
            base_url: feed.base_url.clone(),
            api_key: api_key.into(),
            base_currency: feed.base_currency.clone(),
            quote_currency: feed.quote_currency.clone(),
            timeout: Duration::from_secs(feed.timeout_secs),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the currency pair
    pub fn pair(mut self, base: impl Into<String>, quote: impl Into<String>) -> Self {
        self.base_currency = base.into();
        self.quote_currency = quote.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }
}

/// Polls the latest conversion rate for one currency pair
pub struct ExchangeRateClient {
    config: ExchangeRateConfig,
    client: Client,
}

impl ExchangeRateClient {
    /// Create a client; fails if the key is empty or the HTTP client cannot be built
    pub fn new(config: ExchangeRateConfig) -> Result<Self, FeedError> {
        if config.api_key.trim().is_empty() {
            return Err(FeedError::MissingApiKey);
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    /// Build the pair conversion URL
    fn pair_url(&self) -> String {
        format!(
            "{}/v6/{}/pair/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_key,
            self.config.base_currency,
            self.config.quote_currency
        )
    }

    /// Extract the conversion rate from a response body
    pub(crate) fn parse_response(body: &str) -> Result<f64, FeedError> {
        let response: PairResponse = serde_json::from_str(body)?;

        if response.result != "success" {
            return Err(FeedError::Api(
                response
                    .error_type
                    .unwrap_or_else(|| response.result.clone()),
            ));
        }

        let rate = response.conversion_rate.ok_or(FeedError::MissingRate)?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(FeedError::InvalidRate(rate));
        }

        Ok(rate)
    }
}

#[async_trait]
impl PriceSource for ExchangeRateClient {
    async fn fetch_price(&self) -> Result<f64, FeedError> {
        tracing::debug!(pair = %self.pair(), "Fetching conversion rate");

        let response = self.client.get(self.pair_url()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The API reports key and quota problems as JSON error results
            return match Self::parse_response(&body) {
                Err(FeedError::Api(error_type)) => Err(FeedError::Api(error_type)),
                _ => Err(FeedError::Status {
                    status: status.as_u16(),
                    body,
                }),
            };
        }

        Self::parse_response(&body)
    }

    fn pair(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_currency, self.config.quote_currency
        )
    }
}
