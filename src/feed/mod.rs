//! Price feed module
//!
//! Provides the latest exchange rate from exchangerate-api.com

mod exchangerate;
mod types;

pub use exchangerate::{ExchangeRateClient, ExchangeRateConfig, EXCHANGERATE_API_URL};
pub use types::FeedError;

use async_trait::async_trait;

/// Trait for price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the latest rate
    async fn fetch_price(&self) -> Result<f64, FeedError>;

    /// Currency pair label, e.g. "USD/JPY"
    fn pair(&self) -> String;
}
