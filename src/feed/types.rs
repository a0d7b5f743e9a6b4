//! Price feed types

use serde::Deserialize;
use thiserror::Error;

/// Price fetch errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure (URL stripped, it carries the API key)
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),
    /// Non-success status without a recognisable API error
    #[error("Rate API returned {status}: {body}")]
    Status { status: u16, body: String },
    /// API reported an error result
    #[error("Rate API error: {0}")]
    Api(String),
    /// Body was not the expected JSON
    #[error("Malformed rate response: {0}")]
    Parse(#[from] serde_json::Error),
    /// Success result without a rate
    #[error("Response has no conversion rate")]
    MissingRate,
    /// Rate is not a usable price
    #[error("Invalid conversion rate: {0}")]
    InvalidRate(f64),
    /// No API key configured
    #[error("Missing API key")]
    MissingApiKey,
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Http(e.without_url())
    }
}

/// Pair conversion response from exchangerate-api v6
#[derive(Debug, Deserialize)]
pub(crate) struct PairResponse {
    /// "success" or "error"
    pub result: String,
    /// Error code when result is "error"
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
    /// Base currency code
    #[allow(dead_code)]
    pub base_code: Option<String>,
    /// Quote currency code
    #[allow(dead_code)]
    pub target_code: Option<String>,
    /// Units of quote per unit of base
    pub conversion_rate: Option<f64>,
}
