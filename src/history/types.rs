//! Price sample types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observed exchange rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Local timestamp when the rate was fetched
    pub timestamp: DateTime<Utc>,
    /// Observed rate
    pub close: f64,
}

impl PriceSample {
    /// Create a new sample
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }

    /// Create a sample stamped with the current time
    pub fn now(close: f64) -> Self {
        Self::new(Utc::now(), close)
    }
}
