//! Signal types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry decision for the latest price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    /// Price sits shallowly inside the lower outer-to-inner zone
    Buy,
    /// Price has pushed deep into the upper inner-to-outer zone
    Sell,
    /// No entry
    None,
}

impl Signal {
    /// True for BUY or SELL
    pub fn is_entry(&self) -> bool {
        !matches!(self, Signal::None)
    }

    /// Upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::None => "NONE",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
