//! Signal generation module
//!
//! Detects band expansion and classifies the current price into an entry

mod classifier;
mod expansion;
mod params;
mod types;

pub use classifier::{classify, SignalClassifier};
pub use expansion::{is_expanding, ExpansionDetector};
pub use params::{
    SignalParams, DEFAULT_BUY_ZONE_SCALE, DEFAULT_EXPANSION_RATIO, DEFAULT_LOOKBACK,
    DEFAULT_PERIOD, DEFAULT_SELL_ZONE_SCALE,
};
pub use types::Signal;
