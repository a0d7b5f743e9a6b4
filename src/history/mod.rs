//! Price history module
//!
//! Bounded, chronologically ordered window of fetched exchange rates

mod buffer;
mod types;

pub use buffer::{PriceHistory, DEFAULT_HISTORY_CAPACITY};
pub use types::PriceSample;
