//! Monitor module
//!
//! The polling driver: owns the price history and turns each fetched rate
//! into a classification and, on entry, a notification

mod driver;
mod types;

pub use driver::Monitor;
pub use types::{MonitorStats, SignalEvent, TickOutcome};
