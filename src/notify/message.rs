//! Alert message formatting

use crate::signal::Signal;
use chrono::{DateTime, Utc};

/// Entry alert text, e.g. `📢 ENTRY SIGNAL: BUY at 150.123 (2024-01-01 09:00:00)`
pub fn format_entry_message(signal: Signal, price: f64, at: DateTime<Utc>) -> String {
    format!(
        "📢 ENTRY SIGNAL: {} at {:.3} ({})",
        signal,
        price,
        at.format("%Y-%m-%d %H:%M:%S")
    )
}
