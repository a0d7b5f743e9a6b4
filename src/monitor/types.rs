//! Monitor types

use crate::signal::Signal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An entry signal raised by the monitor
#[derive(Debug, Clone, Serialize)]
pub struct SignalEvent {
    /// Unique event identifier
    pub id: Uuid,
    /// BUY or SELL
    pub signal: Signal,
    /// Rate that triggered the signal
    pub price: f64,
    /// Sample timestamp
    pub timestamp: DateTime<Utc>,
    /// Alert text sent to the notifier
    pub message: String,
    /// Whether the notifier accepted the message
    pub delivered: bool,
}

/// Result of a single poll iteration
#[derive(Debug, Clone)]
pub enum TickOutcome {
    /// Rate fetch failed; nothing was recorded
    FetchFailed,
    /// Sample recorded, no entry
    NoSignal { price: f64 },
    /// Sample recorded and an entry signal raised
    Signalled(SignalEvent),
}

impl TickOutcome {
    /// Signal raised on this tick, if any
    pub fn signal(&self) -> Signal {
        match self {
            TickOutcome::Signalled(event) => event.signal,
            _ => Signal::None,
        }
    }
}

/// Counters accumulated over a monitor run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonitorStats {
    /// Poll iterations started
    pub ticks: u64,
    /// Failed rate fetches
    pub fetch_failures: u64,
    /// Entry signals raised
    pub signals: u64,
    /// Notifications that failed to deliver
    pub notification_failures: u64,
}
