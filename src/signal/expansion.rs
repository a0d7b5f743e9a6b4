//! Band expansion detection
//!
//! Confirms that the inner band width is on a sustained widening trend: some
//! recent step grew by at least the expansion ratio, and every step from that
//! jump to the latest sample widened strictly.

use super::params::{SignalParams, DEFAULT_PERIOD};
use crate::bands::compute_bands;
use crate::history::PriceSample;

/// Detects widening inner bands over a short lookback horizon
#[derive(Debug, Clone)]
pub struct ExpansionDetector {
    period: usize,
    lookback: usize,
    expansion_ratio: f64,
}

impl ExpansionDetector {
    /// Create a detector from strategy parameters
    pub fn new(params: &SignalParams) -> Self {
        Self {
            period: params.period,
            lookback: params.lookback,
            expansion_ratio: params.expansion_ratio,
        }
    }

    /// Create a detector with default parameters
    pub fn with_defaults() -> Self {
        Self::new(&SignalParams::default())
    }

    /// True if the bands over `history` are expanding
    pub fn is_expanding(&self, history: &[PriceSample]) -> bool {
        let widths = compute_bands(history, self.period).widths();
        self.find_jump(&widths).is_some()
    }

    /// Index of the most recent qualifying width jump, if any
    ///
    /// Candidates run from the second-to-last index backwards, `lookback`
    /// of them. A candidate is skipped when its width or its predecessor's is
    /// undefined, or when the predecessor width is zero.
    pub fn find_jump(&self, widths: &[Option<f64>]) -> Option<usize> {
        let n = widths.len();

        for back in 2..self.lookback + 2 {
            let Some(i) = n.checked_sub(back) else {
                break;
            };
            if i == 0 {
                break;
            }

            let (Some(curr), Some(prev)) = (widths[i], widths[i - 1]) else {
                continue;
            };
            if prev == 0.0 {
                continue;
            }

            if curr / prev >= self.expansion_ratio && Self::widening_since(widths, i) {
                return Some(i);
            }
        }

        None
    }

    /// Every step from `start` to the end widens strictly
    fn widening_since(widths: &[Option<f64>], start: usize) -> bool {
        (start..widths.len()).all(|j| match (widths[j], widths[j - 1]) {
            (Some(curr), Some(prev)) => curr > prev,
            _ => false,
        })
    }
}

impl Default for ExpansionDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Expansion check at the default band period
pub fn is_expanding(history: &[PriceSample], lookback: usize) -> bool {
    ExpansionDetector::new(&SignalParams {
        period: DEFAULT_PERIOD,
        lookback,
        ..Default::default()
    })
    .is_expanding(history)
}
