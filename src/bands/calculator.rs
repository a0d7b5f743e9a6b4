//! Rolling band calculation

use super::BandSet;
use crate::history::PriceSample;

/// Standard deviation multiplier for the inner bands
pub const INNER_BAND_K: f64 = 2.0;

/// Standard deviation multiplier for the outer bands
pub const OUTER_BAND_K: f64 = 3.0;

/// Compute the four bands over a trailing window of `period` closes
///
/// Uses the sample standard deviation (divisor `period - 1`). Indices before
/// the window fills are undefined, and a period below 2 leaves every index
/// undefined. Recomputed in full on each call.
pub fn compute_bands(history: &[PriceSample], period: usize) -> BandSet {
    let len = history.len();
    let mut bands = BandSet {
        upper_outer: vec![None; len],
        upper_inner: vec![None; len],
        lower_inner: vec![None; len],
        lower_outer: vec![None; len],
    };

    if period < 2 || len < period {
        return bands;
    }

    let closes: Vec<f64> = history.iter().map(|s| s.close).collect();

    for (offset, window) in closes.windows(period).enumerate() {
        let i = offset + period - 1;
        let (sma, std) = mean_and_std(window);

        bands.upper_outer[i] = Some(sma + OUTER_BAND_K * std);
        bands.upper_inner[i] = Some(sma + INNER_BAND_K * std);
        bands.lower_inner[i] = Some(sma - INNER_BAND_K * std);
        bands.lower_outer[i] = Some(sma - OUTER_BAND_K * std);
    }

    bands
}

/// Mean and sample standard deviation of a window with at least 2 values
fn mean_and_std(window: &[f64]) -> (f64, f64) {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}
