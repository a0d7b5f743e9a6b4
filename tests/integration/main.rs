//! Integration tests

mod classify_test;
mod e2e_test;
mod feed_test;

use bandwatch::history::PriceSample;
use chrono::{Duration, TimeZone, Utc};

/// Samples one minute apart starting at a fixed time
pub fn history(closes: &[f64]) -> Vec<PriceSample> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceSample::new(base + Duration::minutes(i as i64), c))
        .collect()
}

/// 21 closes flat at 150 then nine alternating closes whose swing grows by half each step
pub fn expanding_closes() -> Vec<f64> {
    let mut closes = vec![150.0; 21];
    let mut amplitude = 0.5;
    for k in 0..9 {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        closes.push(150.0 + sign * amplitude);
        amplitude *= 1.5;
    }
    closes
}
