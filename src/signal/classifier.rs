//! Entry classification
//!
//! Combines the latest band values, the expansion verdict and the current
//! price into a BUY/SELL/NONE decision. Stateless: the same conditions fire
//! again on every call until the price leaves the zone.

use super::expansion::ExpansionDetector;
use super::params::SignalParams;
use super::types::Signal;
use crate::bands::{compute_bands, BandValues};
use crate::history::PriceSample;

/// Classifies the current price against expanding bands
#[derive(Debug, Clone)]
pub struct SignalClassifier {
    params: SignalParams,
    detector: ExpansionDetector,
}

impl SignalClassifier {
    /// Create a classifier with the given parameters
    pub fn new(params: SignalParams) -> Self {
        let detector = ExpansionDetector::new(&params);
        Self { params, detector }
    }

    /// Create a classifier with default parameters
    pub fn with_defaults() -> Self {
        Self::new(SignalParams::default())
    }

    /// Parameters in use
    pub fn params(&self) -> &SignalParams {
        &self.params
    }

    /// Classify `current_price` against the bands over `history`
    pub fn classify(&self, history: &[PriceSample], current_price: f64) -> Signal {
        if history.len() < self.params.period || !self.detector.is_expanding(history) {
            return Signal::None;
        }

        match compute_bands(history, self.params.period).latest() {
            Some(bands) => self.classify_against(&bands, current_price),
            None => Signal::None,
        }
    }

    /// Apply the zone tests to a single set of band values
    ///
    /// BUY is checked before SELL. Both use strict inequalities, so a price
    /// on a band edge never fires.
    pub fn classify_against(&self, bands: &BandValues, price: f64) -> Signal {
        let BandValues {
            upper_outer: p3,
            upper_inner: p2,
            lower_inner: m2,
            lower_outer: m3,
        } = *bands;

        if m3 < price && price < m2 && (m2 - m3) / self.params.buy_zone_scale > price - m3 {
            return Signal::Buy;
        }

        if p2 < price && price < p3 && (p3 - p2) / self.params.sell_zone_scale < price - p2 {
            return Signal::Sell;
        }

        Signal::None
    }
}

impl Default for SignalClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Classify with default parameters
pub fn classify(history: &[PriceSample], current_price: f64) -> Signal {
    SignalClassifier::with_defaults().classify(history, current_price)
}
