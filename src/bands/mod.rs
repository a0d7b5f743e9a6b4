//! Volatility band module
//!
//! Rolling Bollinger-style bands at ±2σ (inner) and ±3σ (outer)

mod calculator;

pub use calculator::{compute_bands, INNER_BAND_K, OUTER_BAND_K};

/// Band values at a single index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandValues {
    /// Mean + 3σ
    pub upper_outer: f64,
    /// Mean + 2σ
    pub upper_inner: f64,
    /// Mean - 2σ
    pub lower_inner: f64,
    /// Mean - 3σ
    pub lower_outer: f64,
}

impl BandValues {
    /// Distance between the inner bands
    pub fn inner_width(&self) -> f64 {
        self.upper_inner - self.lower_inner
    }
}

/// Four band sequences aligned by index with the price history
///
/// Entries before the rolling window fills are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandSet {
    pub upper_outer: Vec<Option<f64>>,
    pub upper_inner: Vec<Option<f64>>,
    pub lower_inner: Vec<Option<f64>>,
    pub lower_outer: Vec<Option<f64>>,
}

impl BandSet {
    /// Number of indices covered
    pub fn len(&self) -> usize {
        self.upper_inner.len()
    }

    /// True if the set covers no samples
    pub fn is_empty(&self) -> bool {
        self.upper_inner.is_empty()
    }

    /// Band values at index `i`, if defined
    pub fn at(&self, i: usize) -> Option<BandValues> {
        Some(BandValues {
            upper_outer: (*self.upper_outer.get(i)?)?,
            upper_inner: (*self.upper_inner.get(i)?)?,
            lower_inner: (*self.lower_inner.get(i)?)?,
            lower_outer: (*self.lower_outer.get(i)?)?,
        })
    }

    /// Band values at the most recent index, if defined
    pub fn latest(&self) -> Option<BandValues> {
        self.at(self.len().checked_sub(1)?)
    }

    /// Inner band width (upper-inner minus lower-inner) per index
    pub fn widths(&self) -> Vec<Option<f64>> {
        self.upper_inner
            .iter()
            .zip(&self.lower_inner)
            .map(|(upper, lower)| Some((*upper)? - (*lower)?))
            .collect()
    }
}
