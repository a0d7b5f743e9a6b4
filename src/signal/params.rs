//! Strategy parameters

/// Rolling window length for the bands
pub const DEFAULT_PERIOD: usize = 21;

/// Number of candidate steps scanned for a width jump
pub const DEFAULT_LOOKBACK: usize = 5;

/// Minimum width growth ratio that counts as a jump
pub const DEFAULT_EXPANSION_RATIO: f64 = 1.25;

/// Divisor applied to the lower zone height in the BUY test
pub const DEFAULT_BUY_ZONE_SCALE: f64 = 0.25;

/// Divisor applied to the upper zone height in the SELL test
pub const DEFAULT_SELL_ZONE_SCALE: f64 = 0.75;

/// Parameters for band expansion and entry classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    /// Band window length (default: 21)
    pub period: usize,
    /// Candidate steps scanned for a width jump (default: 5)
    pub lookback: usize,
    /// Width growth ratio that qualifies as a jump (default: 1.25)
    pub expansion_ratio: f64,
    /// BUY zone divisor (default: 0.25)
    pub buy_zone_scale: f64,
    /// SELL zone divisor (default: 0.75)
    pub sell_zone_scale: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            lookback: DEFAULT_LOOKBACK,
            expansion_ratio: DEFAULT_EXPANSION_RATIO,
            buy_zone_scale: DEFAULT_BUY_ZONE_SCALE,
            sell_zone_scale: DEFAULT_SELL_ZONE_SCALE,
        }
    }
}
