//! Bounded price history

use super::PriceSample;
use std::collections::VecDeque;

/// Number of samples kept when no capacity is configured
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

/// Insertion-ordered, bounded window of price samples
///
/// Oldest samples are evicted first once the window is full. The monitor
/// owns the buffer and hands read-only snapshots to the signal classifier.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    samples: VecDeque<PriceSample>,
    capacity: usize,
}

impl PriceHistory {
    /// Create a buffer holding at most `capacity` samples (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a buffer with the default capacity
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }

    /// Append a sample, returning the evicted one if the buffer was full
    pub fn push(&mut self, sample: PriceSample) -> Option<PriceSample> {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front()
        } else {
            None
        }
    }

    /// Number of samples held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&PriceSample> {
        self.samples.back()
    }

    /// Iterate samples oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PriceSample> {
        self.samples.iter()
    }

    /// Contiguous copy of the window, oldest first
    pub fn snapshot(&self) -> Vec<PriceSample> {
        self.samples.iter().copied().collect()
    }

    /// Closing rates, oldest first
    pub fn closes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.close).collect()
    }

    /// Clear all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
