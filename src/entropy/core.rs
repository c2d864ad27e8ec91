//! Core entropy calculation primitives.
//!
//! This module provides the byte-frequency histogram and the Shannon
//! entropy formula shared by the streaming accumulator and the one-shot
//! block profiler.

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 represents no randomness (e.g., all bytes are the same)
/// - 8.0 represents maximum randomness (uniform distribution)
///
/// Byte values are folded into the sum in ascending order (0 through 255)
/// so a given input always produces the same bits regardless of how its
/// histogram was built; summation order affects floating-point rounding.
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    // Build histogram in a single pass
    let mut histogram = [0u64; 256];
    for &byte in data {
        histogram[byte as usize] += 1;
    }

    // Calculate entropy from histogram
    let len = data.len() as f64;
    let mut entropy = 0.0;

    for &count in &histogram {
        if count == 0 {
            continue;
        }
        let p = (count as f64) / len;
        entropy -= p * p.log2();
    }

    entropy
}

/// Byte frequency histogram with a running sample count.
///
/// The sample count always equals the sum of the 256 slots: every mutation
/// is either a single-byte increment or a full reset. Counts are `u64` so a
/// histogram can absorb streams larger than 4 GiB on any target.
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: [u64; 256],
    total: u64,
}

impl Histogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        for &byte in data {
            hist.add(byte);
        }
        hist
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Calculates the entropy of the current histogram.
    ///
    /// An empty histogram has entropy 0.0 (empty sum, never NaN).
    #[inline]
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        let mut entropy = 0.0;

        for &count in &self.counts {
            if count == 0 {
                continue;
            }
            let p = (count as f64) / total;
            entropy -= p * p.log2();
        }

        entropy
    }

    /// Returns the total number of bytes counted into the histogram.
    #[inline]
    pub fn len(&self) -> u64 {
        self.total
    }

    /// Returns true if the histogram is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Resets the histogram to its empty state.
    #[inline]
    pub fn clear(&mut self) {
        self.counts = [0; 256];
        self.total = 0;
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}
