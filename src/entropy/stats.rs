//! Statistical utilities for block entropy sequences.
//!
//! A flat block-entropy sequence is hard to eyeball; these helpers reduce it
//! to a summary and flag the sudden jumps between adjacent blocks that mark
//! transitions into packed or encrypted regions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Statistical summary of block entropy values.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Stats {
    /// Computes a statistical summary from block entropy values.
    ///
    /// Returns None if the input is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let len = values.len() as f64;

        let sum: f64 = values.iter().sum();
        let mean = sum / len;

        let variance: f64 = values
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / len;
        let std_dev = variance.sqrt();

        let min = values.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let max = values.iter().copied().reduce(f64::max).unwrap_or(0.0);

        let median = calculate_median(values);

        Some(Stats {
            mean,
            std_dev,
            min,
            max,
            median,
        })
    }
}

/// Calculates the median of a slice of values.
///
/// Note: This function sorts a copy of the input internally.
pub fn calculate_median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// A sudden entropy jump between two adjacent blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliff {
    /// Index of the block the jump lands on.
    pub index: usize,
    pub from: f64,
    pub to: f64,
    pub delta: f64,
}

/// Detects entropy cliffs: adjacent-block deltas at or above `threshold`.
///
/// A cliff between a low-entropy stretch and a high-entropy one is the
/// classic signature of a plain loader followed by a packed payload.
pub fn detect_cliffs(values: &[f64], threshold: f64) -> Vec<Cliff> {
    let mut cliffs = Vec::new();
    for i in 1..values.len() {
        let from = values[i - 1];
        let to = values[i];
        let delta = (to - from).abs();
        if delta >= threshold {
            cliffs.push(Cliff {
                index: i,
                from,
                to,
                delta,
            });
        }
    }
    cliffs
}
