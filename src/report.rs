//! Serializable entropy profile for an input.
//!
//! [`EntropyReport`] is the wire form hosts persist or ship across process
//! boundaries. Field names are part of the format; downstream consumers key
//! on `overall`, `block_size`, `block_count` and `blocks`.

use serde::{Deserialize, Serialize};

use crate::entropy::stats::{detect_cliffs, Cliff, Stats};
use crate::entropy::stream::EntropyAccumulator;
use crate::error::Result;

/// Entropy profile for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    /// Overall Shannon entropy of the whole input.
    pub overall: f64,
    /// Bytes per block.
    pub block_size: usize,
    /// Number of planned blocks.
    pub block_count: usize,
    /// Entropy per block, in stream order.
    pub blocks: Vec<f64>,
}

impl EntropyReport {
    /// Builds a report from a fully-fed accumulator.
    ///
    /// Fails with [`EntropyError::LengthMismatch`](crate::error::EntropyError)
    /// when the accumulator saw fewer or more bytes than its stream declared.
    pub fn from_accumulator(acc: &EntropyAccumulator) -> Result<Self> {
        let overall = acc.finalize()?;
        let blocks = acc.block_entropies();
        Ok(Self {
            overall,
            block_size: blocks.block_size,
            block_count: blocks.block_count,
            blocks: blocks.values,
        })
    }

    /// Profiles a buffer that is already in memory.
    ///
    /// Runs the buffer through the streaming accumulator in one fragment, so
    /// the block layout and values are identical to what any fragmentation of
    /// the same bytes would produce.
    pub fn from_buffer(data: &[u8], max_blocks: usize) -> Result<Self> {
        let mut acc = EntropyAccumulator::new(data.len() as u64, max_blocks);
        acc.ingest(data);
        Self::from_accumulator(&acc)
    }

    /// Statistical summary of the block entropies, if any blocks exist.
    pub fn stats(&self) -> Option<Stats> {
        Stats::from_values(&self.blocks)
    }

    /// Entropy cliffs between adjacent blocks at or above `threshold`.
    pub fn cliffs(&self, threshold: f64) -> Vec<Cliff> {
        detect_cliffs(&self.blocks, threshold)
    }
}
