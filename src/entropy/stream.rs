//! Streaming entropy accumulation.
//!
//! [`EntropyAccumulator`] consumes a byte stream as a sequence of
//! arbitrarily-sized fragments and produces the same overall entropy and the
//! same per-block entropy sequence as a single pass over the whole input.
//! Memory stays O(1) in the stream length: two fixed histograms plus the
//! planned block vector. This type, not the materialized one-shot profiler,
//! is what hosts feed multi-gigabyte inputs through.

use crate::entropy::blocks::BlockEntropies;
use crate::entropy::core::Histogram;
use crate::entropy::plan::BlockPlan;
use crate::error::{EntropyError, Result};

/// Streaming Shannon entropy accumulator with per-block tracking.
///
/// Constructed once per stream from the declared total length and a maximum
/// block budget; fed with [`ingest`](Self::ingest); read out with
/// [`finalize`](Self::finalize) and the block accessors. An accumulator is
/// not reusable across streams; start a fresh one per input.
#[derive(Debug, Clone)]
pub struct EntropyAccumulator {
    declared_len: u64,
    plan: BlockPlan,
    /// Frequency of every byte seen so far; its length is the ingested count.
    total: Histogram,
    /// Frequency of the bytes in the block currently being filled.
    current: Histogram,
    blocks: Vec<f64>,
    next_block: usize,
}

impl EntropyAccumulator {
    /// Creates an accumulator for a stream declared to be `declared_len`
    /// bytes long, profiled as at most `max_blocks` blocks.
    ///
    /// The block plan is derived here, once; the block sequence is pre-sized
    /// to the planned count and zero-filled. Indices the stream never
    /// completes keep their 0.0.
    pub fn new(declared_len: u64, max_blocks: usize) -> Self {
        let plan = BlockPlan::for_len(declared_len, max_blocks);
        Self {
            declared_len,
            plan,
            total: Histogram::new(),
            current: Histogram::new(),
            blocks: vec![0.0; plan.block_count],
            next_block: 0,
        }
    }

    /// Feeds the next fragment of the stream.
    ///
    /// Fragments may be any size, including empty; block boundaries are
    /// detected per byte, so any partition of the stream into fragments
    /// yields bit-identical results to a single whole-stream call.
    pub fn ingest(&mut self, fragment: &[u8]) {
        let block_size = self.plan.block_size as u64;
        for &byte in fragment {
            self.total.add(byte);
            self.current.add(byte);

            if self.current.len() == block_size {
                self.seal_block();
            }
        }
    }

    /// Closes the block currently being filled: records its entropy if a
    /// planned slot remains, then resets the block histogram.
    ///
    /// A budget that divides the stream unevenly can cross one more boundary
    /// than the plan has slots for; the surplus crossing is dropped here
    /// while its bytes still count toward the overall entropy.
    fn seal_block(&mut self) {
        if self.next_block < self.blocks.len() {
            self.blocks[self.next_block] = self.current.entropy();
            self.next_block += 1;
        }
        self.current.clear();
    }

    /// Returns the overall entropy of the stream.
    ///
    /// Fails with [`EntropyError::LengthMismatch`] when the number of bytes
    /// ingested differs from the declared length; a short read or an
    /// over-long stream never silently produces a value. Takes `&self`, so
    /// repeated calls after ingestion always return the same result.
    pub fn finalize(&self) -> Result<f64> {
        let actual = self.total.len();
        if actual != self.declared_len {
            return Err(EntropyError::LengthMismatch {
                expected: self.declared_len,
                actual,
            });
        }
        Ok(self.total.entropy())
    }

    /// The per-block entropy sequence, in stream order.
    pub fn blocks(&self) -> &[f64] {
        &self.blocks
    }

    /// Bytes per block, as planned at construction.
    pub fn block_size(&self) -> usize {
        self.plan.block_size
    }

    /// Number of planned blocks.
    pub fn block_count(&self) -> usize {
        self.plan.block_count
    }

    /// The plan derived at construction.
    pub fn plan(&self) -> BlockPlan {
        self.plan
    }

    /// The declared total length this accumulator was constructed with.
    pub fn declared_len(&self) -> u64 {
        self.declared_len
    }

    /// Number of bytes ingested so far.
    pub fn bytes_ingested(&self) -> u64 {
        self.total.len()
    }

    /// The block sequence and plan constants as one owned value.
    pub fn block_entropies(&self) -> BlockEntropies {
        BlockEntropies {
            values: self.blocks.clone(),
            block_size: self.plan.block_size,
            block_count: self.plan.block_count,
        }
    }
}
