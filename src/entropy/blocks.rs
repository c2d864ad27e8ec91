//! One-shot block entropy profiling over materialized buffers.
//!
//! These entry points recompute everything from scratch on each call and
//! need the whole input in memory; they exist for small inputs and for
//! verifying the streaming accumulator against an independent path. The
//! size-driven and count-driven functions are separate on purpose: after
//! clamping, [`profile_by_size`] re-derives the block count from the clamped
//! size, while the streaming planner pins the count to the requested budget.
//! Both formulas are locked in by reference vectors; see
//! [`BlockPlan::for_len`](crate::entropy::plan::BlockPlan::for_len).

use crate::entropy::core::shannon_entropy;
use crate::entropy::plan::MIN_BLOCK_SIZE;

/// A block entropy sequence together with the layout it was computed under.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockEntropies {
    /// Entropy per block, in stream order.
    pub values: Vec<f64>,
    /// Bytes per block.
    pub block_size: usize,
    /// Number of blocks.
    pub block_count: usize,
}

impl BlockEntropies {
    /// Returns the number of block entropies.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no blocks were produced.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Computes entropy over consecutive non-overlapping blocks of `block_size`
/// bytes, starting at offset 0.
///
/// The size is clamped up to [`MIN_BLOCK_SIZE`] and the count is derived
/// from the clamped size; the trailing remainder shorter than one block is
/// discarded. Unlike the streaming accumulator, this call returns block
/// values only; the remainder is not folded into any total.
pub fn profile_by_size(data: &[u8], block_size: usize) -> BlockEntropies {
    let block_size = block_size.max(MIN_BLOCK_SIZE);
    let block_count = data.len() / block_size;
    let values = data
        .chunks_exact(block_size)
        .map(shannon_entropy)
        .collect();

    BlockEntropies {
        values,
        block_size,
        block_count,
    }
}

/// Computes entropy over at most `max_blocks` equal-sized blocks.
///
/// A budget of 0 delegates to [`profile_by_size`] with a zero size, which
/// the floor clamps to [`MIN_BLOCK_SIZE`]; otherwise the block size is the
/// buffer length divided by the budget. Because the count is re-derived from
/// the clamped size, the result can hold one block more than the budget when
/// the division leaves a large remainder.
pub fn profile_by_count(data: &[u8], max_blocks: usize) -> BlockEntropies {
    if max_blocks == 0 {
        return profile_by_size(data, 0);
    }
    profile_by_size(data, data.len() / max_blocks)
}
