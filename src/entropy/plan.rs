//! Block plan derivation.
//!
//! A stream is profiled as a run of fixed-size blocks. The plan (block size
//! and block count) is derived once, up front, from the declared total
//! length and a maximum block budget, and never changes while the stream is
//! ingested.

/// Minimum block size in bytes.
///
/// The keyspace for a byte is 256 values, so blocks below this floor can
/// never approach a full distribution and their entropies would not be
/// comparable across blocks.
pub const MIN_BLOCK_SIZE: usize = 256;

/// Fixed layout of entropy blocks across a stream.
///
/// Invariant: `block_size >= MIN_BLOCK_SIZE` and
/// `block_count * block_size <= total_len` for the length the plan was
/// derived from. Trailing bytes beyond the last block belong to no block but
/// still count toward the overall entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    /// Bytes per block.
    pub block_size: usize,
    /// Number of blocks that fit the declared length.
    pub block_count: usize,
}

impl BlockPlan {
    /// Derives the plan for a stream of `total_len` bytes split into at most
    /// `max_blocks` blocks.
    ///
    /// A budget of 0 means "no preference" and falls back to
    /// [`MIN_BLOCK_SIZE`] blocks. A tentative size below the floor is
    /// clamped up to it, with the count re-derived from the clamped size;
    /// otherwise the count stays at the requested budget even when one more
    /// block would fit. All divisions floor, so the plan is total: any
    /// (length, budget) pair yields a valid plan.
    pub fn for_len(total_len: u64, max_blocks: usize) -> Self {
        let floor = MIN_BLOCK_SIZE as u64;

        let tentative = if max_blocks == 0 {
            0
        } else {
            total_len / max_blocks as u64
        };

        if tentative < floor {
            return Self {
                block_size: MIN_BLOCK_SIZE,
                block_count: (total_len / floor) as usize,
            };
        }

        Self {
            block_size: tentative as usize,
            block_count: max_blocks,
        }
    }

    /// Total bytes assigned to blocks; the remainder up to the stream length
    /// reaches only the overall entropy.
    pub fn covered_len(&self) -> u64 {
        self.block_size as u64 * self.block_count as u64
    }
}
