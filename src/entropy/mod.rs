//! Shannon entropy over byte streams.
//!
//! Everything here operates on the 256-symbol byte alphabet, so entropy
//! values land in `[0.0, 8.0]` bits per byte. Low values indicate sparse or
//! repetitive data (padding, text, tables); values near 8 indicate
//! compressed, encrypted, or packed content.
//!
//! Two entry styles are provided:
//!
//! - One-shot: [`shannon_entropy`] for a whole buffer, and
//!   [`profile_by_size`] / [`profile_by_count`] to split a buffer that is
//!   already in memory into fixed-size blocks.
//! - Streaming: [`EntropyAccumulator`] ingests a stream fragment by
//!   fragment and produces the same per-block and overall values as a
//!   single pass over the concatenated bytes, regardless of how the
//!   fragments were cut.

pub mod blocks;
pub mod core;
pub mod plan;
pub mod stats;
pub mod stream;

pub use blocks::{profile_by_count, profile_by_size, BlockEntropies};
pub use core::{shannon_entropy, Histogram};
pub use plan::{BlockPlan, MIN_BLOCK_SIZE};
pub use stats::{calculate_median, detect_cliffs, Cliff, Stats};
pub use stream::EntropyAccumulator;
