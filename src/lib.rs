//! Streaming Shannon entropy profiling for binary triage.
//!
//! Entroscan measures the byte entropy of an input twice over: once for the
//! whole input, and once per fixed-size block, so a host can flag the
//! packed, encrypted, or compressed regions that overall entropy alone
//! would average away.
//!
//! The core type is [`EntropyAccumulator`]: it is constructed from the
//! declared input length and a block budget, ingests the input as a
//! sequence of arbitrarily-sized fragments, and produces bit-for-bit the
//! same values as a single pass over the concatenated bytes. One-shot
//! helpers ([`shannon_entropy`], [`profile_by_size`], [`profile_by_count`])
//! cover buffers that are already in memory, and [`profile_file`] walks a
//! memory-mapped file through the accumulator in bounded fragments.
//!
//! ```
//! use entroscan::{EntropyAccumulator, EntropyReport};
//!
//! let data = vec![0u8; 1024];
//! let mut acc = EntropyAccumulator::new(data.len() as u64, 4);
//! acc.ingest(&data[..300]);
//! acc.ingest(&data[300..]);
//! let overall = acc.finalize()?;
//! assert_eq!(overall, 0.0);
//!
//! let report = EntropyReport::from_accumulator(&acc)?;
//! assert_eq!(report.blocks.len(), 4);
//! # Ok::<(), entroscan::EntropyError>(())
//! ```

/// Profiling configuration.
pub mod config;
/// Entropy computation: histogram, block plan, streaming and one-shot paths.
pub mod entropy;
/// Error types.
pub mod error;
/// Bounded file access and profiling entry points.
pub mod io;
/// Tracing setup.
pub mod logging;
/// Serializable profile output.
pub mod report;

pub use config::ProfileConfig;
pub use entropy::blocks::{profile_by_count, profile_by_size, BlockEntropies};
pub use entropy::core::{shannon_entropy, Histogram};
pub use entropy::plan::{BlockPlan, MIN_BLOCK_SIZE};
pub use entropy::stats::{calculate_median, detect_cliffs, Cliff, Stats};
pub use entropy::stream::EntropyAccumulator;
pub use error::{EntropyError, Result};
pub use io::{profile_file, profile_reader, FragmentSource};
pub use report::EntropyReport;
