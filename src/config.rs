//! Configuration for entropy profiling.
//!
//! Provides centralized configuration for the file-backed and streaming
//! entry points with sensible defaults.

use serde::{Deserialize, Serialize};

/// Configuration for profiling a file or stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Upper bound on the number of entropy blocks (default: 800).
    ///
    /// Zero disables the budget and profiles at the minimum block size.
    pub max_blocks: usize,
    /// Size of the read fragments handed to the accumulator (default: 10 MiB).
    pub fragment_size: usize,
    /// Maximum input file size in bytes (default: 100 MiB).
    pub max_file_size: u64,
    /// Minimum adjacent-block delta reported as a cliff (default: 1.0).
    pub cliff_delta: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            max_blocks: 800,
            fragment_size: 10 * 1024 * 1024,
            max_file_size: 100 * 1024 * 1024,
            cliff_delta: 1.0,
        }
    }
}
