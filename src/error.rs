//! Error types for entropy profiling.
//!
//! This module provides error handling using thiserror for structured error
//! types shared across the streaming and file-backed entry points.

use thiserror::Error;

/// Main error type for entropy profiling operations.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// A stream ended with fewer or more bytes than it declared up front.
    #[error("expected {expected} bytes, but got {actual} bytes")]
    LengthMismatch { expected: u64, actual: u64 },

    /// Input file exceeds the configured size cap.
    #[error("File size of {found} bytes exceeds the maximum allowed size of {limit} bytes.")]
    FileTooLarge { limit: u64, found: u64 },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for entropy profiling operations.
pub type Result<T> = std::result::Result<T, EntropyError>;
