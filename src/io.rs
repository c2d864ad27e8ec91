//! Bounded file access for entropy profiling.
//!
//! This module provides a `FragmentSource` for walking file contents in
//! fixed-size fragments. It uses memory-mapping for performance and enforces
//! a file size cap to prevent DoS from malicious inputs, then feeds the
//! fragments through the streaming accumulator.

use crate::config::ProfileConfig;
use crate::entropy::stream::EntropyAccumulator;
use crate::error::{EntropyError, Result};
use crate::report::EntropyReport;
use bytes::Bytes;
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Walks a file from start to end in fragments of a configured size.
///
/// The file is memory-mapped once at open; fragments are handed out as
/// cheap `Bytes` buffers. A zero fragment size is treated as one byte.
pub struct FragmentSource {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
    fragment_size: usize,
    offset: usize,
}

impl FragmentSource {
    /// Opens a file and memory-maps it for fragment iteration.
    ///
    /// This function will fail if the file size exceeds
    /// `config.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, config: &ProfileConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let metadata = file.metadata()?;
        let file_size = metadata.len();

        debug!(
            path = %path.display(),
            size = file_size,
            max_file_size = config.max_file_size,
            "Opening file for entropy profiling"
        );

        if file_size > config.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = config.max_file_size,
                "File is too large"
            );
            return Err(EntropyError::FileTooLarge {
                limit: config.max_file_size,
                found: file_size,
            });
        }

        // For zero-length files, do not attempt to mmap (unsupported); keep None.
        // For non-empty files, map read-only.
        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: The file is backed by a real file on disk and we only request a read-only map.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
            fragment_size: config.fragment_size.max(1),
            offset: 0,
        })
    }

    /// Returns the total size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    /// Returns the next fragment, or None once the whole file was handed out.
    ///
    /// Every fragment is `fragment_size` bytes except the last, which holds
    /// the remainder.
    pub fn next_fragment(&mut self) -> Option<Bytes> {
        let map = self.mmap.as_ref()?;
        if self.offset >= map.len() {
            return None;
        }

        let end = std::cmp::min(self.offset + self.fragment_size, map.len());
        let out = Bytes::copy_from_slice(&map[self.offset..end]);

        trace!(
            path = %self.path.display(),
            offset = self.offset,
            len = out.len(),
            "Read fragment"
        );

        self.offset = end;
        Some(out)
    }
}

/// Profiles a file on disk.
///
/// The file is walked fragment by fragment, so peak memory stays at one
/// fragment regardless of the file size. Fails with
/// [`EntropyError::FileTooLarge`] when the file exceeds
/// `config.max_file_size`.
pub fn profile_file<P: AsRef<Path>>(path: P, config: &ProfileConfig) -> Result<EntropyReport> {
    let mut source = FragmentSource::open(path, config)?;
    let mut acc = EntropyAccumulator::new(source.size(), config.max_blocks);

    while let Some(fragment) = source.next_fragment() {
        acc.ingest(&fragment);
    }

    let report = EntropyReport::from_accumulator(&acc)?;
    debug!(
        overall = report.overall,
        block_size = report.block_size,
        block_count = report.block_count,
        "Profiled file"
    );
    Ok(report)
}

/// Profiles a byte stream of a declared length from any reader.
///
/// Reads into a fragment-sized buffer until EOF. Fails with
/// [`EntropyError::LengthMismatch`] when the reader yields fewer or more
/// bytes than `declared_len`.
pub fn profile_reader<R: Read>(
    mut reader: R,
    declared_len: u64,
    config: &ProfileConfig,
) -> Result<EntropyReport> {
    let mut acc = EntropyAccumulator::new(declared_len, config.max_blocks);
    let mut buf = vec![0u8; config.fragment_size.max(1)];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => acc.ingest(&buf[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    EntropyReport::from_accumulator(&acc)
}
