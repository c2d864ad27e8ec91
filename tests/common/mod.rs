//! Common test fixtures and helpers.
//!
//! This module provides shared data for the integration tests.

/// A 3876-byte interview transcript used as the standard text fixture.
///
/// All pinned block and overall entropy values in the integration tests were
/// computed over exactly these bytes; do not edit the file.
pub const INTERVIEW_TEXT: &str = include_str!("interview.txt");

/// Tolerance for entropy values pinned as decimal literals.
pub const ENTROPY_EPS: f64 = 1e-9;

/// Deterministic pseudo-random bytes for synthetic inputs.
pub fn synthetic_bytes(len: usize) -> Vec<u8> {
    let mut rng: u32 = 0x2545_F491;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        rng = rng.wrapping_mul(1664525).wrapping_add(1013904223);
        out.push((rng >> 24) as u8);
    }
    out
}
