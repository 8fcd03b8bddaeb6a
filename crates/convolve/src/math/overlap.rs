//! Overlap index arithmetic for linear convolution.
//!
//! ## Purpose
//!
//! This module answers two questions for a signal of length `m` and a kernel
//! of length `n`: how long the full convolution is, and which signal indices
//! `i` contribute to output sample `k` (those with `0 <= k - i < n`).
//!
//! ## Invariants
//!
//! * Both lengths are at least 1 (callers validate inputs first).
//! * `overlap_range(k, m, n)` is non-empty for every `k < full_len(m, n)`.
//!
//! ## Non-goals
//!
//! * This module does not touch sample values.

// External dependencies
use core::ops::Range;

/// Length of the full linear convolution of two non-empty sequences.
#[inline]
pub const fn full_len(x_len: usize, h_len: usize) -> usize {
    x_len + h_len - 1
}

/// Signal indices `i` that contribute to output sample `k`.
///
/// The kernel index paired with `i` is `k - i`.
#[inline]
pub fn overlap_range(k: usize, x_len: usize, h_len: usize) -> Range<usize> {
    let start = k.saturating_sub(h_len - 1);
    let end = (k + 1).min(x_len);
    start..end
}
