//! Output modes for linear convolution.
//!
//! ## Purpose
//!
//! This module defines which part of the full convolution is returned. The
//! three modes follow the conventions of `scipy.signal.convolve`.
//!
//! ## Design notes
//!
//! * **Windowing**: Every mode is a contiguous window of the full output, so
//!   passes only ever compute the samples that are kept.
//! * **Centering**: `Same` centers the window on the full output; when the
//!   excess is odd the extra sample is dropped from the start.
//!
//! ## Key concepts
//!
//! * **Full**: every offset with any overlap, `m + n - 1` samples.
//! * **Same**: `m` samples (the size of the signal), centered.
//! * **Valid**: offsets where the shorter sequence lies entirely inside the
//!   longer one, `max(m, n) - min(m, n) + 1` samples.
//!
//! ## Invariants
//!
//! * The window always lies inside `0..full_len(m, n)`.
//! * `Valid` is symmetric in its arguments.
//!
//! ## Non-goals
//!
//! * This module does not compute sample values.

// External dependencies
use core::ops::Range;

// Internal dependencies
use crate::math::overlap::full_len;

// ============================================================================
// Convolve Mode
// ============================================================================

/// Portion of the full convolution to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolveMode {
    /// All `len(x) + len(h) - 1` samples.
    #[default]
    Full,

    /// `len(x)` samples centered on the full output.
    Same,

    /// Only samples computed without implicit zero padding.
    Valid,
}

impl ConvolveMode {
    /// Get the name of the mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ConvolveMode::Full => "Full",
            ConvolveMode::Same => "Same",
            ConvolveMode::Valid => "Valid",
        }
    }

    /// Window of the full output kept by this mode.
    pub fn output_window(&self, x_len: usize, h_len: usize) -> Range<usize> {
        let full = full_len(x_len, h_len);
        match self {
            ConvolveMode::Full => 0..full,
            ConvolveMode::Same => {
                let start = (full - x_len) / 2;
                start..start + x_len
            }
            ConvolveMode::Valid => {
                let short = x_len.min(h_len);
                let long = x_len.max(h_len);
                let start = short - 1;
                start..start + (long - short + 1)
            }
        }
    }

    /// Number of samples produced by this mode.
    #[inline]
    pub fn output_len(&self, x_len: usize, h_len: usize) -> usize {
        self.output_window(x_len, h_len).len()
    }
}
