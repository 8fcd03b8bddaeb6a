//! Direct evaluation of linear convolution.
//!
//! ## Purpose
//!
//! This module evaluates the convolution sum directly:
//!
//! ```text
//! y[k] = Σ x[i] · h[k - i]
//! ```
//!
//! over the signal indices that overlap the kernel at offset `k`. It is the
//! reference definition every other pass is checked against.
//!
//! ## Design notes
//!
//! * **Window-based**: Only the requested window of output indices is computed.
//! * **Exact for integers**: Products are formed in the widened accumulator
//!   type with checked arithmetic; a sum that does not fit is reported as
//!   [`ConvolveError::AccumulatorOverflow`] instead of wrapping.
//! * **Independent samples**: Each output sample depends only on the inputs, so
//!   extension crates can evaluate samples in parallel with identical results.
//!
//! ## Invariants
//!
//! * Inputs are non-empty.
//! * The window lies inside `0..full_len(x.len(), h.len())`.
//! * Summation runs in increasing signal index for every sample.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs.
//! * This module does not provide sub-quadratic evaluation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::Range;
use num_traits::Zero;

// Internal dependencies
use crate::math::overlap::overlap_range;
use crate::primitives::errors::ConvolveError;
use crate::primitives::sample::Sample;

/// Compute output sample `k` of the full convolution.
///
/// Returns `None` if the integer accumulator overflows.
#[inline]
pub fn direct_sample<T: Sample>(x: &[T], h: &[T], k: usize) -> Option<T::Acc> {
    overlap_range(k, x.len(), h.len())
        .try_fold(T::Acc::zero(), |acc, i| T::checked_mul_add(acc, x[i], h[k - i]))
}

/// Compute output sample `k`, mapping overflow to an error.
#[inline]
pub fn direct_sample_checked<T: Sample>(
    x: &[T],
    h: &[T],
    k: usize,
) -> Result<T::Acc, ConvolveError> {
    direct_sample(x, h, k).ok_or(ConvolveError::AccumulatorOverflow {
        index: k,
        sample: T::NAME,
    })
}

/// Sequential direct pass over a window of the full convolution.
pub fn direct_pass<T: Sample>(
    x: &[T],
    h: &[T],
    window: Range<usize>,
) -> Result<Vec<T::Acc>, ConvolveError> {
    window.map(|k| direct_sample_checked(x, h, k)).collect()
}
