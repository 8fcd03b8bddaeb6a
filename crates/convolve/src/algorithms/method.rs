//! Evaluation method selection.
//!
//! ## Purpose
//!
//! This module decides how a convolution is evaluated: by the direct double
//! sum, or by a transform-based pass (multiplication in the frequency domain)
//! supplied by an extension crate.
//!
//! ## Design notes
//!
//! * **Cost model**: Direct evaluation costs `m · n` multiply-adds; a transform
//!   pass costs roughly `FFT_COST_FACTOR · N · log2(N)` for the padded length `N`.
//! * **Exactness guard**: Integer inputs only take the transform path when the
//!   worst-case transform rounding error stays far below one half, so rounding
//!   back recovers the exact integer. The bound grows with the sample
//!   magnitudes, the input lengths and `log2(N)`.
//! * **Availability**: Without a transform pass, `Auto` always resolves to `Direct`.
//!
//! ## Invariants
//!
//! * `resolve` never returns `Auto`.
//! * `Auto` never resolves to `Fft` for integer inputs outside the exact range,
//!   and an explicit `Fft` on such inputs is rejected by the executor.
//!
//! ## Non-goals
//!
//! * This module does not run any pass; it only chooses one.
//! * This module does not benchmark the machine it runs on.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::overlap::full_len;
use crate::primitives::sample::Sample;

// ============================================================================
// Constants
// ============================================================================

/// Relative cost of one transform butterfly against one direct multiply-add.
///
/// Three transforms of length `N` plus the spectral product make each
/// butterfly several times more expensive than a direct multiply-add.
pub const FFT_COST_FACTOR: f64 = 10.0;

/// Upper bound for [`transform_error_estimate`] (`2^52`).
///
/// The estimate divided by `2^53` is the predicted error in output units, so
/// this keeps it at or below one half, margin included.
pub const MAX_EXACT_TRANSFORM_MAGNITUDE: f64 = 4_503_599_627_370_496.0;

/// Safety factor applied on top of the transform error estimate.
pub const TRANSFORM_ERROR_MARGIN: f64 = 8.0;

// ============================================================================
// Convolve Method
// ============================================================================

/// How the convolution sum is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolveMethod {
    /// Pick the cheaper available method for the given inputs.
    #[default]
    Auto,

    /// Direct double-sum evaluation.
    Direct,

    /// Transform-based evaluation (requires an extension crate).
    Fft,
}

impl ConvolveMethod {
    /// Get the name of the method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ConvolveMethod::Auto => "Auto",
            ConvolveMethod::Direct => "Direct",
            ConvolveMethod::Fft => "Fft",
        }
    }

    /// Resolve `Auto` into a concrete method for the given inputs.
    ///
    /// Explicit choices are returned unchanged.
    pub fn resolve<T: Sample>(self, x: &[T], h: &[T], transform_available: bool) -> Self {
        match self {
            ConvolveMethod::Auto => {
                if transform_available && transform_is_exact(x, h) && transform_is_cheaper(x, h)
                {
                    ConvolveMethod::Fft
                } else {
                    ConvolveMethod::Direct
                }
            }
            explicit => explicit,
        }
    }
}

// ============================================================================
// Selection Helpers
// ============================================================================

/// Padded length used by transform passes for the given input lengths.
#[inline]
pub fn transform_len(x_len: usize, h_len: usize) -> usize {
    full_len(x_len, h_len).next_power_of_two()
}

/// Whether a transform pass reproduces the exact result for these inputs.
///
/// Always true for floating-point samples.
pub fn transform_is_exact<T: Sample>(x: &[T], h: &[T]) -> bool {
    if !T::IS_INTEGER {
        return true;
    }

    transform_error_estimate(x, h) <= MAX_EXACT_TRANSFORM_MAGNITUDE
}

/// Scaled bound on the absolute rounding error of a transform pass.
///
/// Forward and inverse FFTs in `f64` lose about `log2(N)` ulps relative to
/// `‖x‖₁ · ‖h‖₂`, bounded here by `max|x| · max|h| · min(m, n) · sqrt(max(m, n))`.
/// Dividing the result by `2^53` gives the error in output units.
pub fn transform_error_estimate<T: Sample>(x: &[T], h: &[T]) -> f64 {
    let max_x = x.iter().map(|v| v.magnitude()).fold(0.0, f64::max);
    let max_h = h.iter().map(|v| v.magnitude()).fold(0.0, f64::max);
    let short = x.len().min(h.len()) as f64;
    let long = x.len().max(h.len()) as f64;
    let log2_n = transform_len(x.len(), h.len()).trailing_zeros().max(1) as f64;

    max_x * max_h * short * Float::sqrt(long) * log2_n * TRANSFORM_ERROR_MARGIN
}
