//! FFT-based evaluation of the convolution sum.
//!
//! ## Purpose
//!
//! This module provides the transform pass that is injected into the
//! `convolve` crate's execution engine. It evaluates the convolution as a
//! pointwise product in the frequency domain, costing `O(N log N)` instead of
//! `O(m · n)`.
//!
//! ## Design notes
//!
//! * **Padding**: Both operands are zero-padded to the power-of-two length
//!   `N >= len(x) + len(h) - 1`, so the circular convolution computed by the
//!   transform equals the linear one.
//! * **Precision**: Transforms run in `f64` whatever the sample type; results
//!   are converted back with `Sample::acc_from_f64` (rounded for integers).
//! * **Normalization**: `rustfft` does not normalize, so the inverse is scaled
//!   by `1 / N`.
//!
//! ## Invariants
//!
//! * Inputs are non-empty.
//! * Integer results are exact inside the range accepted by
//!   `convolve::method::transform_is_exact`, which the `convolve` executor
//!   checks before this pass runs.
//!
//! ## Non-goals
//!
//! * This module does not cache FFT plans across calls.
//! * This module does not provide overlap-add block convolution.

// External dependencies
use core::ops::Range;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;

// Export dependencies from convolve crate
use convolve::internals::algorithms::method::transform_len;
use convolve::internals::primitives::errors::ConvolveError;
use convolve::internals::primitives::sample::Sample;

// ============================================================================
// Transform Pass
// ============================================================================

/// Compute the given window of the full convolution through the FFT.
pub fn transform_pass<T: Sample>(
    x: &[T],
    h: &[T],
    window: Range<usize>,
) -> Result<Vec<T::Acc>, ConvolveError> {
    let n = transform_len(x.len(), h.len());
    log::trace!(
        "transform pass: {} x {} samples padded to {}, window {:?}",
        x.len(),
        h.len(),
        n,
        window
    );

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let mut x_spec = padded_spectrum_input(x, n);
    let mut h_spec = padded_spectrum_input(h, n);

    forward.process(&mut x_spec);
    forward.process(&mut h_spec);

    for (a, b) in x_spec.iter_mut().zip(h_spec.iter()) {
        *a *= *b;
    }

    inverse.process(&mut x_spec);

    let scale = 1.0 / n as f64;
    Ok(x_spec[window]
        .iter()
        .map(|c| T::acc_from_f64(c.re * scale))
        .collect())
}

/// Copy `values` into a complex buffer of length `n`, zero-padded.
fn padded_spectrum_input<T: Sample>(values: &[T], n: usize) -> Vec<Complex<f64>> {
    let mut buf = vec![Complex::zero(); n];
    for (slot, v) in buf.iter_mut().zip(values.iter()) {
        *slot = Complex::new(v.as_f64(), 0.0);
    }
    buf
}
