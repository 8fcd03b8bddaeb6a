#![cfg(feature = "dev")]
//! Tests for evaluation method selection.
//!
//! These tests verify the cost model, the integer exactness guard, and the
//! resolution of `Auto` into a concrete method.

use convolve::internals::algorithms::method::{
    ConvolveMethod, MAX_EXACT_TRANSFORM_MAGNITUDE, TRANSFORM_ERROR_MARGIN, transform_error_estimate,
    transform_is_cheaper, transform_is_exact, transform_len,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * 0.01).collect()
}

// ============================================================================
// Cost Model Tests
// ============================================================================

/// Test the padded transform length.
#[test]
fn test_transform_len() {
    assert_eq!(transform_len(3, 3), 8);
    assert_eq!(transform_len(64, 65), 128);
    assert_eq!(transform_len(1, 1), 1);
}

/// Test that small inputs stay on the direct path.
#[test]
fn test_small_inputs_prefer_direct() {
    assert!(!transform_is_cheaper(&ramp(3), &ramp(3)));
    assert!(!transform_is_cheaper(&ramp(64), &ramp(64)));
}

/// Test that long signals with short kernels stay on the direct path.
#[test]
fn test_short_kernel_prefers_direct() {
    assert!(!transform_is_cheaper(&ramp(10_000), &ramp(5)));
}

/// Test that large square problems prefer the transform.
#[test]
fn test_large_inputs_prefer_transform() {
    assert!(transform_is_cheaper(&ramp(512), &ramp(512)));
}

// ============================================================================
// Exactness Guard Tests
// ============================================================================

/// Test that floats are always eligible.
#[test]
fn test_floats_are_exact_enough() {
    assert!(transform_is_exact(&[1e300, 2.0], &[1e300]));
}

/// Test that small integers are eligible.
#[test]
fn test_small_integers_are_exact() {
    let x = vec![1000i32; 100];
    let h = vec![-1000i32; 100];
    assert!(transform_is_exact(&x, &h));
}

/// Test that large integers are rejected.
#[test]
fn test_large_integers_are_not_exact() {
    let x = [1i64 << 40, 1];
    let h = [1i64 << 40, 1];
    assert!(!transform_is_exact(&x, &h));
}

/// Test the boundary of the exactness guard.
#[test]
fn test_exactness_boundary() {
    assert_eq!(MAX_EXACT_TRANSFORM_MAGNITUDE, (1u64 << 52) as f64);
    assert_eq!(TRANSFORM_ERROR_MARGIN, 8.0);

    // Single samples: estimate = |a| * |b| * 8
    assert_eq!(transform_error_estimate(&[1i64 << 25], &[1i64 << 24]), (1u64 << 52) as f64);
    assert!(transform_is_exact(&[1i64 << 25], &[1i64 << 24]));
    assert!(!transform_is_exact(&[1i64 << 25], &[(1i64 << 24) + 1]));
}

/// Test that the estimate accounts for input lengths and transform size.
#[test]
fn test_estimate_grows_with_length() {
    let v = 1000i32;
    let short = transform_error_estimate(&vec![v; 16], &vec![v; 16]);
    let long = transform_error_estimate(&vec![v; 1024], &vec![v; 1024]);
    assert!(long > short * 64.0);

    // 4 samples each: short = 4, sqrt(long) = 2, N = 8 so log2(N) = 3
    assert_eq!(
        transform_error_estimate(&[2i32; 4], &[3i32; 4]),
        6.0 * 4.0 * 2.0 * 3.0 * TRANSFORM_ERROR_MARGIN
    );
}

/// Test that worst-case integer inputs whose outputs fit the mantissa are
/// still rejected when rounding error could reach one half.
#[test]
fn test_full_scale_integers_are_not_exact() {
    // Outputs reach about 2^51, inside the mantissa, but the transform error does not stay small.
    let x = vec![(1i32 << 20) - 1; 2048];
    assert!(!transform_is_exact(&x, &x));

    let x = vec![(1i32 << 18) - 1; 32_768];
    assert!(!transform_is_exact(&x, &x));

    let x = vec![(1i32 << 21) - 1; 1024];
    assert!(!transform_is_exact(&x, &x));
}

// ============================================================================
// Resolution Tests
// ============================================================================

/// Test that Auto without a transform pass resolves to Direct.
#[test]
fn test_auto_without_transform() {
    let x = ramp(512);
    assert_eq!(
        ConvolveMethod::Auto.resolve(&x, &x, false),
        ConvolveMethod::Direct
    );
}

/// Test that Auto picks the transform for large float inputs.
#[test]
fn test_auto_with_transform_large() {
    let x = ramp(512);
    assert_eq!(ConvolveMethod::Auto.resolve(&x, &x, true), ConvolveMethod::Fft);
}

/// Test that Auto keeps large-magnitude integers on the direct path.
#[test]
fn test_auto_integer_guard() {
    let x = vec![i64::MAX / 4; 512];
    assert_eq!(
        ConvolveMethod::Auto.resolve(&x, &x, true),
        ConvolveMethod::Direct
    );
}

/// Test that explicit choices are not changed.
#[test]
fn test_explicit_methods_unchanged() {
    let x = ramp(512);
    assert_eq!(
        ConvolveMethod::Direct.resolve(&x, &x, true),
        ConvolveMethod::Direct
    );
    assert_eq!(
        ConvolveMethod::Fft.resolve(&[1.0], &[1.0], false),
        ConvolveMethod::Fft
    );
}

/// Test defaults and names.
#[test]
fn test_method_metadata() {
    assert_eq!(ConvolveMethod::default(), ConvolveMethod::Auto);
    assert_eq!(ConvolveMethod::Auto.name(), "Auto");
    assert_eq!(ConvolveMethod::Direct.name(), "Direct");
    assert_eq!(ConvolveMethod::Fft.name(), "Fft");
}
