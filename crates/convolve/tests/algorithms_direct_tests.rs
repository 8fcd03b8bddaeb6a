#![cfg(feature = "dev")]
//! Tests for direct convolution.
//!
//! These tests verify the direct double-sum evaluation against hand-computed
//! references:
//! - Integer inputs (exact)
//! - Floating-point inputs
//! - Windows of the full output
//! - Accumulator overflow
//!
//! ## Test Organization
//!
//! 1. **Reference Values** - Hand-computed outputs
//! 2. **Windows** - Partial evaluation
//! 3. **Numeric Types** - Widening and floats
//! 4. **Overflow** - Extreme 64-bit inputs

use approx::assert_relative_eq;

use convolve::internals::algorithms::direct::{direct_pass, direct_sample, direct_sample_checked};
use convolve::internals::primitives::errors::ConvolveError;

// ============================================================================
// Reference Values
// ============================================================================

/// Test the first reference pair.
///
/// 71*74 = 5254
/// 71*75 + 72*74 = 10653
/// 71*76 + 72*75 + 73*74 = 16198
/// 72*76 + 73*75 = 10947
/// 73*76 = 5548
#[test]
fn test_reference_pair_71() {
    let x = [71, 72, 73];
    let h = [74, 75, 76];
    let y = direct_pass(&x, &h, 0..5).unwrap();
    assert_eq!(y, vec![5254, 10653, 16198, 10947, 5548]);
}

/// Test the second reference pair.
#[test]
fn test_reference_pair_10() {
    let x = [10, 20, 30];
    let h = [40, 50, 60];
    let y = direct_pass(&x, &h, 0..5).unwrap();
    assert_eq!(y, vec![400, 1300, 2800, 2700, 1800]);
    assert_eq!(y[0], 10 * 40);
    assert_eq!(y[4], 30 * 60);
}

/// Test a moving-sum kernel.
#[test]
fn test_moving_sum() {
    let x = [1, 2, 3, 4];
    let h = [1, 1];
    assert_eq!(direct_pass(&x, &h, 0..5).unwrap(), vec![1, 3, 5, 7, 4]);
}

/// Test single-sample inputs.
#[test]
fn test_single_samples() {
    assert_eq!(direct_pass(&[3], &[4], 0..1).unwrap(), vec![12]);
    assert_eq!(direct_pass(&[2], &[1, 2, 3], 0..3).unwrap(), vec![2, 4, 6]);
}

// ============================================================================
// Window Tests
// ============================================================================

/// Test that windows match slices of the full output.
#[test]
fn test_window_matches_full_slice() {
    let x = [3, -1, 4, 1, -5, 9];
    let h = [2, 7, -1];
    let full = direct_pass(&x, &h, 0..8).unwrap();

    assert_eq!(direct_pass(&x, &h, 2..6).unwrap(), full[2..6].to_vec());
    assert_eq!(direct_pass(&x, &h, 7..8).unwrap(), full[7..8].to_vec());
    assert!(direct_pass(&x, &h, 3..3).unwrap().is_empty());
}

/// Test individual samples.
#[test]
fn test_direct_sample() {
    let x = [1, 2, 3];
    let h = [4, 5, 6];
    assert_eq!(direct_sample(&x, &h, 0), Some(4));
    assert_eq!(direct_sample(&x, &h, 2), Some(6 + 10 + 12));
    assert_eq!(direct_sample(&x, &h, 4), Some(18));
}

// ============================================================================
// Numeric Type Tests
// ============================================================================

/// Test that i32 products accumulate without overflow.
#[test]
fn test_i32_no_overflow() {
    let x = [i32::MAX, i32::MAX];
    let h = [i32::MAX, i32::MAX];
    let y = direct_pass(&x, &h, 0..3).unwrap();
    let p = i32::MAX as i64 * i32::MAX as i64;
    assert_eq!(y, vec![p, 2 * p, p]);
}

/// Test unsigned inputs.
#[test]
fn test_u8_inputs() {
    let x: [u8; 2] = [255, 255];
    let h: [u8; 2] = [255, 1];
    assert_eq!(direct_pass(&x, &h, 0..3).unwrap(), vec![65025u64, 65280, 255]);
}

/// Test floating-point inputs.
#[test]
fn test_float_inputs() {
    let x = [0.5, -1.25, 2.0];
    let h = [4.0, 0.1];
    let y = direct_pass(&x, &h, 0..4).unwrap();

    assert_relative_eq!(y[0], 2.0);
    assert_relative_eq!(y[1], 0.05 - 5.0, epsilon = 1e-12);
    assert_relative_eq!(y[2], -0.125 + 8.0, epsilon = 1e-12);
    assert_relative_eq!(y[3], 0.2, epsilon = 1e-12);
}

/// Test that NaN propagates only to samples it overlaps.
#[test]
fn test_nan_propagates_locally() {
    let x = [1.0, f64::NAN, 1.0, 1.0, 1.0];
    let h = [1.0, 1.0];
    let y = direct_pass(&x, &h, 0..6).unwrap();

    assert_eq!(y[0], 1.0);
    assert!(y[1].is_nan());
    assert!(y[2].is_nan());
    assert_eq!(y[3], 2.0);
    assert_eq!(y[5], 1.0);
}

// ============================================================================
// Overflow Tests
// ============================================================================

/// Test that a single extreme i64 product still fits i128.
#[test]
fn test_i64_single_product_fits() {
    let y = direct_pass(&[i64::MIN], &[i64::MIN], 0..1).unwrap();
    assert_eq!(y, vec![1i128 << 126]);
}

/// Test that summing two extreme i64 products is reported, not wrapped.
#[test]
fn test_i64_min_overflow() {
    let x = [i64::MIN, i64::MIN];
    let h = [i64::MIN, i64::MIN];

    assert_eq!(direct_sample(&x, &h, 0), Some(1i128 << 126));
    assert_eq!(direct_sample(&x, &h, 1), None);
    assert_eq!(
        direct_pass(&x, &h, 0..3),
        Err(ConvolveError::AccumulatorOverflow {
            index: 1,
            sample: "i64"
        })
    );
}

/// Test that u64 overflow is reported.
#[test]
fn test_u64_max_overflow() {
    let x = [u64::MAX, u64::MAX];
    let h = [u64::MAX, u64::MAX];

    assert!(matches!(
        direct_sample_checked(&x, &h, 1),
        Err(ConvolveError::AccumulatorOverflow { index: 1, sample: "u64" })
    ));
    // The edge samples hold a single product and fit.
    assert_eq!(
        direct_sample_checked(&x, &h, 2).unwrap(),
        u64::MAX as u128 * u64::MAX as u128
    );
}

/// Test that mixed signs which cancel do not trip the check.
#[test]
fn test_i64_cancelling_products() {
    let x = [i64::MIN, i64::MAX];
    let h = [i64::MAX, i64::MAX];
    let y = direct_pass(&x, &h, 0..3).unwrap();
    assert_eq!(y[1], i64::MIN as i128 * i64::MAX as i128 + i64::MAX as i128 * i64::MAX as i128);
}
