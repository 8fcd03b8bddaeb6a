#![cfg(feature = "dev")]
//! Property-based tests for convolution.
//!
//! These tests check algebraic properties of the full convolution over
//! randomly generated sequences:
//! - Output length
//! - Commutativity
//! - Identity kernel
//! - Linearity
//! - Mode windows agree with the full output

use proptest::prelude::*;

use convolve::internals::api::{ConvolveMode, convolve, convolve_full};

// ============================================================================
// Strategies
// ============================================================================

fn int_seq() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-10_000i32..10_000, 1..40)
}

fn float_seq() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 1..40)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_full_length(x in int_seq(), h in int_seq()) {
        let y = convolve_full(&x, &h).unwrap();
        prop_assert_eq!(y.len(), x.len() + h.len() - 1);
    }

    #[test]
    fn prop_commutative_integers(x in int_seq(), h in int_seq()) {
        prop_assert_eq!(convolve_full(&x, &h).unwrap(), convolve_full(&h, &x).unwrap());
    }

    #[test]
    fn prop_commutative_floats(x in float_seq(), h in float_seq()) {
        let a = convolve_full(&x, &h).unwrap();
        let b = convolve_full(&h, &x).unwrap();
        for (u, v) in a.iter().zip(b.iter()) {
            prop_assert!((u - v).abs() <= 1e-9 * (1.0 + u.abs()));
        }
    }

    #[test]
    fn prop_identity(x in int_seq()) {
        let expected: Vec<i64> = x.iter().map(|&v| v as i64).collect();
        prop_assert_eq!(convolve_full(&x, &[1]).unwrap(), expected);
    }

    #[test]
    fn prop_delayed_identity(x in int_seq(), delay in 0usize..5) {
        let mut h = vec![0i32; delay + 1];
        h[delay] = 1;
        let y = convolve_full(&x, &h).unwrap();
        prop_assert!(y[..delay].iter().all(|&v| v == 0));
        for (i, &v) in x.iter().enumerate() {
            prop_assert_eq!(y[i + delay], v as i64);
        }
    }

    #[test]
    fn prop_linear_in_signal(
        pair in (1usize..30).prop_flat_map(|n| (
            prop::collection::vec(-1000i32..1000, n),
            prop::collection::vec(-1000i32..1000, n),
        )),
        h in int_seq(),
    ) {
        let (a, b) = pair;
        let sum: Vec<i32> = a.iter().zip(b.iter()).map(|(u, v)| u + v).collect();

        let ya = convolve_full(&a, &h).unwrap();
        let yb = convolve_full(&b, &h).unwrap();
        let ysum = convolve_full(&sum, &h).unwrap();

        for k in 0..ysum.len() {
            prop_assert_eq!(ysum[k], ya[k] + yb[k]);
        }
    }

    #[test]
    fn prop_sum_of_output(x in int_seq(), h in int_seq()) {
        let y = convolve_full(&x, &h).unwrap();
        let sx: i64 = x.iter().map(|&v| v as i64).sum();
        let sh: i64 = h.iter().map(|&v| v as i64).sum();
        prop_assert_eq!(y.iter().sum::<i64>(), sx * sh);
    }

    #[test]
    fn prop_modes_are_windows_of_full(x in int_seq(), h in int_seq()) {
        let full = convolve_full(&x, &h).unwrap();
        for mode in [ConvolveMode::Same, ConvolveMode::Valid] {
            let window = mode.output_window(x.len(), h.len());
            let part = convolve(&x, &h, mode).unwrap();
            prop_assert_eq!(&part[..], &full[window]);
        }
    }
}
