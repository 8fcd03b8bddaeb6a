//! Numeric sample types for convolution.
//!
//! ## Purpose
//!
//! This module defines the [`Sample`] trait, which describes the element types
//! a sequence may hold and the accumulator each one is summed into.
//!
//! ## Design notes
//!
//! * **Widening**: Integer samples are widened before multiplication so sums of
//!   products stay exact (`i32` into `i64`, `i64` into `i128`, `u32` into `u64`).
//! * **Floats**: Floating-point samples accumulate in their own type and follow
//!   standard IEEE summation.
//! * **Checked accumulation**: `checked_mul_add` reports integer overflow of
//!   the accumulator instead of wrapping (`i64` and `u64` products can fill
//!   `i128` and `u128` on their own).
//! * **Transform bridge**: Every sample converts to and from `f64` so that
//!   transform-based passes in extension crates can stay generic.
//!
//! ## Invariants
//!
//! * `widen` is lossless for every implemented type.
//! * `checked_mul_add` never returns `None` for floating-point samples.
//! * `acc_from_f64` rounds to the nearest integer for integer accumulators and
//!   saturates at the accumulator bounds.
//!
//! ## Non-goals
//!
//! * This module does not implement arbitrary-precision accumulation.
//! * This module does not support complex samples.

// External dependencies
use core::fmt::{Debug, Display};
use core::ops::{Add, Mul};
use num_traits::float::FloatCore;
use num_traits::{ToPrimitive, Zero};

// ============================================================================
// Sample Trait
// ============================================================================

/// An element type that can be convolved.
pub trait Sample: Copy + Debug + PartialEq + PartialOrd + Send + Sync + 'static {
    /// Type products and partial sums are accumulated in.
    type Acc: Copy
        + Debug
        + Display
        + PartialEq
        + PartialOrd
        + Zero
        + Add<Output = Self::Acc>
        + Mul<Output = Self::Acc>
        + ToPrimitive
        + Send
        + Sync
        + 'static;

    /// Whether the sample type is an integer type.
    const IS_INTEGER: bool;

    /// Human-readable type name.
    const NAME: &'static str;

    /// Convert the sample into its accumulator type.
    fn widen(self) -> Self::Acc;

    /// Add `a · b` to `acc` in the accumulator type.
    ///
    /// Returns `None` if an integer accumulator would overflow.
    fn checked_mul_add(acc: Self::Acc, a: Self, b: Self) -> Option<Self::Acc>;

    /// Lossy conversion to `f64` for transform-based evaluation.
    fn as_f64(self) -> f64;

    /// Absolute value as `f64`.
    #[inline]
    fn magnitude(self) -> f64 {
        FloatCore::abs(self.as_f64())
    }

    /// Convert a transform-domain result back into the accumulator type.
    fn acc_from_f64(value: f64) -> Self::Acc;
}

// ============================================================================
// Implementations
// ============================================================================

macro_rules! impl_integer_sample {
    ($($t:ty => $acc:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                type Acc = $acc;

                const IS_INTEGER: bool = true;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn widen(self) -> $acc {
                    self as $acc
                }

                #[inline]
                fn checked_mul_add(acc: $acc, a: $t, b: $t) -> Option<$acc> {
                    acc.checked_add(a.widen().checked_mul(b.widen())?)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn acc_from_f64(value: f64) -> $acc {
                    FloatCore::round(value) as $acc
                }
            }
        )*
    };
}

macro_rules! impl_float_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                type Acc = $t;

                const IS_INTEGER: bool = false;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn widen(self) -> $t {
                    self
                }

                #[inline]
                fn checked_mul_add(acc: $t, a: $t, b: $t) -> Option<$t> {
                    Some(acc + a * b)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn acc_from_f64(value: f64) -> $t {
                    value as $t
                }
            }
        )*
    };
}

impl_integer_sample! {
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
}

impl_float_sample!(f32, f64);
