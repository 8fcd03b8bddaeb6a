//! Output types and result structures for convolution operations.
//!
//! ## Purpose
//!
//! This module defines [`ConvolveResult`], which carries the output samples of
//! a convolution together with the metadata needed to interpret them: input
//! lengths, output mode and the method that produced the values.
//!
//! ## Design notes
//!
//! * **Ownership**: A result is created fresh per call and owned by the caller.
//! * **Ergonomics**: Implements `Display` as a summary plus an index/amplitude
//!   table, the textual counterpart of a stem plot.
//!
//! ## Invariants
//!
//! * `values.len() == mode.output_len(signal_len, kernel_len)`.
//! * `method_used` is never `Auto`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not render graphics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::ToPrimitive;
use num_traits::float::FloatCore;

// Internal dependencies
use crate::algorithms::method::ConvolveMethod;
use crate::math::mode::ConvolveMode;
use crate::math::overlap::full_len;

// ============================================================================
// Result Structure
// ============================================================================

/// Convolution output with the metadata that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolveResult<A> {
    /// Output samples.
    pub values: Vec<A>,

    /// Length of the signal `x`.
    pub signal_len: usize,

    /// Length of the kernel `h`.
    pub kernel_len: usize,

    /// Output mode the values were produced for.
    pub mode: ConvolveMode,

    /// Evaluation method actually used.
    pub method_used: ConvolveMethod,
}

impl<A: Copy + ToPrimitive> ConvolveResult<A> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of output samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the result holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Output samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.values
    }

    /// Consume the result and return the output samples.
    #[inline]
    pub fn into_values(self) -> Vec<A> {
        self.values
    }

    /// Length of the full convolution of the same inputs.
    #[inline]
    pub fn full_len(&self) -> usize {
        full_len(self.signal_len, self.kernel_len)
    }

    /// Index and value of the sample with the largest magnitude.
    ///
    /// The first such sample wins on ties. NaN samples are skipped.
    pub fn peak(&self) -> Option<(usize, A)> {
        let mut best: Option<(usize, A, f64)> = None;
        for (i, &v) in self.values.iter().enumerate() {
            let Some(mag) = v.to_f64().map(FloatCore::abs) else {
                continue;
            };
            if mag.is_nan() {
                continue;
            }
            match best {
                Some((_, _, best_mag)) if mag <= best_mag => {}
                _ => best = Some((i, v, mag)),
            }
        }
        best.map(|(i, v, _)| (i, v))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<A: Copy + Display + Debug> Display for ConvolveResult<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Signal length: {}", self.signal_len)?;
        writeln!(f, "  Kernel length: {}", self.kernel_len)?;
        writeln!(f, "  Mode:          {}", self.mode.name())?;
        writeln!(f, "  Method:        {}", self.method_used.name())?;
        writeln!(f, "  Output length: {}", self.values.len())?;
        writeln!(f)?;

        writeln!(f, "Convolution Output:")?;
        writeln!(f, "{:>8} {:>14}", "Index", "Amplitude")?;
        writeln!(f, "{:-<width$}", "", width = 23)?;

        // Data rows (show first 10 and last 10 if more than 20 samples)
        let n = self.values.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            // Precision is ignored for integer accumulators.
            writeln!(f, "{:>8} {:>14.6}", idx, self.values[idx])?;
        }

        Ok(())
    }
}
