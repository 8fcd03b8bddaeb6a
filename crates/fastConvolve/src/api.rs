//! High-level API for convolution with parallel and FFT execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for accelerated
//! convolution. It extends the `convolve` builder with a multi-threaded direct
//! pass and an FFT-based transform pass, and accepts ndarray inputs.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `convolve` builder and its validation.
//! * **Parallel-First**: Direct evaluation runs on all cores unless disabled.
//! * **Transform-Ready**: `Fft` is always available, and `Auto` picks it when
//!   it is cheaper and exact.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FastConvolveBuilder`] via `Convolve::new()`.
//! 2. Chain configuration methods (`.mode()`, `.method()`, `.parallel()`).
//! 3. Call `.build()` and then `.convolve(&x, &h)` with slices, vectors or arrays.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::parallel::direct_pass_parallel;

// Internal dependencies
use crate::engine::transform::transform_pass;
use crate::input::ConvolveInput;

// Export dependencies from convolve crate
use convolve::internals::api::{ConvolveBuilder, ConvolveProcessor};

// Publicly re-exported types
pub use convolve::internals::algorithms::method::ConvolveMethod;
pub use convolve::internals::engine::output::ConvolveResult;
pub use convolve::internals::math::mode::ConvolveMode;
pub use convolve::internals::primitives::errors::ConvolveError;
pub use convolve::internals::primitives::sample::Sample;

// ============================================================================
// One-Call Functions
// ============================================================================

/// Full linear convolution of `x` and `h` with automatic method selection.
///
/// Identical in result to `convolve::convolve_full`, but long inputs are
/// evaluated in parallel or through the FFT.
pub fn convolve_full<T, I1, I2>(x: &I1, h: &I2) -> Result<Vec<T::Acc>, ConvolveError>
where
    T: Sample,
    I1: ConvolveInput<T> + ?Sized,
    I2: ConvolveInput<T> + ?Sized,
{
    convolve(x, h, ConvolveMode::Full)
}

/// Accelerated linear convolution of `x` and `h` restricted to `mode`.
pub fn convolve<T, I1, I2>(x: &I1, h: &I2, mode: ConvolveMode) -> Result<Vec<T::Acc>, ConvolveError>
where
    T: Sample,
    I1: ConvolveInput<T> + ?Sized,
    I2: ConvolveInput<T> + ?Sized,
{
    let processor = FastConvolveBuilder::new().mode(mode).build()?;
    Ok(processor.convolve(x, h)?.values)
}

// ============================================================================
// Extended Convolve Builder
// ============================================================================

/// Builder for a convolution processor with parallel and FFT support.
#[derive(Debug, Clone)]
pub struct FastConvolveBuilder<T: Sample> {
    /// Base builder from the convolve crate
    pub base: ConvolveBuilder<T>,
}

impl<T: Sample> Default for FastConvolveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> FastConvolveBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from convolve ConvolveBuilder
    /// * parallel: true (fastConvolve extension)
    pub fn new() -> Self {
        Self {
            base: ConvolveBuilder::new(),
        }
    }

    /// Set the output mode.
    pub fn mode(mut self, mode: ConvolveMode) -> Self {
        self.base = self.base.mode(mode);
        self
    }

    /// Set the evaluation method.
    pub fn method(mut self, method: ConvolveMethod) -> Self {
        self.base = self.base.method(method);
        self
    }

    /// Set parallel execution mode for direct evaluation.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.base.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the convolution processor.
    pub fn build(self) -> Result<FastConvolve<T>, ConvolveError> {
        let mut builder = self.base;

        // Configure the base builder with parallel callback if enabled
        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_direct_pass(direct_pass_parallel);
            } else {
                builder.custom_direct_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_direct_pass = None;
        }

        builder = builder.custom_transform_pass(transform_pass);

        // Validation is centralized in the convolve crate
        let processor = builder.build()?;

        Ok(FastConvolve { processor })
    }
}

// ============================================================================
// Extended Convolve Processor
// ============================================================================

/// Convolution processor with parallel and FFT support.
#[derive(Debug, Clone)]
pub struct FastConvolve<T: Sample> {
    processor: ConvolveProcessor<T>,
}

impl<T: Sample> FastConvolve<T> {
    /// Convolve `x` with `h` using the configured mode and method.
    pub fn convolve<I1, I2>(&self, x: &I1, h: &I2) -> Result<ConvolveResult<T::Acc>, ConvolveError>
    where
        I1: ConvolveInput<T> + ?Sized,
        I2: ConvolveInput<T> + ?Sized,
    {
        let x_slice = x.as_convolve_slice()?;
        let h_slice = h.as_convolve_slice()?;

        // Delegate execution to the base implementation
        self.processor.convolve(x_slice, h_slice)
    }

    /// Configured output mode.
    #[inline]
    pub fn mode(&self) -> ConvolveMode {
        self.processor.mode()
    }

    /// Configured (unresolved) evaluation method.
    #[inline]
    pub fn method(&self) -> ConvolveMethod {
        self.processor.method()
    }
}
