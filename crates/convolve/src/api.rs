//! High-level API for discrete convolution.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-call functions
//! [`convolve_full`] and [`convolve`], and a fluent builder for configuring
//! the output mode and evaluation method.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked when `.build()` is called; inputs
//!   are checked on every call before any computation.
//! * **Extensible**: Hidden pass hooks let extension crates install parallel
//!   and transform-based evaluation.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ConvolveBuilder`] via `Convolve::new()`.
//! 2. Chain configuration methods (`.mode()`, `.method()`).
//! 3. Call `.build()` and then `.convolve(&x, &h)` as many times as needed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::engine::executor::{ConvolveConfig, ConvolveExecutor, DirectPassFn, TransformPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::method::ConvolveMethod;
pub use crate::engine::output::ConvolveResult;
pub use crate::math::mode::ConvolveMode;
pub use crate::primitives::errors::ConvolveError;
pub use crate::primitives::sample::Sample;

// ============================================================================
// One-Call Functions
// ============================================================================

/// Full linear convolution of `x` and `h`.
///
/// Returns `len(x) + len(h) - 1` samples where
/// `y[k] = Σ x[i] · h[k - i]`. Fails with [`ConvolveError::InvalidArgument`]
/// if either sequence is empty, and with [`ConvolveError::AccumulatorOverflow`]
/// if an exact integer sum does not fit the accumulator type.
pub fn convolve_full<T: Sample>(x: &[T], h: &[T]) -> Result<Vec<T::Acc>, ConvolveError> {
    convolve(x, h, ConvolveMode::Full)
}

/// Linear convolution of `x` and `h` restricted to the given output mode.
pub fn convolve<T: Sample>(
    x: &[T],
    h: &[T],
    mode: ConvolveMode,
) -> Result<Vec<T::Acc>, ConvolveError> {
    Validator::validate_inputs(x, h)?;
    Ok(ConvolveExecutor::run(x, h, mode)?.values)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a convolution.
#[derive(Debug, Clone)]
pub struct ConvolveBuilder<T: Sample> {
    /// Output mode (default: Full).
    pub mode: Option<ConvolveMode>,

    /// Evaluation method (default: Auto).
    pub method: Option<ConvolveMethod>,

    // ======================================
    // DEV
    // ======================================
    /// Custom direct pass function.
    #[doc(hidden)]
    pub custom_direct_pass: Option<DirectPassFn<T>>,

    /// Transform-based pass function.
    #[doc(hidden)]
    pub custom_transform_pass: Option<TransformPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Sample> Default for ConvolveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> ConvolveBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mode: None,
            method: None,
            custom_direct_pass: None,
            custom_transform_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the output mode.
    pub fn mode(mut self, mode: ConvolveMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the evaluation method.
    pub fn method(mut self, method: ConvolveMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom direct pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_direct_pass(mut self, pass: DirectPassFn<T>) -> Self {
        self.custom_direct_pass = Some(pass);
        self
    }

    /// Set a transform-based pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_transform_pass(mut self, pass: TransformPassFn<T>) -> Self {
        self.custom_transform_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the convolution processor.
    pub fn build(self) -> Result<ConvolveProcessor<T>, ConvolveError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = ConvolveConfig {
            mode: self.mode.unwrap_or_default(),
            method: self.method.unwrap_or_default(),
            custom_direct_pass: self.custom_direct_pass,
            custom_transform_pass: self.custom_transform_pass,
        };

        // Reject an explicit Fft request up front if nothing can serve it
        Validator::validate_method(config.method, config.transform_available())?;

        Ok(ConvolveProcessor { config })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured convolution processor.
#[derive(Debug, Clone)]
pub struct ConvolveProcessor<T: Sample> {
    config: ConvolveConfig<T>,
}

impl<T: Sample> ConvolveProcessor<T> {
    /// Convolve `x` with `h` using the configured mode and method.
    pub fn convolve(&self, x: &[T], h: &[T]) -> Result<ConvolveResult<T::Acc>, ConvolveError> {
        Validator::validate_inputs(x, h)?;

        let output = ConvolveExecutor::run_with_config(x, h, &self.config)?;

        Ok(ConvolveResult {
            values: output.values,
            signal_len: x.len(),
            kernel_len: h.len(),
            mode: self.config.mode,
            method_used: output.method_used,
        })
    }

    /// Configured output mode.
    #[inline]
    pub fn mode(&self) -> ConvolveMode {
        self.config.mode
    }

    /// Configured (unresolved) evaluation method.
    #[inline]
    pub fn method(&self) -> ConvolveMethod {
        self.config.method
    }
}
