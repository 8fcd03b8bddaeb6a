//! Execution engine for convolution passes.
//!
//! ## Purpose
//!
//! This module provides the executor that turns a validated pair of sequences
//! and a [`ConvolveConfig`] into output samples. It resolves the output window
//! from the mode, resolves `Auto` into a concrete method, and dispatches to
//! either the built-in sequential direct pass or a pass injected by an
//! extension crate.
//!
//! ## Design notes
//!
//! * **Pass hooks**: Extension crates plug in parallel or transform-based
//!   evaluation through plain function pointers, keeping this crate free of
//!   threading and FFT dependencies.
//! * **Windowed**: Passes receive the output window and compute nothing else.
//! * **Fallible passes**: Passes return `Result` so integer overflow in the
//!   accumulator surfaces as an error instead of a wrapped value.
//!
//! ## Invariants
//!
//! * Inputs are non-empty (checked by the caller via `Validator`).
//! * The output has exactly `mode.output_len(x.len(), h.len())` samples.
//! * The reported method is never `Auto`.
//! * Integer inputs only reach a transform pass inside the exact range.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.
//! * This module does not handle parallel execution directly (handled by extensions).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::Range;

// Internal dependencies
use crate::algorithms::direct::direct_pass;
use crate::algorithms::method::ConvolveMethod;
use crate::engine::validator::Validator;
use crate::math::mode::ConvolveMode;
use crate::primitives::errors::ConvolveError;
use crate::primitives::sample::Sample;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom direct pass (e.g., parallel evaluation).
#[doc(hidden)]
pub type DirectPassFn<T> = fn(
    &[T],         // x
    &[T],         // h
    Range<usize>, // window of the full output
) -> Result<Vec<<T as Sample>::Acc>, ConvolveError>;

/// Signature for a transform-based pass (e.g., FFT evaluation).
#[doc(hidden)]
pub type TransformPassFn<T> = fn(
    &[T],         // x
    &[T],         // h
    Range<usize>, // window of the full output
) -> Result<Vec<<T as Sample>::Acc>, ConvolveError>;

/// Output from convolution execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<A> {
    /// Output samples for the requested window.
    pub values: Vec<A>,

    /// Window of the full convolution the values cover.
    pub window: Range<usize>,

    /// Method actually used (never `Auto`).
    pub method_used: ConvolveMethod,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for convolution execution.
#[derive(Debug, Clone)]
pub struct ConvolveConfig<T: Sample> {
    /// Portion of the full convolution to produce.
    pub mode: ConvolveMode,

    /// Requested evaluation method.
    pub method: ConvolveMethod,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom direct pass (replaces the sequential pass).
    #[doc(hidden)]
    pub custom_direct_pass: Option<DirectPassFn<T>>,

    /// Transform-based pass (enables `ConvolveMethod::Fft`).
    #[doc(hidden)]
    pub custom_transform_pass: Option<TransformPassFn<T>>,
}

impl<T: Sample> Default for ConvolveConfig<T> {
    fn default() -> Self {
        Self {
            mode: ConvolveMode::default(),
            method: ConvolveMethod::default(),
            custom_direct_pass: None,
            custom_transform_pass: None,
        }
    }
}

impl<T: Sample> ConvolveConfig<T> {
    /// Whether a transform pass is installed.
    #[inline]
    pub fn transform_available(&self) -> bool {
        self.custom_transform_pass.is_some()
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for convolution passes.
pub struct ConvolveExecutor;

impl ConvolveExecutor {
    /// Run a convolution with the given configuration.
    ///
    /// Inputs must already be validated as non-empty.
    pub fn run_with_config<T: Sample>(
        x: &[T],
        h: &[T],
        config: &ConvolveConfig<T>,
    ) -> Result<ExecutorOutput<T::Acc>, ConvolveError> {
        let window = config.mode.output_window(x.len(), h.len());
        let method = config.method.resolve(x, h, config.transform_available());

        log::debug!(
            "convolving {} x {} {} samples: mode={}, requested={}, resolved={}",
            x.len(),
            h.len(),
            T::NAME,
            config.mode.name(),
            config.method.name(),
            method.name()
        );

        Validator::validate_method(method, config.transform_available())?;
        if method == ConvolveMethod::Fft {
            Validator::validate_transform_exact(x, h)?;
        }

        let values = match (method, config.custom_transform_pass, config.custom_direct_pass) {
            (ConvolveMethod::Fft, Some(pass), _) => pass(x, h, window.clone())?,
            (_, _, Some(pass)) => pass(x, h, window.clone())?,
            _ => direct_pass(x, h, window.clone())?,
        };

        Ok(ExecutorOutput {
            values,
            window,
            method_used: method,
        })
    }

    /// Run a sequential direct convolution with default settings for a mode.
    pub fn run<T: Sample>(
        x: &[T],
        h: &[T],
        mode: ConvolveMode,
    ) -> Result<ExecutorOutput<T::Acc>, ConvolveError> {
        let config = ConvolveConfig {
            mode,
            method: ConvolveMethod::Direct,
            ..ConvolveConfig::default()
        };
        Self::run_with_config(x, h, &config)
    }
}
