//! Input and configuration validation for convolution.
//!
//! ## Purpose
//!
//! This module checks the preconditions of a convolution before any work is
//! done: both sequences must be non-empty, every builder parameter must be set
//! at most once, and the requested method must be available for the inputs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Cheap**: Configuration checks are O(1). Only the transform exactness
//!   check reads the samples, once, and only for integer inputs.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reject NaN or infinite samples; they propagate.
//! * This module does not transform or copy inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::algorithms::method::{ConvolveMethod, transform_is_exact};
use crate::primitives::errors::ConvolveError;
use crate::primitives::sample::Sample;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for convolution inputs and configuration.
pub struct Validator;

impl Validator {
    /// Validate the signal and kernel sequences.
    pub fn validate_inputs<T>(x: &[T], h: &[T]) -> Result<(), ConvolveError> {
        Self::validate_non_empty(x, "x")?;
        Self::validate_non_empty(h, "h")?;
        Ok(())
    }

    /// Validate that a single named sequence is non-empty.
    pub fn validate_non_empty<T>(values: &[T], name: &str) -> Result<(), ConvolveError> {
        if values.is_empty() {
            return Err(ConvolveError::InvalidArgument(format!(
                "sequence `{name}` is empty; convolution requires at least one sample"
            )));
        }
        Ok(())
    }

    /// Validate that an explicitly requested method can be evaluated.
    pub fn validate_method(
        method: ConvolveMethod,
        transform_available: bool,
    ) -> Result<(), ConvolveError> {
        if method == ConvolveMethod::Fft && !transform_available {
            return Err(ConvolveError::UnsupportedFeature {
                method: method.name(),
                feature: "no transform pass installed (use the fastConvolve crate)",
            });
        }
        Ok(())
    }

    /// Validate that a transform pass reproduces the exact integer result.
    pub fn validate_transform_exact<T: Sample>(x: &[T], h: &[T]) -> Result<(), ConvolveError> {
        if !transform_is_exact(x, h) {
            return Err(ConvolveError::UnsupportedFeature {
                method: ConvolveMethod::Fft.name(),
                feature: "integer inputs exceed the exact transform range (use Direct or Auto)",
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ConvolveError> {
        if let Some(param) = duplicate_param {
            return Err(ConvolveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
