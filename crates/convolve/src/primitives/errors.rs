//! Error types for convolution operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running a convolution: precondition violations on the inputs, builder
//! misconfiguration, methods the current build cannot provide, and integer
//! sums that do not fit their accumulator.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the offending argument, parameter or method.
//! * **Fail-fast**: Configuration and input errors are raised before any
//!   output is computed.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * A failed operation never yields a partial result.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for convolution operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvolveError {
    /// A precondition on an input sequence was violated (e.g., it is empty).
    InvalidArgument(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The requested evaluation method is not available in this build.
    UnsupportedFeature {
        /// Name of the requested method (e.g., "Fft").
        method: &'static str,
        /// What is missing to provide it.
        feature: &'static str,
    },

    /// An exact integer sum does not fit the accumulator type.
    AccumulatorOverflow {
        /// Index of the first affected sample in the full convolution.
        index: usize,
        /// Sample type being convolved (e.g., "i64").
        sample: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ConvolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::UnsupportedFeature { method, feature } => {
                write!(f, "Method '{method}' is not available: {feature}")
            }
            Self::AccumulatorOverflow { index, sample } => {
                write!(
                    f,
                    "Accumulator overflow at output index {index}: the exact sum of {sample} products does not fit the accumulator type"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ConvolveError {}
