//! Input abstractions for convolution.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for convolution inputs, allowing
//! the `convolve` method to process multiple data formats (slices, vectors,
//! ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Rejects non-contiguous arrays before processing.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in order.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not copy or reorder strided data.
//! * This module does not check for empty inputs (handled by `validator`).

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from convolve crate
use convolve::internals::primitives::errors::ConvolveError;
use convolve::internals::primitives::sample::Sample;

/// Trait for types that can be used as a convolution operand.
pub trait ConvolveInput<T: Sample> {
    /// Convert the input to a contiguous slice.
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError>;
}

impl<T: Sample> ConvolveInput<T> for [T] {
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        Ok(self)
    }
}

impl<T: Sample> ConvolveInput<T> for Vec<T> {
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        Ok(self.as_slice())
    }
}

impl<T: Sample, const N: usize> ConvolveInput<T> for [T; N] {
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        Ok(self.as_slice())
    }
}

impl<T: Sample, S> ConvolveInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        self.as_slice().ok_or_else(|| {
            ConvolveError::InvalidArgument("ndarray input must be contiguous in memory".to_string())
        })
    }
}
