//! Layer 5: Engine
//!
//! This layer provides the accelerated passes injected into the `convolve`
//! executor: a multi-threaded direct pass and an FFT-based transform pass.

// Parallel direct evaluation using CPU threads
#[cfg(feature = "cpu")]
pub mod parallel;

// Transform-based evaluation using rustfft
pub mod transform;
