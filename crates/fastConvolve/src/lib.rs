//! # fastConvolve: Parallel and FFT-Accelerated Convolution
//!
//! Accelerated discrete linear convolution for **Rust**, built on the
//! `convolve` crate. Results are identical to `convolve`; only the way they
//! are computed changes.
//!
//! ## What does it add?
//!
//! * **Parallel direct evaluation**: every output sample is an independent dot
//!   product, so the output is split across CPU cores with `rayon`.
//! * **FFT evaluation**: long inputs are convolved as a pointwise product of
//!   their spectra with `rustfft`, in `O(N log N)` instead of `O(m · n)`.
//! * **Automatic selection**: `Auto` estimates the cost of both methods and
//!   keeps integer results exact by falling back to direct evaluation when the
//!   output could exceed the `f64` mantissa.
//! * **ndarray input**: `Array1` and contiguous views are accepted directly.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastConvolve::prelude::*;
//!
//! let x = vec![71, 72, 73];
//! let h = vec![74, 75, 76];
//!
//! let y = convolve_full(&x, &h)?;
//!
//! assert_eq!(y, vec![5254, 10653, 16198, 10947, 5548]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use fastConvolve::prelude::*;
//!
//! let x: Vec<f64> = (0..4096).map(|i| (i as f64 * 0.01).sin()).collect();
//! let h = vec![0.25; 512];
//!
//! let model = Convolve::new()
//!     .mode(Same)         // Output the size of `x`, centered
//!     .method(Auto)       // Cheapest exact method for the inputs
//!     .parallel(true)     // Multi-threaded direct evaluation
//!     .build()?;
//!
//! let result = model.convolve(&x, &h)?;
//! assert_eq!(result.len(), x.len());
//! assert_eq!(result.method_used, Fft);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! ```rust
//! use fastConvolve::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
//! let h = Array1::from_vec(vec![1.0, 1.0]);
//!
//! let model = Convolve::new().mode(Valid).build()?;
//! let result = model.convolve(&x, &h)?;
//!
//! assert_eq!(result.values, vec![3.0, 5.0, 7.0]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! Non-contiguous arrays (for example, strided slices) are rejected with
//! `ConvolveError::InvalidArgument`.

#![allow(non_snake_case)]

// Layer 5: Engine - accelerated passes.
mod engine;

// High-level fluent API for accelerated convolution.
mod api;

// Input data handling.
mod input;

pub use api::{
    ConvolveError, ConvolveMethod, ConvolveMode, ConvolveResult, FastConvolve,
    FastConvolveBuilder, Sample, convolve, convolve_full,
};
pub use input::ConvolveInput;

// Standard fastConvolve prelude.
pub mod prelude {
    pub use crate::api::{
        ConvolveError, ConvolveMethod,
        ConvolveMethod::{Auto, Direct, Fft},
        ConvolveMode,
        ConvolveMode::{Full, Same, Valid},
        ConvolveResult, FastConvolveBuilder as Convolve, Sample, convolve, convolve_full,
    };
    pub use crate::input::ConvolveInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
