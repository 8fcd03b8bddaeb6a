//! # convolve: Discrete Linear Convolution for Rust
//!
//! Exact, dependency-light discrete linear convolution of two finite
//! sequences, generic over integer and floating-point samples.
//!
//! ## What is discrete convolution?
//!
//! For a signal `x` and a kernel `h`, the full linear convolution is
//!
//! ```text
//! y[k] = Σ x[i] · h[k - i]     for all i with 0 <= i < len(x), 0 <= k - i < len(h)
//! ```
//!
//! and has `len(x) + len(h) - 1` samples: every offset at which the two
//! sequences overlap, including the partial overlaps at both edges.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use convolve::prelude::*;
//!
//! let x = [71, 72, 73];
//! let h = [74, 75, 76];
//!
//! let y = convolve_full(&x, &h)?;
//!
//! assert_eq!(y, vec![5254, 10653, 16198, 10947, 5548]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! Integer inputs accumulate in a wider integer type (`i32` into `i64`,
//! `i64` into `i128`, ...) so the result is exact. A sum that does not fit
//! even the wider type fails with [`ConvolveError::AccumulatorOverflow`].
//!
//! ### Full Features
//!
//! ```rust
//! use convolve::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0];
//! let h = vec![0.5, 0.5];
//!
//! let model = Convolve::new()
//!     .mode(Same)         // Output the size of `x`, centered
//!     .method(Direct)     // Direct double-sum evaluation
//!     .build()?;
//!
//! let result = model.convolve(&x, &h)?;
//! println!("{}", result);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Signal length: 4
//!   Kernel length: 2
//!   Mode:          Same
//!   Method:        Direct
//!   Output length: 4
//!
//! Convolution Output:
//!    Index      Amplitude
//!   -----------------------
//!        0       0.500000
//!        1       1.500000
//!        2       2.500000
//!        3       3.500000
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, ConvolveError>`. An empty signal or
//! kernel is rejected with [`ConvolveError::InvalidArgument`] before any
//! computation happens:
//!
//! ```rust
//! use convolve::prelude::*;
//!
//! let empty: [f64; 0] = [];
//! match convolve_full(&empty, &[1.0]) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("Convolution failed: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! convolve = { version = "0.3", default-features = false }
//! ```
//!
//! Only the direct method is available in the core crate. The `fastConvolve`
//! crate adds parallel and FFT-based evaluation on top of it.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - sample types and errors.
mod primitives;

// Layer 2: Math - index arithmetic over overlapping sequences.
mod math;

// Layer 3: Algorithms - direct evaluation and method selection.
mod algorithms;

// Layer 4: Engine - validation, execution and output.
mod engine;

// High-level fluent API for convolution.
mod api;

pub use api::{
    ConvolveError, ConvolveMethod, ConvolveMode, ConvolveResult, Sample, convolve, convolve_full,
};

// Standard convolve prelude.
pub mod prelude {
    pub use crate::api::{
        ConvolveBuilder as Convolve, ConvolveError, ConvolveMethod,
        ConvolveMethod::Auto, ConvolveMethod::Direct, ConvolveMethod::Fft, ConvolveMode,
        ConvolveMode::Full, ConvolveMode::Same, ConvolveMode::Valid, ConvolveResult, Sample,
        convolve, convolve_full,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for extension crates and
// integration tests. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
