//! Parallel direct evaluation of the convolution sum.
//!
//! ## Purpose
//!
//! This module provides the parallel direct pass that is injected into the
//! `convolve` crate's execution engine. Every output sample is an independent
//! dot product, so the output window is split across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential direct pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Exactness**: Each sample is computed by the same kernel as the sequential
//!   pass, so results are bit-identical to it. Overflow is reported as an error
//!   (the reported index may be any overflowing sample).
//!
//! ## Key concepts
//!
//! * **Chunking**: Each task covers at least [`MIN_SAMPLES_PER_TASK`] outputs
//!   so short convolutions are not dominated by scheduling.
//! * **Integration**: Plugs into the `convolve` executor via the `DirectPassFn` hook.
//!
//! ## Invariants
//!
//! * Inputs are non-empty.
//! * `window` lies within `0..len(x) + len(h) - 1`.
//!
//! ## Non-goals
//!
//! * This module does not choose between methods (handled by `convolve::method`).
//! * This module does not validate input data (handled by `validator`).

// External dependencies
use core::ops::Range;
use rayon::prelude::*;

// Export dependencies from convolve crate
use convolve::internals::algorithms::direct::direct_sample_checked;
use convolve::internals::primitives::errors::ConvolveError;
use convolve::internals::primitives::sample::Sample;

/// Minimum number of output samples handed to one rayon task.
pub const MIN_SAMPLES_PER_TASK: usize = 64;

// ============================================================================
// Parallel Direct Pass
// ============================================================================

/// Compute the given window of the full convolution in parallel.
pub fn direct_pass_parallel<T: Sample>(
    x: &[T],
    h: &[T],
    window: Range<usize>,
) -> Result<Vec<T::Acc>, ConvolveError> {
    log::trace!(
        "parallel direct pass: {} outputs on {} threads",
        window.len(),
        rayon::current_num_threads()
    );

    window
        .into_par_iter()
        .with_min_len(MIN_SAMPLES_PER_TASK)
        .map(|k| direct_sample_checked(x, h, k))
        .collect()
}
