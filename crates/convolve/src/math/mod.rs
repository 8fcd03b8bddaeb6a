//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the index arithmetic of linear convolution:
//! - Which signal indices contribute to a given output sample
//! - Which slice of the full output each mode keeps
//!
//! These are pure functions of the input lengths with no numeric logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Overlap ranges and full output length.
pub mod overlap;

/// Output modes (full, same, valid).
pub mod mode;
