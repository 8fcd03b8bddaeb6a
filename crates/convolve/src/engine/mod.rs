//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a convolution: it validates inputs, resolves the
//! output window and evaluation method, dispatches to the selected pass and
//! packages the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for convolution passes.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for convolution operations.
pub mod output;
