//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the convolution algorithms themselves:
//! - Direct double-sum evaluation
//! - Selection between direct and transform-based evaluation
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Direct (double-sum) convolution.
pub mod direct;

/// Evaluation method selection.
pub mod method;
