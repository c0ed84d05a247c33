//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout Regulus:
//! - Kernel functions for distance-based weighting
//! - Type-7 sample quantiles
//! - Query point spacing (linear and sub-linear)
//! - Least-squares solving
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Model
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;

/// Sample quantiles.
pub mod quantile;

/// Linear and sub-linear spacing.
pub mod spacing;

/// Least-squares solver.
pub mod linalg;
