//! Layer 5: Engine
//!
//! Parallel execution over whole partition trees.

/// Parallel cache warm-up.
pub mod executor;
