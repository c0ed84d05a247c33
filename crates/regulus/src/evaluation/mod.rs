//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives summary metrics from materialized partitions:
//! - Per-attribute quantile statistics
//! - Similarity of linear models between related partitions
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-attribute summary statistics.
pub mod statistics;

/// Coefficient similarity.
pub mod similarity;
