//! Layer 4: Evaluation
//!
//! Parallel per-partition evaluation built on the `regulus` caches.

/// Batch evaluation and seeded parallel resampling.
pub mod batch;
