//! High-level API for partition tree analysis with parallel execution.
//!
//! ## Purpose
//!
//! This module extends the `regulus` API with a [`ParallelTree`] extension
//! trait: every whole-tree evaluation gains a parallel counterpart that uses
//! all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `regulus` builder and loader.
//! * **Transparent**: Parallel results are read from the same caches the
//!   sequential getters use.

// Internal dependencies
use crate::engine::executor::{prefetch, prefetch_with};
use crate::evaluation::batch::{
    linear_models_all, regression_curves_all, similarities_all, statistics_all,
};

// Publicly re-exported types
pub use crate::engine::executor::{PrefetchPlan, PrefetchSummary};
pub use crate::evaluation::batch::resample_parallel;
pub use regulus::internals::api::*;

/// Parallel whole-tree operations.
pub trait ParallelTree {
    /// Fill every partition cache in parallel.
    fn par_prefetch(&self) -> PrefetchSummary;

    /// Fill the caches selected by `plan` in parallel.
    fn par_prefetch_with(&self, plan: PrefetchPlan) -> PrefetchSummary;

    /// Statistics of every partition, in pre-order.
    fn par_statistics(&self) -> Vec<(PartitionId, &Statistics)>;

    /// Regression curves of every partition, in pre-order.
    fn par_regression_curves(&self) -> Vec<(PartitionId, Result<&RegressionCurve, RegulusError>)>;

    /// Linear models of every partition, in pre-order.
    fn par_linear_models(&self) -> Vec<(PartitionId, Result<&LinearModel, RegulusError>)>;

    /// Parent and sibling similarities of every partition, in pre-order.
    fn par_similarities(&self) -> Vec<(PartitionId, Result<(f64, f64), RegulusError>)>;
}

impl ParallelTree for Tree {
    fn par_prefetch(&self) -> PrefetchSummary {
        prefetch(self)
    }

    fn par_prefetch_with(&self, plan: PrefetchPlan) -> PrefetchSummary {
        prefetch_with(self, plan)
    }

    fn par_statistics(&self) -> Vec<(PartitionId, &Statistics)> {
        statistics_all(self)
    }

    fn par_regression_curves(&self) -> Vec<(PartitionId, Result<&RegressionCurve, RegulusError>)> {
        regression_curves_all(self)
    }

    fn par_linear_models(&self) -> Vec<(PartitionId, Result<&LinearModel, RegulusError>)> {
        linear_models_all(self)
    }

    fn par_similarities(&self) -> Vec<(PartitionId, Result<(f64, f64), RegulusError>)> {
        similarities_all(self)
    }
}
