//! Parallel cache warm-up for partition trees.
//!
//! ## Purpose
//!
//! This module computes every partition's lazily cached results across all
//! CPU cores, so that later sequential navigation of the tree only reads
//! caches.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` over arena node ids; partitions are independent.
//! * **Idempotence**: Caches are `OnceLock`s in `regulus`, so a partition already
//!   computed elsewhere is only read, and concurrent requests compute it once.
//! * **Failures**: Degenerate regressions and singular fits are counted, not
//!   raised; the cached error is what a later sequential call returns.
//!
//! ## Invariants
//!
//! * After `prefetch`, every partition's points, statistics, regression curve
//!   and linear model caches are populated.
//! * Cached values are identical to those the sequential path computes.
//!
//! ## Non-goals
//!
//! * This module does not build trees (handled by `regulus::model::tree`).

use std::time::Instant;

// External dependencies
use rayon::prelude::*;
use tracing::debug;

// Export dependencies from regulus crate
use regulus::internals::model::tree::Tree;

/// Which caches a warm-up pass fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchPlan {
    /// Per-attribute statistics.
    pub statistics: bool,

    /// Inverse regression curves.
    pub regression: bool,

    /// Linear models.
    pub linear: bool,
}

impl Default for PrefetchPlan {
    fn default() -> Self {
        Self {
            statistics: true,
            regression: true,
            linear: true,
        }
    }
}

/// Outcome counts of a warm-up pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefetchSummary {
    /// Partitions visited.
    pub partitions: usize,

    /// Partitions whose regression curve is a cached error.
    pub regression_failures: usize,

    /// Partitions whose linear model is a cached error.
    pub linear_failures: usize,
}

/// Fill the caches selected by `plan` for every partition in parallel.
pub fn prefetch_with(tree: &Tree, plan: PrefetchPlan) -> PrefetchSummary {
    let start = Instant::now();

    let summary = (0..tree.len())
        .into_par_iter()
        .filter_map(|n| tree.node(n))
        .map(|p| {
            p.point_ids();
            if plan.statistics {
                p.statistics();
            }
            let regression_failed = plan.regression && p.regression_curve().is_err();
            let linear_failed = plan.linear && p.linear_model().is_err();
            PrefetchSummary {
                partitions: 1,
                regression_failures: usize::from(regression_failed),
                linear_failures: usize::from(linear_failed),
            }
        })
        .reduce(PrefetchSummary::default, |a, b| PrefetchSummary {
            partitions: a.partitions + b.partitions,
            regression_failures: a.regression_failures + b.regression_failures,
            linear_failures: a.linear_failures + b.linear_failures,
        });

    debug!(
        msc = tree.name(),
        partitions = summary.partitions,
        regression_failures = summary.regression_failures,
        linear_failures = summary.linear_failures,
        threads = rayon::current_num_threads(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "prefetched partition caches"
    );

    summary
}

/// Fill every cache of every partition in parallel.
pub fn prefetch(tree: &Tree) -> PrefetchSummary {
    prefetch_with(tree, PrefetchPlan::default())
}
