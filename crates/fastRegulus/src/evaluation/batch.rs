//! Parallel per-partition evaluation and resampling.
//!
//! ## Purpose
//!
//! This module evaluates a derived result for every partition of a tree in
//! parallel and returns them keyed by partition id, in pre-order. It also
//! provides a seeded parallel resampler.
//!
//! ## Design notes
//!
//! * **Ordering**: Results follow the tree's pre-order regardless of which
//!   thread computed them.
//! * **Caching**: Results are read through the partition caches, so they are
//!   bit-identical to sequential calls.
//! * **Resampling**: Draws are split into fixed-size chunks, each with its own
//!   generator seeded from `seed` and the chunk index. The output depends only
//!   on `seed` and `n`, never on the thread count.

// External dependencies
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

// Export dependencies from regulus crate
use regulus::internals::algorithms::linear::LinearModel;
use regulus::internals::algorithms::regression::RegressionCurve;
use regulus::internals::algorithms::resample::{ResampleSpec, resample_with};
use regulus::internals::evaluation::statistics::Statistics;
use regulus::internals::model::partition::PartitionRef;
use regulus::internals::model::tree::Tree;
use regulus::internals::primitives::errors::RegulusError;
use regulus::internals::primitives::records::PartitionId;

/// Number of draws handled by one resampling task.
pub const RESAMPLE_CHUNK: usize = 1024;

/// Evaluate `f` on every partition in parallel, in pre-order.
pub fn map_partitions<'t, R, F>(tree: &'t Tree, f: F) -> Vec<(PartitionId, R)>
where
    R: Send,
    F: Fn(PartitionRef<'t>) -> R + Sync + Send,
{
    let order: Vec<PartitionRef<'t>> = tree.iter().collect();
    order.into_par_iter().map(|p| (p.id(), f(p))).collect()
}

/// Statistics of every partition.
pub fn statistics_all(tree: &Tree) -> Vec<(PartitionId, &Statistics)> {
    map_partitions(tree, |p| p.statistics())
}

/// Regression curves of every partition.
pub fn regression_curves_all(
    tree: &Tree,
) -> Vec<(PartitionId, Result<&RegressionCurve, RegulusError>)> {
    map_partitions(tree, |p| p.regression_curve())
}

/// Linear models of every partition.
pub fn linear_models_all(tree: &Tree) -> Vec<(PartitionId, Result<&LinearModel, RegulusError>)> {
    map_partitions(tree, |p| p.linear_model())
}

/// Parent and sibling similarities of every partition.
pub fn similarities_all(tree: &Tree) -> Vec<(PartitionId, Result<(f64, f64), RegulusError>)> {
    map_partitions(tree, |p| -> Result<(f64, f64), RegulusError> {
        Ok((p.parent_similarity()?, p.sibling_similarity()?))
    })
}

/// Draw `n` labelled samples in parallel, reproducibly from `seed`.
pub fn resample_parallel<L>(
    spec: &ResampleSpec<L>,
    n: usize,
    seed: u64,
) -> Result<Vec<(L, Vec<f64>)>, RegulusError>
where
    L: Clone + Send + Sync,
{
    // Surface specification errors even when n == 0
    spec.bin_weights()?;

    let chunks = n.div_ceil(RESAMPLE_CHUNK);
    let parts: Vec<Vec<(L, Vec<f64>)>> = (0..chunks)
        .into_par_iter()
        .map(|c| {
            let count = RESAMPLE_CHUNK.min(n - c * RESAMPLE_CHUNK);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(c as u64));
            resample_with(spec, count, &mut rng)
        })
        .collect::<Result<_, _>>()?;

    Ok(parts.into_iter().flatten().collect())
}
