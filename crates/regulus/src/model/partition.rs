//! Partition nodes and their lazily computed results.
//!
//! ## Purpose
//!
//! This module defines the arena node stored by a `Tree` and the borrowed
//! `PartitionRef` view through which callers navigate the hierarchy and ask
//! for per-partition results.
//!
//! ## Design notes
//!
//! * **Arena**: Nodes live in the tree's vector; parent and child links are
//!   `NodeId` indices into it.
//! * **Materialization**: A partition's points are the `pts_idx` entries of its
//!   span followed by the min and max extremum samples. The extrema are always
//!   appended, even when already inside the span.
//! * **Caching**: Points, statistics, the regression curve and the linear model
//!   are computed on first request and kept in `OnceLock`s. Failures are cached
//!   too, so repeated calls return identical results.
//!
//! ## Invariants
//!
//! * `size = span[1] - span[0]`.
//! * Caches are never invalidated; a loaded tree is immutable apart from
//!   `alias` and `notes`.

use std::sync::OnceLock;
use std::time::Instant;

// External dependencies
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::linear::LinearModel;
use crate::algorithms::regression::{InverseRegression, RegressionCurve};
use crate::algorithms::resample::{DimensionBins, ResampleSpec};
use crate::evaluation::similarity::cosine_similarity;
use crate::evaluation::statistics::Statistics;
use crate::math::quantile::quantile_sorted;
use crate::math::spacing::sub_linear_space;
use crate::model::dataset::Sample;
use crate::model::tree::Tree;
use crate::primitives::errors::RegulusError;
use crate::primitives::records::PartitionId;
use crate::primitives::sorting::sorted_copy;

/// Index of a node in its tree's arena.
pub type NodeId = usize;

// ============================================================================
// Arena Node
// ============================================================================

/// One partition stored in a tree's arena.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) id: PartitionId,
    pub(crate) lvl: f64,
    pub(crate) minmax_idx: [usize; 2],
    pub(crate) span: [usize; 2],
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) alias: String,
    pub(crate) notes: String,
    points: OnceLock<Vec<usize>>,
    statistics: OnceLock<Statistics>,
    regression: OnceLock<Result<RegressionCurve, RegulusError>>,
    linear: OnceLock<Result<LinearModel, RegulusError>>,
}

impl Node {
    pub(crate) fn new(id: PartitionId, lvl: f64, minmax_idx: [usize; 2], span: [usize; 2]) -> Self {
        Self {
            id,
            lvl,
            minmax_idx,
            span,
            parent: None,
            children: Vec::new(),
            alias: String::new(),
            notes: String::new(),
            points: OnceLock::new(),
            statistics: OnceLock::new(),
            regression: OnceLock::new(),
            linear: OnceLock::new(),
        }
    }
}

// ============================================================================
// Partition View
// ============================================================================

/// Borrowed view of one partition of a tree.
#[derive(Debug, Clone, Copy)]
pub struct PartitionRef<'a> {
    tree: &'a Tree,
    node: NodeId,
}

impl<'a> PartitionRef<'a> {
    pub(crate) fn new(tree: &'a Tree, node: NodeId) -> Self {
        Self { tree, node }
    }

    #[inline]
    fn inner(&self) -> &'a Node {
        &self.tree.nodes()[self.node]
    }

    // ========================================================================
    // Structure
    // ========================================================================

    /// Arena index of this node.
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Partition id from the input record.
    pub fn id(&self) -> PartitionId {
        self.inner().id
    }

    /// Persistence level.
    pub fn lvl(&self) -> f64 {
        self.inner().lvl
    }

    /// Number of `pts_idx` entries in the span.
    pub fn size(&self) -> usize {
        let [from, to] = self.inner().span;
        to - from
    }

    /// Half-open range of ordinals into `pts_idx`.
    pub fn span(&self) -> [usize; 2] {
        self.inner().span
    }

    /// Point Store ids of the measure minimum and maximum.
    pub fn minmax_idx(&self) -> [usize; 2] {
        self.inner().minmax_idx
    }

    /// Parent partition, `None` for the root.
    pub fn parent(&self) -> Option<PartitionRef<'a>> {
        self.inner().parent.map(|p| PartitionRef::new(self.tree, p))
    }

    /// Direct children in record order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = PartitionRef<'a>> + use<'a> {
        let tree = self.tree;
        self.inner()
            .children
            .iter()
            .map(move |&c| PartitionRef::new(tree, c))
    }

    /// Returns `true` if the partition has no children.
    pub fn is_leaf(&self) -> bool {
        self.inner().children.is_empty()
    }

    /// Free-form label.
    pub fn alias(&self) -> &'a str {
        &self.inner().alias
    }

    /// Free-form annotation.
    pub fn notes(&self) -> &'a str {
        &self.inner().notes
    }

    /// Tree this partition belongs to.
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    // ========================================================================
    // Points
    // ========================================================================

    /// Point Store ids of the materialized points.
    pub fn point_ids(&self) -> &'a [usize] {
        self.inner().points.get_or_init(|| {
            let start = Instant::now();
            let [from, to] = self.inner().span;
            let [min, max] = self.inner().minmax_idx;

            let mut ids = Vec::with_capacity(to - from + 2);
            ids.extend_from_slice(&self.tree.pts_idx()[from..to]);
            ids.push(min);
            ids.push(max);

            trace!(
                partition = self.id(),
                points = ids.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "materialized points"
            );
            ids
        })
    }

    /// Materialized samples: the span, then the min and max samples.
    pub fn points(&self) -> Vec<&'a Sample> {
        let samples = self.tree.dataset().samples();
        self.point_ids().iter().map(|&id| &samples[id]).collect()
    }

    /// Row-major dimension values and measure values of the points.
    fn training_data(&self) -> (Vec<f64>, Vec<f64>) {
        let ndims = self.tree.dataset().ndims();
        let measure = self.tree.measure_index();
        let points = self.points();

        let mut dims = Vec::with_capacity(points.len() * ndims);
        let mut y = Vec::with_capacity(points.len());
        for p in points {
            dims.extend_from_slice(&p.values[..ndims]);
            y.push(p.values[measure]);
        }
        (dims, y)
    }

    // ========================================================================
    // Derived Results
    // ========================================================================

    /// Per-attribute statistics of the materialized points.
    pub fn statistics(&self) -> &'a Statistics {
        self.inner().statistics.get_or_init(|| {
            let rows: Vec<&[f64]> = self.points().iter().map(|s| s.values.as_slice()).collect();
            Statistics::compute(
                self.tree.dataset().attributes(),
                &rows,
                self.tree.measure_index(),
                &self.tree.config().quantile_probs,
            )
        })
    }

    /// Inverse kernel regression curve of the dimensions on the measure.
    pub fn regression_curve(&self) -> Result<&'a RegressionCurve, RegulusError> {
        self.inner()
            .regression
            .get_or_init(|| self.compute_regression())
            .as_ref()
            .map_err(Clone::clone)
    }

    fn compute_regression(&self) -> Result<RegressionCurve, RegulusError> {
        let start = Instant::now();
        let tree = self.tree;
        let config = tree.config();
        let dataset = tree.dataset();
        let measure = tree.measure();
        let extent = (measure.extent[0], measure.extent[1]);

        let bandwidth = InverseRegression::bandwidth_for(config.bandwidth_factor, extent);
        if !(bandwidth > 0.0) || !bandwidth.is_finite() {
            debug!(
                partition = self.id(),
                bandwidth, "regression skipped: non-positive bandwidth"
            );
            return Err(RegulusError::DegenerateRegression {
                partition: self.id(),
                query: extent.0,
            });
        }

        let (dims, y) = self.training_data();
        let [min_id, max_id] = self.minmax_idx();
        let m = tree.measure_index();
        let own = (
            dataset.samples()[min_id].values[m],
            dataset.samples()[max_id].values[m],
        );
        let queries = sub_linear_space(own, extent, config.query_point_count);

        let regression = InverseRegression {
            dims: &dims,
            measure: &y,
            n_dims: dataset.ndims(),
            weight_function: config.weight_function,
            bandwidth,
        };

        let fit = regression.evaluate(&queries).map_err(|q| {
            debug!(partition = self.id(), query = q.0, "regression degenerate");
            RegulusError::DegenerateRegression {
                partition: self.id(),
                query: q.0,
            }
        })?;

        let mut columns: Vec<String> = dataset.dims().iter().map(|a| a.name.clone()).collect();
        columns.push(measure.name.clone());

        trace!(
            partition = self.id(),
            queries = queries.len(),
            points = y.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "regression curve"
        );

        Ok(RegressionCurve::assemble(&queries, fit, columns))
    }

    /// Least-squares linear model of the measure with R² fitness.
    pub fn linear_model(&self) -> Result<&'a LinearModel, RegulusError> {
        self.inner()
            .linear
            .get_or_init(|| self.compute_linear())
            .as_ref()
            .map_err(Clone::clone)
    }

    fn compute_linear(&self) -> Result<LinearModel, RegulusError> {
        let ndims = self.tree.dataset().ndims();
        let (dims, y) = self.training_data();

        if y.len() < ndims + 1 {
            return Err(RegulusError::TooFewPoints {
                got: y.len(),
                min: ndims + 1,
            });
        }

        LinearModel::fit(&dims, &y, ndims).ok_or_else(|| {
            debug!(partition = self.id(), "linear fit singular");
            RegulusError::SingularFit {
                partition: self.id(),
            }
        })
    }

    // ========================================================================
    // Similarity
    // ========================================================================

    /// Cosine similarity of this partition's coefficients with its parent's.
    ///
    /// The root scores 1.
    pub fn parent_similarity(&self) -> Result<f64, RegulusError> {
        match self.parent() {
            None => Ok(1.0),
            Some(parent) => {
                let own = self.linear_model()?;
                let other = parent.linear_model()?;
                Ok(cosine_similarity(&own.coefficients, &other.coefficients))
            }
        }
    }

    /// Cosine similarity with the first other child of the parent.
    ///
    /// Scores 1 when there is no sibling.
    pub fn sibling_similarity(&self) -> Result<f64, RegulusError> {
        let sibling = self
            .parent()
            .and_then(|p| p.children().find(|c| c.node != self.node));
        match sibling {
            None => Ok(1.0),
            Some(sibling) => {
                let own = self.linear_model()?;
                let other = sibling.linear_model()?;
                Ok(cosine_similarity(&own.coefficients, &other.coefficients))
            }
        }
    }
}

// ============================================================================
// Resampling From Partitions
// ============================================================================

impl ResampleSpec<f64> {
    /// One bin per partition: each dimension spans the partition's `[min, max]`
    /// and the label is the partition's measure median.
    pub fn from_partitions(partitions: &[PartitionRef<'_>]) -> Result<Self, RegulusError> {
        let Some(first) = partitions.first() else {
            return Err(RegulusError::InvalidInput(
                "no partitions to resample from".to_string(),
            ));
        };

        let tree = first.tree;
        let dataset = tree.dataset();
        let ndims = dataset.ndims();
        let m = tree.measure_index();

        let mut dims: Vec<DimensionBins> = dataset
            .dims()
            .iter()
            .map(|a| DimensionBins::new(a.name.clone(), Vec::new(), Vec::new()))
            .collect();
        let mut labels = Vec::with_capacity(partitions.len());

        for p in partitions {
            if !std::ptr::eq(p.tree, tree) {
                return Err(RegulusError::InvalidInput(
                    "partitions belong to different trees".to_string(),
                ));
            }

            let points = p.points();
            for (d, bins) in dims.iter_mut().enumerate().take(ndims) {
                let (lo, hi) = points.iter().map(|s| s.values[d]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), v| (lo.min(v), hi.max(v)),
                );
                bins.from.push(lo);
                bins.to.push(hi);
            }

            let values: Vec<f64> = points.iter().map(|s| s.values[m]).collect();
            let median = quantile_sorted(&sorted_copy(&values), 0.5).unwrap_or(f64::NAN);
            labels.push(median);
        }

        Ok(ResampleSpec::new(dims, labels))
    }
}
