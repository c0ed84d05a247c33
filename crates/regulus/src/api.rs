//! High-level API for Morse-Smale complex analysis.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the analysis tunables and a loader that turns a dataset
//! and an MSC record into a navigable partition tree.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting a parameter twice is reported as an error.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegulusBuilder`] via `Regulus::new()`.
//! 2. Chain configuration methods (`.bandwidth_factor()`, `.query_point_count()`, etc.).
//! 3. Call `.build()` to obtain a [`RegulusEngine`].
//! 4. Call `.load(dataset, &msc)` once per MSC.

use std::sync::Arc;

// Internal dependencies
use crate::engine::config::RegulusConfig;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::histogram::PersistenceHistogram;
pub use crate::algorithms::linear::LinearModel;
pub use crate::algorithms::regression::RegressionCurve;
pub use crate::algorithms::resample::{DimensionBins, ResampleSpec, resample, resample_with};
pub use crate::evaluation::statistics::{AttributeStatistics, Statistics};
pub use crate::math::kernel::WeightFunction;
pub use crate::model::dataset::{Dataset, Sample};
pub use crate::model::layout::{NodePosition, lifeline_layout};
pub use crate::model::partition::{NodeId, PartitionRef};
pub use crate::model::tree::Tree;
pub use crate::primitives::errors::{RegulusError, TreeDefect};
pub use crate::primitives::records::{
    Attribute, AttributeKind, MscRecord, PartitionId, PartitionRecord,
};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the analysis engine.
#[derive(Debug, Clone, Default)]
pub struct RegulusBuilder {
    /// Kernel bandwidth as a fraction of the measure extent.
    pub bandwidth_factor: Option<f64>,

    /// Number of query points along each regression curve.
    pub query_point_count: Option<usize>,

    /// Probabilities at which statistics report quantiles.
    pub quantile_probs: Option<Vec<f64>>,

    /// Kernel weight function.
    pub weight_function: Option<WeightFunction>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RegulusBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kernel bandwidth as a fraction of the measure extent.
    pub fn bandwidth_factor(mut self, factor: f64) -> Self {
        if self.bandwidth_factor.is_some() {
            self.duplicate_param = Some("bandwidth_factor");
        }
        self.bandwidth_factor = Some(factor);
        self
    }

    /// Set the number of query points per regression curve.
    pub fn query_point_count(mut self, count: usize) -> Self {
        if self.query_point_count.is_some() {
            self.duplicate_param = Some("query_point_count");
        }
        self.query_point_count = Some(count);
        self
    }

    /// Set the probabilities at which statistics report quantiles.
    pub fn quantile_probs(mut self, probs: &[f64]) -> Self {
        if self.quantile_probs.is_some() {
            self.duplicate_param = Some("quantile_probs");
        }
        self.quantile_probs = Some(probs.to_vec());
        self
    }

    /// Set the kernel weight function.
    pub fn weight_function(mut self, wf: WeightFunction) -> Self {
        if self.weight_function.is_some() {
            self.duplicate_param = Some("weight_function");
        }
        self.weight_function = Some(wf);
        self
    }

    /// Validate the configuration and create the engine.
    pub fn build(self) -> Result<RegulusEngine, RegulusError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = RegulusConfig::default();
        let config = RegulusConfig {
            bandwidth_factor: self.bandwidth_factor.unwrap_or(defaults.bandwidth_factor),
            query_point_count: self.query_point_count.unwrap_or(defaults.query_point_count),
            quantile_probs: self.quantile_probs.unwrap_or(defaults.quantile_probs),
            weight_function: self.weight_function.unwrap_or(defaults.weight_function),
        };

        Validator::validate_config(&config)?;

        Ok(RegulusEngine {
            config: Arc::new(config),
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Validated engine that loads MSC records into trees.
#[derive(Debug, Clone)]
pub struct RegulusEngine {
    config: Arc<RegulusConfig>,
}

impl RegulusEngine {
    /// Active configuration.
    pub fn config(&self) -> &RegulusConfig {
        &self.config
    }

    /// Rebuild the partition tree of `msc` over `dataset`.
    ///
    /// Returns `Ok(None)` if `msc` has no partitions.
    pub fn load(
        &self,
        dataset: Arc<Dataset>,
        msc: &MscRecord,
    ) -> Result<Option<Tree>, RegulusError> {
        Tree::build(dataset, msc, Arc::clone(&self.config))
    }

    /// Load every MSC of a multi-measure dataset, skipping empty ones.
    pub fn load_all(
        &self,
        dataset: Arc<Dataset>,
        mscs: &[MscRecord],
    ) -> Result<Vec<Tree>, RegulusError> {
        let mut trees = Vec::with_capacity(mscs.len());
        for msc in mscs {
            if let Some(tree) = self.load(Arc::clone(&dataset), msc)? {
                trees.push(tree);
            }
        }
        Ok(trees)
    }
}
