//! # Regulus — Morse-Smale Complex Analysis for Rust
//!
//! Regulus turns a precomputed Morse-Smale complex (MSC) of a sampled scalar
//! field into a navigable hierarchy of partitions, and computes on demand the
//! per-partition summaries an analyst explores: quantile statistics, inverse
//! kernel regression curves with an uncertainty band, linear models, the
//! persistence histogram of the whole hierarchy, and synthetic samples drawn
//! from selected partitions.
//!
//! ## What is a Morse-Smale partition tree?
//!
//! An MSC decomposes the sample points of a scalar function into regions with
//! a single minimum and a single maximum. Simplifying the complex by increasing
//! persistence merges regions pairwise, which yields a tree: leaves are the
//! finest regions (level 0) and the root is the whole dataset (highest level).
//! Each partition refers to its points through a span of a shared permutation
//! array, plus the sample ids of its measure minimum and maximum.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use regulus::prelude::*;
//!
//! // Point Store: one dimension `x`, one measure `f`
//! let dataset = Arc::new(Dataset::new(
//!     vec!["x".into(), "f".into()],
//!     vec![
//!         vec![0.0, 0.0],
//!         vec![1.0, 2.0],
//!         vec![2.0, 4.0],
//!         vec![3.0, 6.0],
//!         vec![4.0, 8.0],
//!     ],
//!     1,
//! )?);
//!
//! // Flat partition records, as produced by an MSC post-processor
//! let msc = MscRecord {
//!     name: "f".into(),
//!     pts_idx: vec![0, 1, 2, 3, 4],
//!     partitions: vec![
//!         PartitionRecord::new(0, 1.0, [0, 4], [0, 5], vec![1, 2]),
//!         PartitionRecord::new(1, 0.0, [0, 2], [0, 3], vec![]),
//!         PartitionRecord::new(2, 0.0, [2, 4], [3, 5], vec![]),
//!     ],
//! };
//!
//! // Build the engine
//! let engine = Regulus::new()
//!     .bandwidth_factor(0.25)     // Kernel bandwidth: 25% of the measure extent
//!     .query_point_count(50)      // 50 points per regression curve
//!     .weight_function(Gaussian)  // Kernel function
//!     .build()?;
//!
//! // Load the tree
//! let tree = engine.load(dataset, &msc)?.expect("three partitions");
//! let root = tree.root();
//!
//! // Span plus the two extrema
//! assert_eq!(root.points().len(), 7);
//! assert_eq!(root.statistics().get("f").map(|s| s.n), Some(7));
//!
//! // Inverse regression x ≈ g(f)
//! let curve = root.regression_curve()?;
//! assert_eq!(curve.len(), 50);
//!
//! // Two partitions survive below the root level
//! assert_eq!(tree.persistence_histogram().curve, vec![(1.0, 2)]);
//! # Result::<(), RegulusError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Loading returns `Result<Option<Tree>, RegulusError>`:
//!
//! - **`Ok(Some(tree))`**: The records describe a single rooted tree.
//! - **`Ok(None)`**: The MSC has no partitions.
//! - **`Err(RegulusError)`**: A structural defect (missing child, cycle, bad
//!   span, unknown measure...) was found. Nothing is partially loaded.
//!
//! Per-partition numerical results (`regression_curve`, `linear_model`) return
//! their own `Result`, computed once and cached, so a degenerate regression
//! never poisons the rest of the tree.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events (tree
//! construction at `debug`, per-partition timings at `trace`). Install any
//! subscriber in the host application to see them.
//!
//! ## Parallel evaluation
//!
//! The companion `fastRegulus` crate warms every partition cache of a tree in
//! parallel with rayon. Results are identical to the sequential path.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - regression, histogram, resampling, linear fit.
mod algorithms;

// Layer 4: Evaluation - statistics and similarity.
mod evaluation;

// Layer 5: Engine - configuration and validation.
mod engine;

// Layer 6: Model - dataset, partitions and trees.
mod model;

// High-level fluent API.
mod api;

// Standard Regulus prelude.
pub mod prelude {
    pub use crate::api::{
        Attribute, AttributeKind, AttributeStatistics, Dataset, DimensionBins, LinearModel,
        MscRecord, NodeId, NodePosition, PartitionId, PartitionRecord, PartitionRef,
        PersistenceHistogram, RegressionCurve, RegulusBuilder as Regulus, RegulusEngine,
        RegulusError, ResampleSpec, Sample, Statistics, Tree, TreeDefect, WeightFunction,
        WeightFunction::Biweight, WeightFunction::Epanechnikov, WeightFunction::Gaussian,
        WeightFunction::Tricube, WeightFunction::Uniform, lifeline_layout, resample,
        resample_with,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development, testing and the
// companion crates. It is not part of the stable API.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod model {
        pub use crate::model::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
