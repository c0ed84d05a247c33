//! # Fast Regulus (Parallel Morse-Smale Complex Analysis)
//!
//! A rayon-parallel companion to [`regulus`]. It evaluates per-partition
//! results (statistics, inverse regression curves, linear models,
//! similarities) for a whole tree across all CPU cores, and draws large
//! resamples in parallel from a seed.
//!
//! Results are read through the same `OnceLock` caches the sequential
//! getters use, so mixing parallel and sequential calls is always consistent.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use fastRegulus::prelude::*;
//!
//! let dataset = Arc::new(Dataset::new(
//!     vec!["x".into(), "y".into(), "f".into()],
//!     (0..40)
//!         .map(|i| {
//!             let x = i as f64 / 4.0;
//!             let y = (i % 5) as f64;
//!             vec![x, y, 2.0 * x - y]
//!         })
//!         .collect(),
//!     2,
//! )?);
//!
//! let msc = MscRecord {
//!     name: "f".into(),
//!     pts_idx: (0..40).collect(),
//!     partitions: vec![
//!         PartitionRecord::new(0, 1.0, [4, 39], [0, 40], vec![1, 2]),
//!         PartitionRecord::new(1, 0.0, [4, 19], [0, 20], vec![]),
//!         PartitionRecord::new(2, 0.0, [24, 39], [20, 40], vec![]),
//!     ],
//! };
//!
//! let tree = Regulus::new().build()?.load(dataset, &msc)?.expect("three partitions");
//!
//! // Warm every cache in parallel
//! let summary = tree.par_prefetch();
//! assert_eq!(summary.partitions, 3);
//!
//! // Parallel results match the sequential getters
//! for (id, model) in tree.par_linear_models() {
//!     let sequential = tree.get(id).expect("known id").linear_model()?;
//!     assert_eq!(model?, sequential);
//! }
//! # Result::<(), RegulusError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Layer 4: Evaluation - parallel batch evaluation.
mod evaluation;

// Layer 5: Engine - parallel cache warm-up.
mod engine;

// High-level parallel API.
mod api;

// Standard fastRegulus prelude.
pub mod prelude {
    pub use crate::api::{
        Attribute, AttributeKind, Dataset, DimensionBins, LinearModel, MscRecord, ParallelTree,
        PartitionId, PartitionRecord, PartitionRef, PersistenceHistogram, PrefetchPlan,
        PrefetchSummary, RegressionCurve, RegulusBuilder as Regulus, RegulusEngine, RegulusError,
        ResampleSpec, Statistics, Tree, WeightFunction,
        WeightFunction::{Biweight, Epanechnikov, Gaussian, Tricube, Uniform},
        lifeline_layout, resample, resample_parallel, resample_with,
    };
}

// Internal modules for development and testing.
#[doc(hidden)]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
