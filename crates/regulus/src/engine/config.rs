//! Validated engine configuration.
//!
//! ## Purpose
//!
//! This module holds the tunables that drive every lazily computed partition
//! result. A `RegulusConfig` is produced by `RegulusBuilder::build` and shared
//! by every tree loaded through the resulting engine.
//!
//! ## Defaults
//!
//! | Parameter           | Default               |
//! |---------------------|-----------------------|
//! | `bandwidth_factor`  | 0.1                   |
//! | `query_point_count` | 100                   |
//! | `quantile_probs`    | `[0.25, 0.5, 0.75]`   |
//! | `weight_function`   | Gaussian              |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::regression::{DEFAULT_BANDWIDTH_FACTOR, DEFAULT_QUERY_POINT_COUNT};
use crate::math::kernel::WeightFunction;

/// Default quantile probabilities for statistics.
pub const DEFAULT_QUANTILE_PROBS: [f64; 3] = [0.25, 0.5, 0.75];

/// Configuration for partition analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegulusConfig {
    /// Kernel bandwidth as a fraction of the measure extent.
    pub bandwidth_factor: f64,

    /// Number of query points along each regression curve.
    pub query_point_count: usize,

    /// Probabilities at which statistics report quantiles.
    pub quantile_probs: Vec<f64>,

    /// Kernel used by the inverse regression.
    pub weight_function: WeightFunction,
}

impl Default for RegulusConfig {
    fn default() -> Self {
        Self {
            bandwidth_factor: DEFAULT_BANDWIDTH_FACTOR,
            query_point_count: DEFAULT_QUERY_POINT_COUNT,
            quantile_probs: DEFAULT_QUANTILE_PROBS.to_vec(),
            weight_function: WeightFunction::default(),
        }
    }
}
