//! Weighted stratified resampling.
//!
//! ## Purpose
//!
//! This module draws synthetic samples from a set of axis-aligned bins, one
//! interval per dimension per bin, choosing bins in proportion to their width.
//!
//! ## Design notes
//!
//! * **Bin weight**: Per dimension, a bin's width divided by the dimension's
//!   total width (`Σto − Σfrom`); the weight is the sum over dimensions.
//! * **Selection**: Cumulative "stairs" over bins in input order, scanned
//!   linearly for the first step above a uniform draw.
//! * **Values**: Each dimension value is uniform within the selected bin's
//!   interval and paired with the bin's label.
//! * **Randomness**: Injected through any `rand::Rng`; `resample` uses the
//!   thread-local generator.
//!
//! ## Invariants
//!
//! * Every dimension carries exactly one interval per label.
//! * Every dimension has a strictly positive total width.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// External dependencies
use rand::Rng;
use tracing::trace;

// Internal dependencies
use crate::primitives::errors::RegulusError;

// ============================================================================
// Resample Specification
// ============================================================================

/// Bin intervals of one dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionBins {
    /// Dimension attribute name.
    pub name: String,

    /// Lower bound of each bin.
    pub from: Vec<f64>,

    /// Upper bound of each bin.
    pub to: Vec<f64>,
}

impl DimensionBins {
    /// Create the intervals of one dimension.
    pub fn new(name: impl Into<String>, from: Vec<f64>, to: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }

    /// Total width `Σto − Σfrom`.
    pub fn total_width(&self) -> f64 {
        self.to.iter().sum::<f64>() - self.from.iter().sum::<f64>()
    }
}

/// Bins to resample from: intervals per dimension and one label per bin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResampleSpec<L> {
    /// Per-dimension bin intervals.
    pub dims: Vec<DimensionBins>,

    /// Label attached to samples drawn from each bin.
    pub measure: Vec<L>,
}

impl<L> ResampleSpec<L> {
    /// Create a specification from dimension bins and bin labels.
    pub fn new(dims: Vec<DimensionBins>, measure: Vec<L>) -> Self {
        Self { dims, measure }
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.measure.len()
    }

    /// Check the specification and return each bin's selection weight.
    pub fn bin_weights(&self) -> Result<Vec<f64>, RegulusError> {
        let bins = self.measure.len();

        if self.dims.is_empty() {
            return Err(RegulusError::InvalidInput(
                "resample specification has no dimensions".to_string(),
            ));
        }
        if bins == 0 {
            return Err(RegulusError::InvalidInput(
                "resample specification has no bins".to_string(),
            ));
        }

        for dim in &self.dims {
            if dim.from.len() != bins || dim.to.len() != bins {
                return Err(RegulusError::InvalidInput(format!(
                    "dimension '{}' has {} lower and {} upper bounds for {} bins",
                    dim.name,
                    dim.from.len(),
                    dim.to.len(),
                    bins
                )));
            }
            if let Some(v) = dim
                .from
                .iter()
                .chain(dim.to.iter())
                .find(|v| !v.is_finite())
            {
                return Err(RegulusError::InvalidNumericValue(format!(
                    "bin bound {} in dimension '{}'",
                    v, dim.name
                )));
            }
            if let Some(i) = (0..bins).find(|&i| dim.to[i] < dim.from[i]) {
                return Err(RegulusError::InvalidInput(format!(
                    "bin {} of dimension '{}' has upper bound {} below lower bound {}",
                    i, dim.name, dim.to[i], dim.from[i]
                )));
            }
        }

        let mut weights = vec![0.0; bins];
        for dim in &self.dims {
            let total = dim.total_width();
            if !(total > 0.0) || !total.is_finite() {
                return Err(RegulusError::ZeroWidthDimension {
                    dimension: dim.name.clone(),
                });
            }
            for (w, (&lo, &hi)) in weights.iter_mut().zip(dim.from.iter().zip(dim.to.iter())) {
                *w += (hi - lo) / total;
            }
        }

        Ok(weights)
    }
}

// ============================================================================
// Sampling
// ============================================================================

/// Draw `n` labelled samples using `rng`.
pub fn resample_with<L, R>(
    spec: &ResampleSpec<L>,
    n: usize,
    rng: &mut R,
) -> Result<Vec<(L, Vec<f64>)>, RegulusError>
where
    L: Clone,
    R: Rng + ?Sized,
{
    let weights = spec.bin_weights()?;

    let mut stairs = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for w in &weights {
        total += w;
        stairs.push(total);
    }
    let last = stairs.len() - 1;

    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        let r = total * rng.random::<f64>();
        // Rounding can leave r at the top of the last step
        let bin = stairs.iter().position(|&s| s > r).unwrap_or(last);

        let values = spec
            .dims
            .iter()
            .map(|dim| {
                let (lo, hi) = (dim.from[bin], dim.to[bin]);
                lo + (hi - lo) * rng.random::<f64>()
            })
            .collect();

        samples.push((spec.measure[bin].clone(), values));
    }

    trace!(
        bins = weights.len(),
        dims = spec.dims.len(),
        samples = n,
        "resampled bins"
    );

    Ok(samples)
}

/// Draw `n` labelled samples from the thread-local generator.
pub fn resample<L: Clone>(
    spec: &ResampleSpec<L>,
    n: usize,
) -> Result<Vec<(L, Vec<f64>)>, RegulusError> {
    resample_with(spec, n, &mut rand::rng())
}
