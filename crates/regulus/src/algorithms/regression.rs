//! Inverse kernel regression.
//!
//! ## Purpose
//!
//! This module estimates, for a scalar measure value `q`, the expected vector
//! of dimension values `x̂(q)`: the regression runs from the measure to the
//! dimensions (`dims ≈ f(measure)`), answering "where in dimension space does
//! this measure value occur".
//!
//! ## Design notes
//!
//! * **Estimator**: Nadaraya-Watson weighted mean of the training dimension
//!   vectors, with weights `K((y_i - q) / h)`.
//! * **Uncertainty**: The same weights give a weighted standard deviation per
//!   dimension around `x̂(q)`; the band is their average over dimensions.
//! * **Failure**: A total weight below `MIN_TOTAL_WEIGHT` aborts the whole
//!   evaluation; no fallback value is substituted.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Training dimension values are row-major with `n_dims` columns.
//! * Output rows have `n_dims` estimates plus the query value.
//! * Evaluation is deterministic for fixed inputs.
//!
//! ## Non-goals
//!
//! * This module does not choose query points (see `math::spacing`).
//! * This module does not cache results (see `model::partition`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::WeightFunction;

// ============================================================================
// Configuration
// ============================================================================

/// Default fraction of the measure extent used as kernel bandwidth.
pub const DEFAULT_BANDWIDTH_FACTOR: f64 = 0.1;

/// Default number of query points along a regression curve.
pub const DEFAULT_QUERY_POINT_COUNT: usize = 100;

/// Total kernel weights below this are treated as "no data".
pub const MIN_TOTAL_WEIGHT: f64 = f64::MIN_POSITIVE;

/// Query value at which the total kernel weight vanished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateQuery<T>(pub T);

// ============================================================================
// Inverse Regression
// ============================================================================

/// Training data and kernel settings for one inverse regression.
#[derive(Debug, Clone, Copy)]
pub struct InverseRegression<'a, T> {
    /// Row-major dimension values, `n_dims` per training point.
    pub dims: &'a [T],

    /// Measure value of each training point.
    pub measure: &'a [T],

    /// Number of dimension columns.
    pub n_dims: usize,

    /// Kernel applied to normalized measure distances.
    pub weight_function: WeightFunction,

    /// Kernel bandwidth in measure units.
    pub bandwidth: T,
}

/// Estimates and uncertainty at a sequence of query values.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseFit<T> {
    /// `estimates[k]` is the estimated dimension vector at query `k`.
    pub estimates: Vec<Vec<T>>,

    /// Average weighted standard deviation at query `k`.
    pub std: Vec<T>,
}

impl<'a, T: Float> InverseRegression<'a, T> {
    /// Bandwidth as a fraction of the measure extent.
    pub fn bandwidth_for(factor: T, extent: (T, T)) -> T {
        factor * (extent.1 - extent.0)
    }

    /// Evaluate the estimator at every query value.
    pub fn evaluate(&self, queries: &[T]) -> Result<InverseFit<T>, DegenerateQuery<T>> {
        let n = self.measure.len();

        if !(self.bandwidth > T::zero()) || !self.bandwidth.is_finite() {
            let first = queries.first().copied().unwrap_or_else(T::zero);
            return Err(DegenerateQuery(first));
        }

        let min_total = T::from(MIN_TOTAL_WEIGHT).unwrap_or_else(T::min_positive_value);

        let mut weights = vec![T::zero(); n];
        let mut estimates = Vec::with_capacity(queries.len());
        let mut std = Vec::with_capacity(queries.len());

        for &q in queries {
            let total =
                self.weight_function
                    .compute_weights(self.measure, q, self.bandwidth, &mut weights);
            if !(total >= min_total) || !total.is_finite() {
                return Err(DegenerateQuery(q));
            }

            let mean = self.weighted_mean(&weights, total);
            let spread = self.weighted_std(&weights, total, &mean);

            estimates.push(mean);
            std.push(spread);
        }

        Ok(InverseFit { estimates, std })
    }

    /// Weighted mean of the dimension vectors.
    fn weighted_mean(&self, weights: &[T], total: T) -> Vec<T> {
        let d = self.n_dims;
        let mut mean = vec![T::zero(); d];
        if d == 0 {
            return mean;
        }
        for (row, &w) in self.dims.chunks_exact(d).zip(weights.iter()) {
            if w == T::zero() {
                continue;
            }
            for (m, &x) in mean.iter_mut().zip(row.iter()) {
                *m = *m + w * x;
            }
        }
        mean.iter_mut().for_each(|m| *m = *m / total);
        mean
    }

    /// Weighted standard deviation around `mean`, averaged over dimensions.
    fn weighted_std(&self, weights: &[T], total: T, mean: &[T]) -> T {
        let d = self.n_dims;
        if d == 0 {
            return T::zero();
        }

        let mut var = vec![T::zero(); d];
        for (row, &w) in self.dims.chunks_exact(d).zip(weights.iter()) {
            if w == T::zero() {
                continue;
            }
            for ((v, &x), &m) in var.iter_mut().zip(row.iter()).zip(mean.iter()) {
                let r = x - m;
                *v = *v + w * r * r;
            }
        }

        let sum = var
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v / total).max(T::zero()).sqrt());
        sum / T::from(d).unwrap_or_else(T::one)
    }
}

// ============================================================================
// Regression Curve
// ============================================================================

/// Regression curve bundle handed to rendering collaborators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegressionCurve {
    /// One row per query point: estimated dimensions followed by the query measure.
    pub curve: Vec<Vec<f64>>,

    /// Uncertainty band, one value per row of `curve`.
    pub std: Vec<f64>,

    /// Column labels: dimension names followed by the measure name.
    pub columns: Vec<String>,
}

impl RegressionCurve {
    /// Assemble `curve[i] = x̂(q_i) ++ [q_i]`.
    pub fn assemble(queries: &[f64], fit: InverseFit<f64>, columns: Vec<String>) -> Self {
        let curve = fit
            .estimates
            .into_iter()
            .zip(queries.iter())
            .map(|(mut row, &q)| {
                row.push(q);
                row
            })
            .collect();

        Self {
            curve,
            std: fit.std,
            columns,
        }
    }

    /// Number of points along the curve.
    pub fn len(&self) -> usize {
        self.curve.len()
    }

    /// Returns `true` if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// Measure values (last column) along the curve.
    pub fn measure_values(&self) -> Vec<f64> {
        self.curve
            .iter()
            .filter_map(|row| row.last().copied())
            .collect()
    }
}
