//! Ordinary least-squares fit of the measure on the dimensions.
//!
//! ## Purpose
//!
//! This module fits `measure ≈ intercept + Σ coeff_d × dim_d` over a point
//! subset and scores the fit with the coefficient of determination.
//!
//! ## Design notes
//!
//! * **Design matrix**: An intercept column followed by the dimension columns.
//! * **Solver**: Normal equations through `math::linalg` (QR, SVD fallback).
//! * **Fitness**: `R² = 1 − SS_res / SS_tot`. A constant response scores 1 when
//!   reproduced exactly and 0 otherwise.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::linalg::solve_least_squares;

/// Linear model of the measure with its goodness of fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearModel {
    /// One coefficient per dimension, in declaration order.
    pub coefficients: Vec<f64>,

    /// Constant term.
    pub intercept: f64,

    /// Coefficient of determination over the training points.
    pub fitness: f64,
}

impl LinearModel {
    /// Fit the model to row-major `dims` (`n_dims` per point) and `measure`.
    ///
    /// Returns `None` if the system has no finite solution. Callers check that
    /// there are at least `n_dims + 1` points.
    pub fn fit(dims: &[f64], measure: &[f64], n_dims: usize) -> Option<Self> {
        let n = measure.len();
        if n == 0 || dims.len() != n * n_dims {
            return None;
        }

        let n_coeffs = n_dims + 1;
        let mut design = Vec::with_capacity(n * n_coeffs);
        for row in 0..n {
            design.push(1.0);
            design.extend_from_slice(&dims[row * n_dims..(row + 1) * n_dims]);
        }

        let beta = solve_least_squares(&design, measure, n_coeffs)?;
        let (intercept, coefficients) = (beta[0], beta[1..].to_vec());

        let mut model = Self {
            coefficients,
            intercept,
            fitness: 0.0,
        };
        model.fitness = model.r_squared(dims, measure, n_dims);
        Some(model)
    }

    /// Predicted measure at one dimension vector.
    #[inline]
    pub fn predict(&self, x: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(x.iter())
                .map(|(c, v)| c * v)
                .sum::<f64>()
    }

    fn r_squared(&self, dims: &[f64], measure: &[f64], n_dims: usize) -> f64 {
        let n = measure.len() as f64;
        let mean = measure.iter().sum::<f64>() / n;

        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for (i, &y) in measure.iter().enumerate() {
            let x = &dims[i * n_dims..(i + 1) * n_dims];
            let r = y - self.predict(x);
            ss_res += r * r;
            ss_tot += (y - mean) * (y - mean);
        }

        if ss_tot == 0.0 {
            return if ss_res <= f64::EPSILON { 1.0 } else { 0.0 };
        }
        1.0 - ss_res / ss_tot
    }
}
