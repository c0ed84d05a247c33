//! Least-squares solver for per-partition linear models.
//!
//! ## Design notes
//!
//! * Builds the normal equations X'X * beta = X'y from a row-major design matrix.
//! * Solves with QR decomposition (Householder reflections), falling back to
//!   SVD for rank-deficient systems.
//! * Delegates the factorizations to nalgebra.

// External dependencies
use nalgebra::{DMatrix, DVector};

/// Solve the normal equations `X'X * beta = X'y`.
///
/// `design` is row-major with `n_coeffs` columns; `y` has one entry per row.
/// Returns `None` when the system cannot be solved.
pub fn solve_least_squares(design: &[f64], y: &[f64], n_coeffs: usize) -> Option<Vec<f64>> {
    if n_coeffs == 0 || design.len() != y.len() * n_coeffs {
        return None;
    }

    let x = DMatrix::from_row_slice(y.len(), n_coeffs, design);
    let rhs = DVector::from_column_slice(y);

    let xtx = x.transpose() * &x;
    let xty = x.transpose() * rhs;

    let qr = xtx.clone().qr();
    if let Some(solution) = qr.solve(&xty) {
        if solution.iter().all(|v| v.is_finite()) {
            return Some(solution.as_slice().to_vec());
        }
    }

    xtx.svd(true, true)
        .solve(&xty, f64::EPSILON * 100.0)
        .ok()
        .filter(|s: &DVector<f64>| s.iter().all(|v| v.is_finite()))
        .map(|s| s.as_slice().to_vec())
}
