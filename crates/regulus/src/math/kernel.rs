//! Kernel (weight) functions for local regression.
//!
//! ## Purpose
//!
//! This module provides kernel functions that turn measure-space distances
//! into weights for the inverse regression. It controls how strongly each
//! training point influences the estimate at a query value.
//!
//! ## Design notes
//!
//! * **Normalization**: Maps distances u = (y_i - q) / bandwidth to weights.
//! * **Unnormalized**: Constant factors are dropped; they cancel in weighted means.
//! * **Exact tails**: The Gaussian kernel is evaluated without a floor, so a
//!   query far from all data yields a true zero total weight that callers can detect.
//!
//! ## Key concepts
//!
//! * **Gaussian**: The default kernel, unbounded support.
//! * **Bounded kernels**: Zero outside [-1, 1]; degeneracy is common for narrow bandwidths.
//!
//! ## Invariants
//!
//! * Kernels are non-negative (K(u) >= 0) and symmetric (K(u) = K(-u)).
//! * Bounded kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not perform weight normalization.
//! * This module does not handle bandwidth selection logic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// External dependencies
use num_traits::Float;

// ============================================================================
// Weight Function Enum
// ============================================================================

/// | Kernel       | Formula          | Support  |
/// |--------------|------------------|----------|
/// | Gaussian     | exp(-u^2 / 2)    | ℝ        |
/// | Epanechnikov | 1 - u^2          | [-1, 1]  |
/// | Tricube      | (1 - abs(u)^3)^3 | [-1, 1]  |
/// | Biweight     | (1 - u^2)^2      | [-1, 1]  |
/// | Uniform      | 1                | [-1, 1]  |
///
/// Weight function (kernel) for the inverse regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightFunction {
    /// Gaussian kernel: K(u) = exp(-u^2 / 2).
    ///
    /// This is the default kernel.
    #[default]
    Gaussian,

    /// Epanechnikov kernel: K(u) = (1 - u^2) for |u| < 1.
    Epanechnikov,

    /// Tricube kernel: K(u) = (1 - |u|^3)^3 for |u| < 1.
    Tricube,

    /// Biweight (quartic) kernel: K(u) = (1 - u^2)^2 for |u| < 1.
    Biweight,

    /// Uniform (rectangular) kernel: K(u) = 1 for |u| < 1.
    Uniform,
}

impl WeightFunction {
    /// Get the name of the weight function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WeightFunction::Gaussian => "Gaussian",
            WeightFunction::Epanechnikov => "Epanechnikov",
            WeightFunction::Tricube => "Tricube",
            WeightFunction::Biweight => "Biweight",
            WeightFunction::Uniform => "Uniform",
        }
    }

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            WeightFunction::Gaussian => None,
            _ => Some((-1.0, 1.0)),
        }
    }

    /// Returns `true` if the kernel has bounded support.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.support().is_some()
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Compute the unnormalized weight K(u) for a given normalized distance.
    #[inline]
    pub fn compute_weight<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        if !abs_u.is_finite() {
            return T::zero();
        }

        // Fast path for bounded kernels: return 0 if outside support
        if self.is_bounded() && abs_u >= T::one() {
            return T::zero();
        }

        let half = T::from(0.5).unwrap_or_else(T::zero);
        match self {
            WeightFunction::Gaussian => (-(half * abs_u * abs_u)).exp(),

            WeightFunction::Epanechnikov => T::one() - abs_u * abs_u,

            WeightFunction::Tricube => {
                let tmp = T::one() - abs_u * abs_u * abs_u;
                tmp * tmp * tmp
            }

            WeightFunction::Biweight => {
                let tmp = T::one() - abs_u * abs_u;
                tmp * tmp
            }

            WeightFunction::Uniform => T::one(),
        }
    }

    /// Fill `weights[i] = K((y[i] - query) / bandwidth)` and return their sum.
    ///
    /// A non-positive bandwidth zeroes every weight.
    pub fn compute_weights<T: Float>(
        &self,
        y: &[T],
        query: T,
        bandwidth: T,
        weights: &mut [T],
    ) -> T {
        if bandwidth <= T::zero() {
            weights.iter_mut().for_each(|w| *w = T::zero());
            return T::zero();
        }

        let mut sum = T::zero();
        for (w, &yi) in weights.iter_mut().zip(y.iter()) {
            *w = self.compute_weight((yi - query) / bandwidth);
            sum = sum + *w;
        }
        sum
    }
}
