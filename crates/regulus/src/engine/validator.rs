//! Input validation for Regulus configuration and records.
//!
//! ## Purpose
//!
//! This module provides the validation functions used when building an
//! engine and when loading a dataset or an MSC. It checks parameter bounds,
//! finite values and index ranges.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check tree structure (see `model::tree`).
//! * This module does not correct invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::config::RegulusConfig;
use crate::primitives::errors::RegulusError;
use crate::primitives::records::PartitionId;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Regulus configuration and input records.
///
/// All methods return `Result<(), RegulusError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Configuration
    // ========================================================================

    /// Validate a complete configuration.
    pub fn validate_config(config: &RegulusConfig) -> Result<(), RegulusError> {
        Self::validate_bandwidth_factor(config.bandwidth_factor)?;
        Self::validate_query_point_count(config.query_point_count)?;
        Self::validate_quantile_probs(&config.quantile_probs)?;
        Ok(())
    }

    /// Validate the kernel bandwidth factor.
    pub fn validate_bandwidth_factor(factor: f64) -> Result<(), RegulusError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(RegulusError::InvalidBandwidthFactor(factor));
        }
        Ok(())
    }

    /// Validate the number of query points per regression curve.
    pub fn validate_query_point_count(count: usize) -> Result<(), RegulusError> {
        if count < 2 {
            return Err(RegulusError::InvalidQueryPointCount(count));
        }
        Ok(())
    }

    /// Validate quantile probabilities.
    pub fn validate_quantile_probs(probs: &[f64]) -> Result<(), RegulusError> {
        if let Some(&p) = probs
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(RegulusError::InvalidQuantile(p));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegulusError> {
        if let Some(param) = duplicate_param {
            return Err(RegulusError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), RegulusError> {
        if !val.is_finite() {
            return Err(RegulusError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that `index` addresses one of `len` samples.
    pub fn validate_point_index(index: usize, len: usize) -> Result<(), RegulusError> {
        if index >= len {
            return Err(RegulusError::InvalidPointIndex { index, len });
        }
        Ok(())
    }

    /// Validate a half-open span into a permutation array of `len` entries.
    pub fn validate_span(
        partition: PartitionId,
        span: [usize; 2],
        len: usize,
    ) -> Result<(), RegulusError> {
        if span[0] > span[1] || span[1] > len {
            return Err(RegulusError::InvalidSpan {
                partition,
                span,
                len,
            });
        }
        Ok(())
    }
}
