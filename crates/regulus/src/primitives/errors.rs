//! Error types for Regulus operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while loading a
//! Morse-Smale complex, evaluating partitions, and resampling, including
//! input validation, structural tree defects, and numerical failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (partition ids, indices, bounds).
//! * **Deferred**: Builder misconfiguration is recorded and surfaced by `build()`.
//! * **Cacheable**: Errors are `Clone` so that failed lazy computations can be memoized.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Structural errors**: Malformed trees and invalid records, reported once per load.
//! 2. **Numerical errors**: Degenerate regressions and zero-width dimensions, reported per call.
//! 3. **Parameter validation**: Bandwidth factor, query point count, quantile probabilities.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// Internal dependencies
use crate::primitives::records::PartitionId;

// ============================================================================
// Tree Defects
// ============================================================================

/// Structural defect found while reconstructing the partition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeDefect {
    /// A declared child id has no corresponding record.
    MissingChild(PartitionId),

    /// Two records share the same id.
    DuplicateId,

    /// A child is claimed by more than one parent, or by one of its descendants.
    SharedChild(PartitionId),

    /// The root (maximum level) is listed as somebody's child.
    RootAsChild,

    /// The record cannot be reached from the root.
    Unreachable,
}

impl Display for TreeDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingChild(child) => write!(f, "child {child} has no record"),
            Self::DuplicateId => write!(f, "id is used by more than one record"),
            Self::SharedChild(child) => {
                write!(f, "child {child} already has a parent")
            }
            Self::RootAsChild => write!(f, "the root is listed as a child"),
            Self::Unreachable => write!(f, "record is not reachable from the root"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Regulus operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegulusError {
    /// The flat partition records do not describe a single rooted tree.
    MalformedTree {
        /// Partition at which the defect was detected.
        partition: PartitionId,
        /// What is wrong with it.
        defect: TreeDefect,
    },

    /// Total kernel weight fell below the minimum at some query point.
    DegenerateRegression {
        /// Partition whose regression failed.
        partition: PartitionId,
        /// Measure value of the offending query point.
        query: f64,
    },

    /// A resampling dimension has zero (or negative) total interval width.
    ZeroWidthDimension {
        /// Name of the dimension.
        dimension: String,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A point index does not address a sample of the Point Store.
    InvalidPointIndex {
        /// The offending index.
        index: usize,
        /// Number of samples in the Point Store.
        len: usize,
    },

    /// A partition span is reversed or extends beyond the permutation array.
    InvalidSpan {
        /// Partition owning the span.
        partition: PartitionId,
        /// The span as given.
        span: [usize; 2],
        /// Length of the permutation array.
        len: usize,
    },

    /// Attribute name does not exist (or is not of the expected kind).
    UnknownAttribute(String),

    /// Number of points is below the minimum requirement for the operation.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Kernel bandwidth factor must be positive and finite.
    InvalidBandwidthFactor(f64),

    /// Regression curves need at least 2 query points.
    InvalidQueryPointCount(usize),

    /// Quantile probabilities must lie in [0, 1].
    InvalidQuantile(f64),

    /// Least-squares system could not be solved.
    SingularFit {
        /// Partition whose linear model failed.
        partition: PartitionId,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl RegulusError {
    /// Returns `true` for errors detected while building the tree.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedTree { .. }
                | Self::InvalidPointIndex { .. }
                | Self::InvalidSpan { .. }
                | Self::UnknownAttribute(_)
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegulusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MalformedTree { partition, defect } => {
                write!(f, "Malformed tree at partition {partition}: {defect}")
            }
            Self::DegenerateRegression { partition, query } => {
                write!(
                    f,
                    "Degenerate regression in partition {partition}: not enough data near measure {query}"
                )
            }
            Self::ZeroWidthDimension { dimension } => {
                write!(f, "Dimension '{dimension}' has zero total interval width")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidPointIndex { index, len } => {
                write!(f, "Invalid point index: {index} (point store has {len} samples)")
            }
            Self::InvalidSpan {
                partition,
                span,
                len,
            } => {
                write!(
                    f,
                    "Invalid span [{}, {}] in partition {partition} (pts_idx has {len} entries)",
                    span[0], span[1]
                )
            }
            Self::UnknownAttribute(name) => write!(f, "Unknown attribute: {name}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidBandwidthFactor(factor) => {
                write!(f, "Invalid bandwidth factor: {factor} (must be > 0 and finite)")
            }
            Self::InvalidQueryPointCount(count) => {
                write!(f, "Invalid query point count: {count} (must be at least 2)")
            }
            Self::InvalidQuantile(p) => {
                write!(f, "Invalid quantile probability: {p} (must be in [0, 1])")
            }
            Self::SingularFit { partition } => {
                write!(f, "Linear fit of partition {partition} is singular")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for RegulusError {}
