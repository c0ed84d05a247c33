//! Per-attribute summary statistics of a point subset.
//!
//! ## Purpose
//!
//! This module summarizes every attribute of a partition's materialized
//! points: count, quantiles, minimum and maximum, alongside the dataset-wide
//! extent used for consistent axis scaling.
//!
//! ## Design notes
//!
//! * **Sorting**: Each attribute column is sorted independently.
//! * **Quantiles**: Type-7 linear interpolation at configured probabilities.
//! * **Order**: Attributes keep declaration order and are addressable by name.
//!
//! ## Invariants
//!
//! * `n` equals the number of rows summarized, for every attribute.
//! * `min <= quantiles[k] <= max` for non-empty input.
//! * Exactly one attribute (the tree's measure) is flagged `is_measure`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::quantile::quantiles_sorted;
use crate::primitives::records::{Attribute, AttributeKind};
use crate::primitives::sorting::sort_ascending;

// ============================================================================
// Output Structures
// ============================================================================

/// Summary of one attribute over a point subset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeStatistics {
    /// Attribute name.
    pub name: String,

    /// Dimension or measure.
    pub kind: AttributeKind,

    /// `true` only for the measure the tree was built for.
    pub is_measure: bool,

    /// Number of values summarized.
    pub n: usize,

    /// Quantiles at the configured probabilities.
    pub quantiles: Vec<f64>,

    /// Smallest value in the subset.
    pub min: f64,

    /// Largest value in the subset.
    pub max: f64,

    /// Dataset-wide `[min, max]` of the attribute.
    pub extent: [f64; 2],
}

/// Summaries of every attribute, in declaration order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Statistics {
    /// Probabilities at which quantiles were evaluated.
    pub probs: Vec<f64>,

    /// One entry per attribute.
    pub attributes: Vec<AttributeStatistics>,
}

impl Statistics {
    /// Summarize `rows` (one value per attribute each).
    ///
    /// `measure` is the index of the tree's measure attribute.
    pub fn compute<R: AsRef<[f64]>>(
        attributes: &[Attribute],
        rows: &[R],
        measure: usize,
        probs: &[f64],
    ) -> Self {
        let mut column = Vec::with_capacity(rows.len());
        let summaries = attributes
            .iter()
            .enumerate()
            .map(|(i, attr)| {
                column.clear();
                column.extend(rows.iter().map(|r| r.as_ref()[i]));
                sort_ascending(&mut column);

                AttributeStatistics {
                    name: attr.name.clone(),
                    kind: attr.kind,
                    is_measure: i == measure,
                    n: column.len(),
                    quantiles: quantiles_sorted(&column, probs).unwrap_or_default(),
                    min: column.first().copied().unwrap_or(f64::NAN),
                    max: column.last().copied().unwrap_or(f64::NAN),
                    extent: attr.extent,
                }
            })
            .collect();

        Self {
            probs: probs.to_vec(),
            attributes: summaries,
        }
    }

    /// Summary of the attribute called `name`.
    pub fn get(&self, name: &str) -> Option<&AttributeStatistics> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Summary of the tree's measure.
    pub fn measure(&self) -> Option<&AttributeStatistics> {
        self.attributes.iter().find(|a| a.is_measure)
    }

    /// Summaries of the dimension attributes.
    pub fn dims(&self) -> impl Iterator<Item = &AttributeStatistics> {
        self.attributes
            .iter()
            .filter(|a| a.kind == AttributeKind::Dim)
    }

    /// Iterate over all summaries.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeStatistics> {
        self.attributes.iter()
    }
}
