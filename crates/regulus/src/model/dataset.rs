//! Point Store: the immutable samples shared by every partition.
//!
//! ## Purpose
//!
//! This module holds a dataset's samples together with its attribute
//! descriptors. Partitions reference samples by their position (the sample
//! id) and never copy them.
//!
//! ## Design notes
//!
//! * **Layout**: One `Sample` per row; values in column declaration order.
//! * **Attributes**: The first `ndims` columns are dimensions, the remainder
//!   are measures. Extents are computed once at construction.
//! * **Sharing**: Trees hold the dataset behind an `Arc`, so one dataset can
//!   back one tree per measure.
//!
//! ## Invariants
//!
//! * Sample ids equal their position and never change.
//! * Every value is finite and every row has one value per column.
//! * Attribute names are unique.
//! * At least one dimension and one measure are declared.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::RegulusError;
use crate::primitives::records::{Attribute, AttributeKind};

// ============================================================================
// Sample
// ============================================================================

/// One row of the Point Store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Position in the Point Store.
    pub id: usize,

    /// Values in column declaration order.
    pub values: Vec<f64>,
}

impl Sample {
    /// Value of the attribute at `index`.
    #[inline]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Immutable, ordered collection of samples with attribute descriptors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    attributes: Vec<Attribute>,
    samples: Vec<Sample>,
    ndims: usize,
}

impl Dataset {
    /// Build a Point Store from column names and rows.
    ///
    /// The first `ndims` columns are dimensions, the rest are measures.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<Vec<f64>>,
        ndims: usize,
    ) -> Result<Self, RegulusError> {
        let ncols = columns.len();

        if ndims == 0 || ndims >= ncols {
            return Err(RegulusError::InvalidInput(format!(
                "{ndims} dimensions declared for {ncols} columns (need at least one of each kind)"
            )));
        }

        let mut seen = HashSet::with_capacity(ncols);
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(RegulusError::InvalidInput(format!(
                "duplicate attribute name '{dup}'"
            )));
        }

        if rows.is_empty() {
            return Err(RegulusError::TooFewPoints { got: 0, min: 1 });
        }

        let mut extents = vec![[f64::INFINITY, f64::NEG_INFINITY]; ncols];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(RegulusError::InvalidInput(format!(
                    "row {} has {} values, expected {}",
                    r,
                    row.len(),
                    ncols
                )));
            }
            for ((&v, name), extent) in row.iter().zip(columns.iter()).zip(extents.iter_mut()) {
                if !v.is_finite() {
                    Validator::validate_scalar(v, &format!("{name}[{r}]"))?;
                }
                extent[0] = extent[0].min(v);
                extent[1] = extent[1].max(v);
            }
        }

        let attributes = columns
            .into_iter()
            .zip(extents)
            .enumerate()
            .map(|(i, (name, extent))| Attribute {
                name,
                kind: if i < ndims {
                    AttributeKind::Dim
                } else {
                    AttributeKind::Measure
                },
                extent,
            })
            .collect();

        let samples = rows
            .into_iter()
            .enumerate()
            .map(|(id, values)| Sample { id, values })
            .collect();

        Ok(Self {
            attributes,
            samples,
            ndims,
        })
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// All attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Dimension attributes.
    pub fn dims(&self) -> &[Attribute] {
        &self.attributes[..self.ndims]
    }

    /// Measure attributes.
    pub fn measures(&self) -> &[Attribute] {
        &self.attributes[self.ndims..]
    }

    /// Number of dimension attributes.
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    /// Attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Column index of the attribute called `name`.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// Measure attribute called `name` (dimensions do not match).
    pub fn measure_by_name(&self, name: &str) -> Option<&Attribute> {
        self.measures().iter().find(|a| a.name == name)
    }

    // ========================================================================
    // Samples
    // ========================================================================

    /// Sample with Point Store id `id`.
    pub fn sample(&self, id: usize) -> Option<&Sample> {
        self.samples.get(id)
    }

    /// All samples in Point Store order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false` for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Value of attribute `name` in `sample`.
    pub fn value(&self, sample: &Sample, name: &str) -> Option<f64> {
        self.attribute_index(name).and_then(|i| sample.value(i))
    }
}
