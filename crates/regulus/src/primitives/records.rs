//! Flat input records describing a precomputed Morse-Smale complex.
//!
//! ## Purpose
//!
//! This module defines the plain data shapes a host hands to the engine:
//! one `PartitionRecord` per node of the persistence hierarchy and an
//! `MscRecord` bundling them with the shared permutation array.
//!
//! ## Key concepts
//!
//! * **Span**: `[from, to)` ordinals into `pts_idx`, not Point Store ids.
//! * **Extrema**: `minmax_idx` holds Point Store ids of the measure min/max samples.
//! * **Children**: ids only; links are resolved by the tree builder.
//!
//! ## Non-goals
//!
//! * This module does not validate records (see `model::tree`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a partition, unique within one MSC.
pub type PartitionId = usize;

/// Role of an attribute in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttributeKind {
    /// Spatial (input) dimension.
    Dim,

    /// Measured quantity.
    Measure,
}

impl AttributeKind {
    /// Short lowercase label ("dim" / "measure").
    pub const fn name(&self) -> &'static str {
        match self {
            AttributeKind::Dim => "dim",
            AttributeKind::Measure => "measure",
        }
    }
}

/// Descriptor of one dataset column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute {
    /// Column name, unique within the dataset.
    pub name: String,

    /// Dimension or measure.
    pub kind: AttributeKind,

    /// Dataset-wide `[min, max]`.
    pub extent: [f64; 2],
}

impl Attribute {
    /// Returns `true` for measure attributes.
    #[inline]
    pub fn is_measure(&self) -> bool {
        self.kind == AttributeKind::Measure
    }

    /// Width of the dataset-wide extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.extent[1] - self.extent[0]
    }
}

/// One node of the persistence hierarchy, as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionRecord {
    /// Partition id.
    pub id: PartitionId,

    /// Persistence level.
    pub lvl: f64,

    /// Point Store ids of the measure's minimum and maximum samples.
    pub minmax_idx: [usize; 2],

    /// Half-open range of ordinals into `pts_idx`.
    pub span: [usize; 2],

    /// Ids of the direct children.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<PartitionId>,
}

impl PartitionRecord {
    /// Create a record.
    pub fn new(
        id: PartitionId,
        lvl: f64,
        minmax_idx: [usize; 2],
        span: [usize; 2],
        children: Vec<PartitionId>,
    ) -> Self {
        Self {
            id,
            lvl,
            minmax_idx,
            span,
            children,
        }
    }
}

/// A complete MSC for one measure of a dataset.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MscRecord {
    /// Name of the measure attribute the complex was computed for.
    pub name: String,

    /// Permutation mapping partition ordinals to Point Store ids.
    pub pts_idx: Vec<usize>,

    /// Flat, unordered partition records.
    pub partitions: Vec<PartitionRecord>,
}
