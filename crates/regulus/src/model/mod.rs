//! Layer 6: Model
//!
//! # Purpose
//!
//! This layer holds the loaded state of an analysis session:
//! - The Point Store (`Dataset`) shared by every partition
//! - The partition tree rebuilt from flat records
//! - Per-partition lazily computed results
//! - Tree-wide layout
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Model ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Point Store and attribute descriptors.
pub mod dataset;

/// Partition nodes and views.
pub mod partition;

/// Tree construction and navigation.
pub mod tree;

/// Lifeline layout.
pub mod layout;
