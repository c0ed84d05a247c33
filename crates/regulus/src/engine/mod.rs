//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer owns the validated configuration that the model layer consults
//! when it computes partition results, and the validator that guards it.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Model
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validated configuration.
pub mod config;

/// Validation utilities.
pub mod validator;
