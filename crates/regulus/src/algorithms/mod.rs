//! Layer 3: Algorithms
//!
//! This layer implements the core numerical procedures of Regulus: inverse
//! kernel regression, persistence peeling, weighted resampling and linear
//! fitting. It holds no tree state and is orchestrated by the model layer.

// Inverse kernel regression of dimensions on the measure.
pub mod regression;

// Level-peeling persistence histogram.
pub mod histogram;

// Width-weighted stratified resampling.
pub mod resample;

// Least-squares linear model with R² fitness.
pub mod linear;
