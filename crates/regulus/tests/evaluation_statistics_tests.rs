//! Tests for per-attribute statistics and vector similarity.
//!
//! ## Test Organization
//!
//! 1. **Statistics** - Quantiles, extremes, lookup
//! 2. **Similarity** - Cosine similarity

use approx::assert_relative_eq;

use regulus::internals::evaluation::similarity::cosine_similarity;
use regulus::internals::evaluation::statistics::Statistics;
use regulus::internals::primitives::records::{Attribute, AttributeKind};

fn attributes() -> Vec<Attribute> {
    vec![
        Attribute {
            name: "x".into(),
            kind: AttributeKind::Dim,
            extent: [0.0, 10.0],
        },
        Attribute {
            name: "f".into(),
            kind: AttributeKind::Measure,
            extent: [-1.0, 2.0],
        },
        Attribute {
            name: "g".into(),
            kind: AttributeKind::Measure,
            extent: [0.0, 0.0],
        },
    ]
}

fn rows() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 0.5, 0.0],
        vec![2.0, -0.5, 0.0],
        vec![3.0, 0.0, 0.0],
        vec![4.0, 1.0, 0.0],
    ]
}

// ============================================================================
// Statistics Tests
// ============================================================================

/// Quartiles use linear interpolation between order statistics.
#[test]
fn test_quartiles() {
    let stats = Statistics::compute(&attributes(), &rows(), 1, &[0.25, 0.5, 0.75]);

    let f = stats.get("f").unwrap();
    assert_eq!(f.n, 4);
    assert_relative_eq!(f.quantiles[0], -0.125);
    assert_relative_eq!(f.quantiles[1], 0.25);
    assert_relative_eq!(f.quantiles[2], 0.625);
    assert_eq!((f.min, f.max), (-0.5, 1.0));
    assert_eq!(f.extent, [-1.0, 2.0]);

    let x = stats.get("x").unwrap();
    assert_relative_eq!(x.quantiles[0], 1.75);
    assert_relative_eq!(x.quantiles[1], 2.5);
    assert_relative_eq!(x.quantiles[2], 3.25);
}

/// Only the selected measure is flagged.
#[test]
fn test_measure_flag_and_order() {
    let stats = Statistics::compute(&attributes(), &rows(), 1, &[0.5]);

    let names: Vec<&str> = stats.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["x", "f", "g"]);
    assert_eq!(stats.measure().unwrap().name, "f");
    assert!(!stats.get("g").unwrap().is_measure);
    assert_eq!(stats.dims().count(), 1);
    assert_eq!(stats.probs, vec![0.5]);
}

/// Slices of slices work as rows too.
#[test]
fn test_borrowed_rows() {
    let data = rows();
    let borrowed: Vec<&[f64]> = data.iter().map(|r| r.as_slice()).collect();
    let stats = Statistics::compute(&attributes(), &borrowed, 2, &[0.0, 1.0]);

    let g = stats.measure().unwrap();
    assert_eq!(g.name, "g");
    assert_eq!(g.quantiles, vec![0.0, 0.0]);
}

#[test]
fn test_single_row() {
    let stats = Statistics::compute(&attributes(), &[vec![7.0, 1.5, 0.0]], 1, &[0.25, 0.75]);
    let x = stats.get("x").unwrap();
    assert_eq!(x.quantiles, vec![7.0, 7.0]);
    assert_eq!((x.min, x.max), (7.0, 7.0));
    assert!(stats.get("missing").is_none());
}

// ============================================================================
// Similarity Tests
// ============================================================================

#[test]
fn test_cosine_similarity() {
    assert_relative_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    assert_relative_eq!(cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]), 1.0, epsilon = 1e-12);
    assert_relative_eq!(cosine_similarity(&[1.0, 1.0], &[-1.0, -1.0]), -1.0, epsilon = 1e-12);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
}
