//! Tests for per-partition results.
//!
//! These tests verify:
//! - Point materialization through the permutation array
//! - Statistics, regression curves and linear models, and their caching
//! - Similarity with parent and sibling models
//! - Resample specifications built from partitions
//!
//! ## Test Organization
//!
//! 1. **Points** - Span plus extrema
//! 2. **Statistics** - Quantiles over materialized points
//! 3. **Regression** - Curves, caching, degeneracy
//! 4. **Linear Models** - Coefficients, too few points
//! 5. **Similarity** - Parent and sibling
//! 6. **Resampling** - Bins from partitions

use std::sync::Arc;

use approx::assert_relative_eq;

use regulus::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

/// Six samples with x = i, f = i², g = 5 - i.
fn dataset() -> Arc<Dataset> {
    let rows = (0..6)
        .map(|i| {
            let x = i as f64;
            vec![x, x * x, 5.0 - x]
        })
        .collect();
    Arc::new(Dataset::new(vec!["x".into(), "f".into(), "g".into()], rows, 1).unwrap())
}

fn partitions() -> Vec<PartitionRecord> {
    vec![
        PartitionRecord::new(0, 1.0, [0, 5], [0, 6], vec![1, 2]),
        PartitionRecord::new(1, 0.4, [0, 2], [0, 3], vec![3, 4]),
        PartitionRecord::new(2, 0.0, [3, 5], [3, 6], vec![]),
        PartitionRecord::new(3, 0.0, [0, 1], [0, 2], vec![]),
        PartitionRecord::new(4, 0.0, [2, 2], [2, 3], vec![]),
    ]
}

fn msc(name: &str, pts_idx: Vec<usize>) -> MscRecord {
    MscRecord {
        name: name.into(),
        pts_idx,
        partitions: partitions(),
    }
}

fn tree_with(engine: RegulusEngine, name: &str) -> Tree {
    engine
        .load(dataset(), &msc(name, (0..6).collect()))
        .unwrap()
        .unwrap()
}

fn tree() -> Tree {
    tree_with(Regulus::new().build().unwrap(), "f")
}

// ============================================================================
// Point Tests
// ============================================================================

/// The span is followed by the min and max samples, duplicates included.
#[test]
fn test_point_materialization() {
    let t = tree();

    assert_eq!(t.get(2).unwrap().point_ids(), &[3, 4, 5, 3, 5]);
    assert_eq!(t.get(4).unwrap().point_ids(), &[2, 2, 2]);

    let root = t.root();
    assert_eq!(root.points().len(), root.size() + 2);
    let ids: Vec<usize> = root.points().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 0, 5]);
}

/// Spans index the permutation array, not the Point Store.
#[test]
fn test_permuted_points() {
    let engine = Regulus::new().build().unwrap();
    let t = engine
        .load(dataset(), &msc("f", vec![5, 4, 3, 2, 1, 0]))
        .unwrap()
        .unwrap();

    assert_eq!(t.get(2).unwrap().point_ids(), &[2, 1, 0, 3, 5]);
}

/// Repeated calls hand out the same cached slice.
#[test]
fn test_points_cached() {
    let t = tree();
    let p = t.get(1).unwrap();
    assert!(std::ptr::eq(p.point_ids(), p.point_ids()));
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[test]
fn test_partition_statistics() {
    let t = tree();
    let stats = t.get(2).unwrap().statistics();

    let f = stats.get("f").unwrap();
    assert_eq!(f.n, 5);
    assert!(f.is_measure);
    assert_eq!(f.quantiles, vec![9.0, 16.0, 25.0]);
    assert_eq!((f.min, f.max), (9.0, 25.0));
    assert_eq!(f.extent, [0.0, 25.0]);

    let x = stats.get("x").unwrap();
    assert_eq!(x.quantiles, vec![3.0, 4.0, 5.0]);
    assert!(!stats.get("g").unwrap().is_measure);
}

#[test]
fn test_custom_quantiles() {
    let engine = Regulus::new().quantile_probs(&[0.0, 1.0]).build().unwrap();
    let t = tree_with(engine, "f");
    let f = t.get(2).unwrap().statistics().get("f").unwrap().clone();
    assert_eq!(f.quantiles, vec![9.0, 25.0]);
}

// ============================================================================
// Regression Tests
// ============================================================================

#[test]
fn test_regression_curve() {
    let t = tree();
    let p = t.get(2).unwrap();
    let curve = p.regression_curve().unwrap();

    assert_eq!(curve.len(), 100);
    assert_eq!(curve.std.len(), 100);
    assert_eq!(curve.columns, vec!["x", "f"]);

    let f = curve.measure_values();
    assert_eq!(f[0], 0.0);
    assert_eq!(f[99], 25.0);
    assert!(f.contains(&9.0));
    assert!(f.windows(2).all(|w| w[0] <= w[1]));

    // x = sqrt(f) on the partition, so estimates stay inside [3, 5]
    for row in &curve.curve {
        assert!(row[0] >= 3.0 - 1e-9 && row[0] <= 5.0 + 1e-9);
    }

    assert!(std::ptr::eq(curve, p.regression_curve().unwrap()));
}

#[test]
fn test_query_point_count() {
    let engine = Regulus::new().query_point_count(10).build().unwrap();
    let t = tree_with(engine, "f");
    assert_eq!(t.root().regression_curve().unwrap().len(), 10);
}

/// A narrow bounded kernel leaves the lowest queries without support.
#[test]
fn test_degenerate_regression() {
    let engine = Regulus::new()
        .weight_function(Uniform)
        .bandwidth_factor(0.01)
        .build()
        .unwrap();
    let t = tree_with(engine, "f");
    let p = t.get(2).unwrap();

    let expected = RegulusError::DegenerateRegression {
        partition: 2,
        query: 0.0,
    };
    assert_eq!(p.regression_curve().unwrap_err(), expected);
    assert_eq!(p.regression_curve().unwrap_err(), expected);

    // Other results are unaffected
    assert_eq!(p.statistics().get("f").unwrap().n, 5);
}

// ============================================================================
// Linear Model Tests
// ============================================================================

#[test]
fn test_linear_model() {
    let engine = Regulus::new().build().unwrap();
    let t = tree_with(engine, "g");
    let model = t.root().linear_model().unwrap();

    assert_relative_eq!(model.coefficients[0], -1.0, epsilon = 1e-9);
    assert_relative_eq!(model.intercept, 5.0, epsilon = 1e-9);
    assert_relative_eq!(model.fitness, 1.0, epsilon = 1e-9);
    assert!(std::ptr::eq(model, t.root().linear_model().unwrap()));
}

/// Two dimensions need at least three points.
#[test]
fn test_linear_model_too_few_points() {
    let data = Arc::new(
        Dataset::new(
            vec!["x".into(), "y".into(), "f".into()],
            vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]],
            2,
        )
        .unwrap(),
    );
    let record = MscRecord {
        name: "f".into(),
        pts_idx: vec![0, 1],
        partitions: vec![PartitionRecord::new(0, 0.0, [0, 1], [0, 0], vec![])],
    };
    let t = Regulus::new().build().unwrap().load(data, &record).unwrap().unwrap();

    assert_eq!(
        t.root().linear_model().unwrap_err(),
        RegulusError::TooFewPoints { got: 2, min: 3 }
    );
}

// ============================================================================
// Similarity Tests
// ============================================================================

/// Increasing branches of an increasing function point the same way.
#[test]
fn test_similarities() {
    let t = tree();

    assert_eq!(t.root().parent_similarity().unwrap(), 1.0);
    assert_eq!(t.root().sibling_similarity().unwrap(), 1.0);

    for id in [1, 2] {
        let p = t.get(id).unwrap();
        assert_relative_eq!(p.parent_similarity().unwrap(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(p.sibling_similarity().unwrap(), 1.0, epsilon = 1e-9);
    }
}

// ============================================================================
// Resampling Tests
// ============================================================================

#[test]
fn test_resample_spec_from_level_cut() {
    let t = tree();
    let spec = ResampleSpec::<f64>::from_partitions(&t.level_cut(0.5)).unwrap();

    assert_eq!(spec.bin_count(), 2);
    assert_eq!(spec.dims.len(), 1);
    assert_eq!(spec.dims[0].name, "x");
    assert_eq!(spec.dims[0].from, vec![0.0, 3.0]);
    assert_eq!(spec.dims[0].to, vec![2.0, 5.0]);
    assert_eq!(spec.measure, vec![1.0, 16.0]);

    let samples = resample(&spec, 100).unwrap();
    assert!(samples.iter().all(|(_, v)| (0.0..=5.0).contains(&v[0])));
}

#[test]
fn test_resample_spec_rejects_empty_and_mixed() {
    assert!(matches!(
        ResampleSpec::<f64>::from_partitions(&[]),
        Err(RegulusError::InvalidInput(_))
    ));

    let a = tree();
    let b = tree();
    assert!(matches!(
        ResampleSpec::<f64>::from_partitions(&[a.root(), b.root()]),
        Err(RegulusError::InvalidInput(_))
    ));
}
