//! Tests for the Point Store.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Attributes, kinds, extents
//! 2. **Lookup** - Samples and values by name
//! 3. **Rejection** - Malformed columns and rows

use regulus::prelude::*;

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn dataset() -> Dataset {
    Dataset::new(
        columns(&["x", "y", "f", "g"]),
        vec![
            vec![0.0, 1.0, 2.0, -1.0],
            vec![3.0, -2.0, 0.5, 4.0],
            vec![1.5, 0.0, 1.0, 0.0],
        ],
        2,
    )
    .unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_attribute_kinds() {
    let ds = dataset();

    assert_eq!(ds.ndims(), 2);
    let dims: Vec<&str> = ds.dims().iter().map(|a| a.name.as_str()).collect();
    let measures: Vec<&str> = ds.measures().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(dims, vec!["x", "y"]);
    assert_eq!(measures, vec!["f", "g"]);
    assert!(ds.attributes().iter().skip(2).all(|a| a.is_measure()));
    assert_eq!(ds.attribute("y").unwrap().kind, AttributeKind::Dim);
}

#[test]
fn test_extents() {
    let ds = dataset();
    assert_eq!(ds.attribute("x").unwrap().extent, [0.0, 3.0]);
    assert_eq!(ds.attribute("y").unwrap().extent, [-2.0, 1.0]);
    assert_eq!(ds.attribute("f").unwrap().extent, [0.5, 2.0]);
    assert_eq!(ds.attribute("g").unwrap().width(), 5.0);
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_samples() {
    let ds = dataset();

    assert_eq!(ds.len(), 3);
    assert!(!ds.is_empty());
    for (i, s) in ds.samples().iter().enumerate() {
        assert_eq!(s.id, i);
    }

    let s = ds.sample(1).unwrap();
    assert_eq!(s.value(3), Some(4.0));
    assert_eq!(s.value(4), None);
    assert_eq!(ds.value(s, "y"), Some(-2.0));
    assert_eq!(ds.value(s, "nope"), None);
    assert!(ds.sample(3).is_none());
}

#[test]
fn test_name_lookup() {
    let ds = dataset();
    assert_eq!(ds.attribute_index("f"), Some(2));
    assert!(ds.measure_by_name("g").is_some());
    assert!(ds.measure_by_name("x").is_none());
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[test]
fn test_dimension_count_bounds() {
    let rows = vec![vec![0.0, 1.0]];
    assert!(matches!(
        Dataset::new(columns(&["x", "f"]), rows.clone(), 0),
        Err(RegulusError::InvalidInput(_))
    ));
    assert!(matches!(
        Dataset::new(columns(&["x", "f"]), rows, 2),
        Err(RegulusError::InvalidInput(_))
    ));
}

#[test]
fn test_duplicate_names() {
    assert!(matches!(
        Dataset::new(columns(&["x", "x"]), vec![vec![0.0, 1.0]], 1),
        Err(RegulusError::InvalidInput(_))
    ));
}

#[test]
fn test_no_rows() {
    assert_eq!(
        Dataset::new(columns(&["x", "f"]), vec![], 1),
        Err(RegulusError::TooFewPoints { got: 0, min: 1 })
    );
}

#[test]
fn test_ragged_rows() {
    assert!(matches!(
        Dataset::new(columns(&["x", "f"]), vec![vec![0.0, 1.0], vec![2.0]], 1),
        Err(RegulusError::InvalidInput(_))
    ));
}

#[test]
fn test_non_finite_value() {
    let err = Dataset::new(
        columns(&["x", "f"]),
        vec![vec![0.0, 1.0], vec![f64::NAN, 2.0]],
        1,
    )
    .unwrap_err();

    match err {
        RegulusError::InvalidNumericValue(msg) => assert!(msg.starts_with("x[1]")),
        other => panic!("unexpected error: {other:?}"),
    }
}
