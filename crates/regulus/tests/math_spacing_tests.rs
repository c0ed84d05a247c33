//! Tests for query point spacing.
//!
//! ## Test Organization
//!
//! 1. **Linear Space** - Endpoints and step
//! 2. **Sub-linear Space** - Length, monotonicity, bounds, concentration

use approx::assert_relative_eq;

use regulus::internals::math::spacing::{linspace, sub_linear_space};

// ============================================================================
// Linear Space Tests
// ============================================================================

#[test]
fn test_linspace_basic() {
    assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
}

// ============================================================================
// Sub-linear Space Tests
// ============================================================================

/// Length, order and exact bounds.
#[test]
fn test_sub_linear_space_bounds() {
    let q = sub_linear_space((2.0, 4.0), (0.0, 10.0), 100);

    assert_eq!(q.len(), 100);
    assert!(q.windows(2).all(|w| w[0] < w[1]), "not strictly increasing");
    assert_eq!(q[0], 0.0);
    assert_eq!(q[99], 10.0);
    assert!(q.contains(&2.0));
    assert!(q.contains(&4.0));
}

/// The inner range gets more than its linear share of points.
#[test]
fn test_sub_linear_space_concentrates_inner_range() {
    let q = sub_linear_space((2.0, 4.0), (0.0, 10.0), 100);
    let inside = q.iter().filter(|&&v| (2.0..=4.0).contains(&v)).count();

    // A uniform linspace would put about 20 points there
    assert!(inside > 25, "only {inside} points in the inner range");
}

/// Outer spacing grows away from the inner range.
#[test]
fn test_sub_linear_space_outer_spacing_grows() {
    let q = sub_linear_space((2.0, 4.0), (0.0, 10.0), 100);
    let above: Vec<f64> = q.iter().copied().filter(|&v| v >= 4.0).collect();
    let gaps: Vec<f64> = above.windows(2).map(|w| w[1] - w[0]).collect();

    assert!(gaps.len() > 2);
    assert!(gaps.windows(2).all(|g| g[1] >= g[0]));
}

/// Inner range equal to the outer one reduces to a linspace.
#[test]
fn test_sub_linear_space_full_range() {
    let q = sub_linear_space((0.0, 10.0), (0.0, 10.0), 11);
    for (a, b) in q.iter().zip(linspace(0.0, 10.0, 11).iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
}

/// Inner range touching one side of the outer range.
#[test]
fn test_sub_linear_space_one_sided() {
    let q = sub_linear_space((0.0, 1.0), (0.0, 10.0), 20);
    assert_eq!(q.len(), 20);
    assert_eq!(q[0], 0.0);
    assert_eq!(q[19], 10.0);
    assert!(q.contains(&1.0));
    assert!(q.windows(2).all(|w| w[0] < w[1]));
}

/// Degenerate inputs.
#[test]
fn test_sub_linear_space_degenerate() {
    assert!(sub_linear_space((0.0, 1.0), (0.0, 1.0), 0).is_empty());
    assert_eq!(sub_linear_space((2.0, 4.0), (0.0, 10.0), 1), vec![3.0]);
    assert_eq!(sub_linear_space((3.0, 3.0), (3.0, 3.0), 4), vec![3.0; 4]);

    // Reversed inner range is reordered
    let q = sub_linear_space((4.0, 2.0), (0.0, 10.0), 30);
    assert!(q.contains(&2.0) && q.contains(&4.0));
}

/// A point-sized inner range still appears in the output.
#[test]
fn test_sub_linear_space_point_inner() {
    let q = sub_linear_space((5.0, 5.0), (0.0, 10.0), 9);
    assert_eq!(q.len(), 9);
    assert!(q.contains(&5.0));
    assert_eq!(q[0], 0.0);
    assert_eq!(q[8], 10.0);
}

/// The dataset extent is reached even with very few query points.
#[test]
fn test_sub_linear_space_small_counts_reach_extent() {
    for (inner, outer) in [
        ((4.0, 6.0), (0.0, 10.0)),
        ((0.0, 6.0), (0.0, 10.0)),
        ((4.0, 10.0), (0.0, 10.0)),
        ((5.0, 5.0), (0.0, 10.0)),
    ] {
        for k in 2..=4 {
            let q = sub_linear_space(inner, outer, k);
            assert_eq!(q.len(), k);
            assert!(q[0] == outer.0 && q[k - 1] == outer.1, "{inner:?} k={k}: {q:?}");
            assert!(q.windows(2).all(|w| w[0] < w[1]), "{inner:?} k={k}: {q:?}");
        }
    }

    assert_eq!(sub_linear_space((4.0, 6.0), (0.0, 10.0), 2), vec![0.0, 10.0]);
    assert_eq!(sub_linear_space((4.0, 6.0), (0.0, 10.0), 3), vec![0.0, 4.0, 10.0]);
    assert_eq!(sub_linear_space((4.0, 6.0), (0.0, 10.0), 4), vec![0.0, 4.0, 6.0, 10.0]);
}
