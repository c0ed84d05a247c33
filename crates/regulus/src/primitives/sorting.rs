//! Sorting utilities for attribute columns.
//!
//! ## Purpose
//!
//! This module provides the ascending sorts used before quantile extraction
//! and the ordered wrapper that lets persistence levels live in ordered
//! collections (priority queues, ordered maps).
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so equal values keep their relative order.
//! * **Robustness**: Non-finite values (NaN, Inf) are moved to the end of the sequence.
//! * **Total order**: `Level` orders with `f64::total_cmp`, so it is `Ord` and `Eq`.
//!
//! ## Invariants
//!
//! * Sorted finite values are non-decreasing.
//! * Each column is sorted independently (no joint row permutation).
//!
//! ## Non-goals
//!
//! * This module does not validate values.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort values ascending in place, finite values first.
///
/// 1. Checks if data is already sorted (fast path).
/// 2. Performs a stable sort with non-finite values pushed to the end.
#[inline]
pub fn sort_ascending<T: Float>(values: &mut [T]) {
    let is_sorted = values
        .windows(2)
        .all(|w| w[0].is_finite() && w[1].is_finite() && w[0] <= w[1]);
    if is_sorted {
        return;
    }

    values.sort_by(|a, b| match (a.is_finite(), b.is_finite()) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    });
}

/// Return an ascending copy of `values`.
#[inline]
pub fn sorted_copy<T: Float>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    sort_ascending(&mut out);
    out
}

// ============================================================================
// Ordered Level
// ============================================================================

/// Persistence level with a total order.
#[derive(Debug, Clone, Copy)]
pub struct Level(pub f64);

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 are the same level
        let a = if self.0 == 0.0 { 0.0 } else { self.0 };
        let b = if other.0 == 0.0 { 0.0 } else { other.0 };
        a.total_cmp(&b)
    }
}
