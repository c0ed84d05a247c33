//! Persistence histogram by level peeling.
//!
//! ## Purpose
//!
//! This module summarizes how many partitions are "alive" as the persistence
//! threshold is lowered from the root level toward zero.
//!
//! ## Design notes
//!
//! * **Peeling**: A max-priority queue ordered by level. Each pop replaces a
//!   node with its children and records the queue length at the popped level.
//! * **Ties**: Nodes with equal levels pop in insertion order (a sequence
//!   number breaks ties).
//! * **Overwrite**: Each processed level overwrites any earlier entry at exactly
//!   that level, including the seed entry at level 1.
//! * **Generic traversal**: The algorithm only needs a node handle, its level
//!   and its children, so it runs over any tree representation.
//!
//! ## Invariants
//!
//! * The curve is ascending by level.
//! * Peeling stops at the first popped node whose level is exactly zero.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::sorting::Level;

// ============================================================================
// Output
// ============================================================================

/// Level → live-partition count curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersistenceHistogram {
    /// `(level, count)` pairs ascending by level.
    pub curve: Vec<(f64, usize)>,

    /// Horizontal axis domain for rendering.
    pub x_domain: (f64, f64),

    /// Vertical axis domain for rendering: zero to the largest count.
    pub y_domain: (usize, usize),
}

impl PersistenceHistogram {
    /// Count recorded at exactly `level`, if any.
    pub fn count_at(&self, level: f64) -> Option<usize> {
        self.curve
            .iter()
            .find(|(l, _)| Level(*l) == Level(level))
            .map(|&(_, c)| c)
    }
}

// ============================================================================
// Priority Queue Entry
// ============================================================================

struct Entry<N> {
    level: Level,
    seq: Reverse<usize>,
    node: N,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Entry<N> {}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// ============================================================================
// Peeling
// ============================================================================

/// Peel the tree rooted at `root` by decreasing level.
pub fn persistence_histogram<N, L, C, I>(root: N, level: L, children: C) -> PersistenceHistogram
where
    N: Copy,
    L: Fn(N) -> f64,
    C: Fn(N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut counts: BTreeMap<Level, usize> = BTreeMap::new();
    counts.insert(Level(1.0), 1);

    let mut seq = 0usize;
    let mut queue = BinaryHeap::new();
    queue.push(Entry {
        level: Level(level(root)),
        seq: Reverse(seq),
        node: root,
    });

    while let Some(Entry { level: lvl, node, .. }) = queue.pop() {
        if lvl.0 == 0.0 {
            break;
        }
        for child in children(node) {
            seq += 1;
            queue.push(Entry {
                level: Level(level(child)),
                seq: Reverse(seq),
                node: child,
            });
        }
        counts.insert(lvl, queue.len());
    }

    let curve: Vec<(f64, usize)> = counts.into_iter().map(|(l, c)| (l.0, c)).collect();
    let max_count = curve.iter().map(|&(_, c)| c).max().unwrap_or(0);

    PersistenceHistogram {
        curve,
        x_domain: (f64::EPSILON, 1.0),
        y_domain: (0, max_count),
    }
}
