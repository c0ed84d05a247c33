//! Lifeline layout of a partition tree.
//!
//! Every partition becomes a band whose horizontal extent is proportional to
//! its size and whose vertical extent runs from its parent's level down to its
//! own. The root spans `[0, root.size]`; children are packed left to right in
//! record order within their parent's band.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::model::partition::NodeId;
use crate::model::tree::Tree;

/// Placement of one partition band.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodePosition {
    /// Left edge.
    pub x: f64,

    /// Bottom edge: the partition's level.
    pub y: f64,

    /// Width.
    pub w: f64,

    /// Top edge: the parent's level, or 1 for the root.
    pub yp: f64,
}

/// Positions of every partition, indexed by `NodeId`.
pub fn lifeline_layout(tree: &Tree) -> Vec<NodePosition> {
    let mut positions = vec![NodePosition::default(); tree.len()];

    let root = tree.root();
    let mut stack: Vec<(NodeId, f64, f64)> = vec![(root.node_id(), 0.0, root.size() as f64)];

    while let Some((n, from, to)) = stack.pop() {
        let Some(node) = tree.node(n) else {
            continue;
        };
        let w = to - from;
        positions[n] = NodePosition {
            x: from,
            y: node.lvl(),
            w,
            yp: node.parent().map_or(1.0, |p| p.lvl()),
        };

        let size = node.size() as f64;
        let mut left = from;
        for child in node.children() {
            let cw = if size > 0.0 {
                w * child.size() as f64 / size
            } else {
                0.0
            };
            stack.push((child.node_id(), left, left + cw));
            left += cw;
        }
    }

    positions
}
