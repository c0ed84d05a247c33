//! Partition tree reconstruction and navigation.
//!
//! ## Purpose
//!
//! This module turns an MSC's flat, unordered partition records into a rooted
//! tree over a shared Point Store, and provides the whole-tree operations:
//! traversal, persistence histogram, fronts and flattening.
//!
//! ## Design notes
//!
//! * **Root selection**: The record with the maximum level; ties go to the
//!   first in input order.
//! * **Link resolution**: Child ids are resolved through an id → node map with
//!   an explicit stack, so deep hierarchies do not recurse.
//! * **Strictness**: Any structural defect fails the whole load. Nothing is
//!   silently dropped.
//! * **Arena order**: Nodes keep input record order, so `flatten` returns the
//!   records as given.
//!
//! ## Invariants
//!
//! * Exactly one node has no parent.
//! * Every other node appears in exactly one parent's child list.
//! * Every node is reachable from the root.

use std::collections::HashMap;
use std::sync::Arc;

// External dependencies
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::histogram::{persistence_histogram, PersistenceHistogram};
use crate::engine::config::RegulusConfig;
use crate::engine::validator::Validator;
use crate::model::dataset::Dataset;
use crate::model::partition::{Node, NodeId, PartitionRef};
use crate::primitives::errors::{RegulusError, TreeDefect};
use crate::primitives::records::{Attribute, AttributeKind, MscRecord, PartitionId, PartitionRecord};

// ============================================================================
// Tree
// ============================================================================

/// Rooted partition hierarchy of one MSC over a shared dataset.
#[derive(Debug)]
pub struct Tree {
    dataset: Arc<Dataset>,
    config: Arc<RegulusConfig>,
    name: String,
    measure: usize,
    pts_idx: Vec<usize>,
    nodes: Vec<Node>,
    root: NodeId,
    index: HashMap<PartitionId, NodeId>,
}

impl Tree {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a tree from `msc` over `dataset`.
    ///
    /// Returns `Ok(None)` if the MSC has no partitions.
    pub fn build(
        dataset: Arc<Dataset>,
        msc: &MscRecord,
        config: Arc<RegulusConfig>,
    ) -> Result<Option<Self>, RegulusError> {
        if msc.partitions.is_empty() {
            debug!(msc = %msc.name, "no partitions, nothing to build");
            return Ok(None);
        }

        let measure = dataset
            .attribute_index(&msc.name)
            .filter(|&i| dataset.attributes()[i].kind == AttributeKind::Measure)
            .ok_or_else(|| RegulusError::UnknownAttribute(msc.name.clone()))?;

        let len = dataset.len();
        for &idx in &msc.pts_idx {
            Validator::validate_point_index(idx, len)?;
        }
        for record in &msc.partitions {
            Self::validate_record(record, msc.pts_idx.len(), len)?;
        }

        let (mut nodes, index) = Self::index_records(&msc.partitions)?;
        let root = Self::select_root(&msc.partitions);
        Self::link(&msc.partitions, &index, &mut nodes, root)?;

        debug!(
            msc = %msc.name,
            partitions = nodes.len(),
            root = nodes[root].id,
            root_lvl = nodes[root].lvl,
            "built partition tree"
        );

        Ok(Some(Self {
            dataset,
            config,
            name: msc.name.clone(),
            measure,
            pts_idx: msc.pts_idx.clone(),
            nodes,
            root,
            index,
        }))
    }

    fn validate_record(
        record: &PartitionRecord,
        pts_len: usize,
        store_len: usize,
    ) -> Result<(), RegulusError> {
        Validator::validate_scalar(record.lvl, &format!("lvl of partition {}", record.id))?;
        Validator::validate_span(record.id, record.span, pts_len)?;
        for &idx in &record.minmax_idx {
            Validator::validate_point_index(idx, store_len)?;
        }
        Ok(())
    }

    fn index_records(
        records: &[PartitionRecord],
    ) -> Result<(Vec<Node>, HashMap<PartitionId, NodeId>), RegulusError> {
        let mut nodes = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for (node_id, r) in records.iter().enumerate() {
            if index.insert(r.id, node_id).is_some() {
                return Err(RegulusError::MalformedTree {
                    partition: r.id,
                    defect: TreeDefect::DuplicateId,
                });
            }
            nodes.push(Node::new(r.id, r.lvl, r.minmax_idx, r.span));
        }

        Ok((nodes, index))
    }

    fn select_root(records: &[PartitionRecord]) -> NodeId {
        let mut root = 0;
        for (i, r) in records.iter().enumerate().skip(1) {
            if r.lvl > records[root].lvl {
                root = i;
            }
        }
        root
    }

    fn link(
        records: &[PartitionRecord],
        index: &HashMap<PartitionId, NodeId>,
        nodes: &mut [Node],
        root: NodeId,
    ) -> Result<(), RegulusError> {
        // Every declared child must exist, and none may be the root
        let mut resolved: Vec<Vec<NodeId>> = Vec::with_capacity(records.len());
        for r in records {
            let mut kids = Vec::with_capacity(r.children.len());
            for &child in &r.children {
                match index.get(&child) {
                    None => {
                        return Err(RegulusError::MalformedTree {
                            partition: r.id,
                            defect: TreeDefect::MissingChild(child),
                        });
                    }
                    Some(&c) if c == root => {
                        return Err(RegulusError::MalformedTree {
                            partition: r.id,
                            defect: TreeDefect::RootAsChild,
                        });
                    }
                    Some(&c) => kids.push(c),
                }
            }
            resolved.push(kids);
        }

        let mut visited = vec![false; nodes.len()];
        visited[root] = true;
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            for &child in &resolved[current] {
                if visited[child] {
                    return Err(RegulusError::MalformedTree {
                        partition: records[current].id,
                        defect: TreeDefect::SharedChild(records[child].id),
                    });
                }
                visited[child] = true;
                nodes[child].parent = Some(current);
                nodes[current].children.push(child);
                stack.push(child);
            }
        }

        if let Some(orphan) = visited.iter().position(|&v| !v) {
            return Err(RegulusError::MalformedTree {
                partition: records[orphan].id,
                defect: TreeDefect::Unreachable,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Root partition (maximum level).
    pub fn root(&self) -> PartitionRef<'_> {
        PartitionRef::new(self, self.root)
    }

    /// Partition with record id `id`.
    pub fn get(&self, id: PartitionId) -> Option<PartitionRef<'_>> {
        self.index.get(&id).map(|&n| PartitionRef::new(self, n))
    }

    /// Partition stored at arena index `node`.
    pub fn node(&self, node: NodeId) -> Option<PartitionRef<'_>> {
        (node < self.nodes.len()).then(|| PartitionRef::new(self, node))
    }

    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a built tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name of the MSC (its measure attribute).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Measure attribute the tree was built for.
    pub fn measure(&self) -> &Attribute {
        &self.dataset.attributes()[self.measure]
    }

    /// Column index of the measure attribute.
    pub fn measure_index(&self) -> usize {
        self.measure
    }

    /// Shared Point Store.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Configuration driving the lazily computed results.
    pub fn config(&self) -> &RegulusConfig {
        &self.config
    }

    /// Permutation mapping partition ordinals to Point Store ids.
    pub fn pts_idx(&self) -> &[usize] {
        &self.pts_idx
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    // ========================================================================
    // Annotation
    // ========================================================================

    /// Set the alias of partition `id`. Returns `false` if there is no such partition.
    pub fn set_alias(&mut self, id: PartitionId, alias: impl Into<String>) -> bool {
        match self.index.get(&id) {
            Some(&n) => {
                self.nodes[n].alias = alias.into();
                true
            }
            None => false,
        }
    }

    /// Set the notes of partition `id`. Returns `false` if there is no such partition.
    pub fn set_notes(&mut self, id: PartitionId, notes: impl Into<String>) -> bool {
        match self.index.get(&id) {
            Some(&n) => {
                self.nodes[n].notes = notes.into();
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Pre-order iterator starting at the root.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Partitions without children, in pre-order.
    pub fn leaves(&self) -> Vec<PartitionRef<'_>> {
        self.iter().filter(|p| p.is_leaf()).collect()
    }

    /// Topmost partitions satisfying `predicate`.
    ///
    /// A matching partition is emitted and its subtree is skipped; otherwise
    /// its children are visited.
    pub fn front<F>(&self, predicate: F) -> Vec<PartitionRef<'_>>
    where
        F: Fn(&PartitionRef<'_>) -> bool,
    {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(n) = stack.pop() {
            let p = PartitionRef::new(self, n);
            if predicate(&p) {
                out.push(p);
            } else {
                stack.extend(self.nodes[n].children.iter().rev());
            }
        }
        out
    }

    /// Topmost partitions at or below `threshold`.
    pub fn level_cut(&self, threshold: f64) -> Vec<PartitionRef<'_>> {
        self.front(|p| p.lvl() <= threshold)
    }

    // ========================================================================
    // Whole-tree Results
    // ========================================================================

    /// Live-partition count as the persistence threshold is lowered.
    pub fn persistence_histogram(&self) -> PersistenceHistogram {
        let histogram = persistence_histogram(
            self.root,
            |n: NodeId| self.nodes[n].lvl,
            |n: NodeId| self.nodes[n].children.iter().copied(),
        );
        trace!(
            msc = %self.name,
            levels = histogram.curve.len(),
            max_count = histogram.y_domain.1,
            "persistence histogram"
        );
        histogram
    }

    /// Records equivalent to the input, in input order.
    pub fn flatten(&self) -> MscRecord {
        let partitions = self
            .nodes
            .iter()
            .map(|n| {
                PartitionRecord::new(
                    n.id,
                    n.lvl,
                    n.minmax_idx,
                    n.span,
                    n.children.iter().map(|&c| self.nodes[c].id).collect(),
                )
            })
            .collect();

        MscRecord {
            name: self.name.clone(),
            pts_idx: self.pts_idx.clone(),
            partitions,
        }
    }
}

// ============================================================================
// Pre-order Iterator
// ============================================================================

/// Depth-first pre-order traversal; children in record order.
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = PartitionRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.stack
            .extend(self.tree.nodes[n].children.iter().rev());
        Some(PartitionRef::new(self.tree, n))
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = PartitionRef<'a>;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
