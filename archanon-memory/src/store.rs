//! GraphStore: owns concept nodes and labeled relation edges.

use std::collections::HashMap;

use archanon_core::errors::ArchanonResult;
use archanon_core::traits::IRelationStore;
use archanon_core::Attributes;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::graph::stable_graph::{ConceptGraph, ConceptNode, RelationEdge};
use crate::graph::{consistency, path};

/// Node and edge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Directed labeled multigraph of concepts.
///
/// Nodes are created implicitly by edge insertion and are never removed
/// individually. Edges are never removed either, so edge indices grow in
/// insertion order.
#[derive(Debug, Default)]
pub struct GraphStore {
    pub(crate) graph: ConceptGraph,
    /// Map from concept id → NodeIndex for O(1) lookup.
    pub(crate) node_index: HashMap<String, NodeIndex>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Insert a node, or shallow-merge `attributes` into an existing one.
    /// Keys not mentioned in `attributes` are preserved.
    pub fn add_node(&mut self, node_id: &str, attributes: Option<Attributes>) {
        let idx = self.ensure_node(node_id);
        if let (Some(attributes), Some(node)) = (attributes, self.graph.node_weight_mut(idx)) {
            node.attributes.extend(attributes);
        }
    }

    /// Add `source --label--> target`, creating missing endpoints.
    ///
    /// Returns `false` when the identical edge already existed.
    pub fn add_relationship(&mut self, source_id: &str, target_id: &str, label: &str) -> bool {
        let source = self.ensure_node(source_id);
        let target = self.ensure_node(target_id);

        let exists = self
            .graph
            .edges_directed(source, Direction::Outgoing)
            .any(|e| e.target() == target && e.weight().label == label);
        if exists {
            return false;
        }

        self.graph.add_edge(
            source,
            target,
            RelationEdge {
                label: label.to_string(),
            },
        );
        true
    }

    /// Targets of `source`'s outgoing `label` edges, in edge insertion order.
    pub fn query_relationships(&self, source_id: &str, label: &str) -> Vec<String> {
        let Some(source) = self.get_node(source_id) else {
            return Vec::new();
        };

        let mut matches: Vec<_> = self
            .graph
            .edges_directed(source, Direction::Outgoing)
            .filter(|e| e.weight().label == label)
            .map(|e| (e.id(), e.target()))
            .collect();
        // Adjacency lists iterate newest-first; edge indices are insertion-ordered.
        matches.sort_by_key(|(edge, _)| *edge);

        matches
            .into_iter()
            .filter_map(|(_, target)| self.graph.node_weight(target).map(|n| n.id.clone()))
            .collect()
    }

    /// Shortest directed path by edge count over all labels.
    pub fn find_path(&self, source_id: &str, target_id: &str) -> Option<Vec<String>> {
        path::shortest_path(self, source_id, target_id)
    }

    pub fn get_attributes(&self, node_id: &str) -> Option<&Attributes> {
        self.get_node(node_id)
            .and_then(|idx| self.graph.node_weight(idx))
            .map(|n| &n.attributes)
    }

    /// Distinct outgoing labels of `source_id`, in first-use order.
    pub fn labels_from(&self, source_id: &str) -> Vec<String> {
        let Some(source) = self.get_node(source_id) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(source, Direction::Outgoing)
            .map(|e| (e.id(), e.weight().label.as_str()))
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);

        let mut labels: Vec<String> = Vec::new();
        for (_, label) in edges {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
        labels
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node_index.contains_key(node_id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }

    /// Verify the id index and the graph agree and every edge endpoint is indexed.
    pub fn check_consistency(&self) -> ArchanonResult<()> {
        consistency::check(self)
    }

    pub(crate) fn get_node(&self, node_id: &str) -> Option<NodeIndex> {
        self.node_index.get(node_id).copied()
    }

    fn ensure_node(&mut self, node_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(node_id) {
            return idx;
        }
        let idx = self.graph.add_node(ConceptNode::new(node_id));
        self.node_index.insert(node_id.to_string(), idx);
        tracing::trace!(event = "concept_created", node_id = %node_id, "concept created");
        idx
    }
}

impl IRelationStore for GraphStore {
    fn query_relationships(&self, source_id: &str, label: &str) -> Vec<String> {
        GraphStore::query_relationships(self, source_id, label)
    }

    fn contains_node(&self, node_id: &str) -> bool {
        GraphStore::contains_node(self, node_id)
    }
}
