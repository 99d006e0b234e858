//! petgraph::StableGraph wrapper types for concepts and relations.

use archanon_core::Attributes;
use petgraph::stable_graph::StableGraph;
use petgraph::Directed;
use serde::{Deserialize, Serialize};

/// A concept in the knowledge graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptNode {
    /// Opaque, case-sensitive concept key.
    pub id: String,
    pub attributes: Attributes,
}

impl ConceptNode {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            attributes: Attributes::new(),
        }
    }
}

/// Weight on a relation edge. The label is the only edge attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub label: String,
}

/// The underlying directed multigraph type.
pub type ConceptGraph = StableGraph<ConceptNode, RelationEdge, Directed>;
