//! # archanon-memory
//!
//! The explicit memory of the kernel. Concepts are nodes, facts are directed
//! labeled edges, backed by a `petgraph` stable graph with an id index.

pub mod graph;
pub mod store;

pub use graph::stable_graph::{ConceptNode, RelationEdge};
pub use store::{GraphStats, GraphStore};
