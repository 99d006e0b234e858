//! Graph internals: node/edge weights, shortest paths, consistency checks.

pub mod consistency;
pub mod path;
pub mod stable_graph;
