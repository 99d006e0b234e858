//! Shortest-path lookup over the whole multigraph.

use petgraph::algo::astar;

use crate::store::GraphStore;

/// Shortest directed path from `source_id` to `target_id`, counting edges.
///
/// Every label is traversable; edges are followed only in their stored
/// direction. With a zero heuristic A* degenerates to uniform-cost search,
/// which is breadth-first for unit costs. When several shortest paths exist
/// the one returned is unspecified.
pub fn shortest_path(store: &GraphStore, source_id: &str, target_id: &str) -> Option<Vec<String>> {
    let start = store.get_node(source_id)?;
    let goal = store.get_node(target_id)?;

    let (_, nodes) = astar(&store.graph, start, |n| n == goal, |_| 1_usize, |_| 0)?;

    nodes
        .into_iter()
        .map(|idx| store.graph.node_weight(idx).map(|n| n.id.clone()))
        .collect()
}
