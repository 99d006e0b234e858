//! Structural validation of the graph against its id index.

use archanon_core::errors::{ArchanonError, ArchanonResult};

use crate::store::GraphStore;

/// Check that every indexed id resolves to a node carrying that id, that no
/// node is missing from the index, and that every edge endpoint is indexed.
pub fn check(store: &GraphStore) -> ArchanonResult<()> {
    if store.node_index.len() != store.graph.node_count() {
        return Err(inconsistent(format!(
            "index holds {} ids but graph holds {} nodes",
            store.node_index.len(),
            store.graph.node_count()
        )));
    }

    for (id, &idx) in &store.node_index {
        match store.graph.node_weight(idx) {
            Some(node) if &node.id == id => {}
            Some(node) => {
                return Err(inconsistent(format!(
                    "id '{id}' indexes node '{}'",
                    node.id
                )))
            }
            None => return Err(inconsistent(format!("id '{id}' indexes a missing node"))),
        }
    }

    for edge in store.graph.edge_indices() {
        let Some((source, target)) = store.graph.edge_endpoints(edge) else {
            return Err(inconsistent(format!("edge {} has no endpoints", edge.index())));
        };
        for endpoint in [source, target] {
            let indexed = store
                .graph
                .node_weight(endpoint)
                .is_some_and(|n| store.node_index.get(&n.id) == Some(&endpoint));
            if !indexed {
                return Err(inconsistent(format!(
                    "edge {} touches unindexed node {}",
                    edge.index(),
                    endpoint.index()
                )));
            }
        }
    }

    Ok(())
}

fn inconsistent(details: String) -> ArchanonError {
    ArchanonError::GraphInconsistency { details }
}
