//! Breadth-first search up the `is_a` hierarchy.

use std::collections::{HashMap, HashSet, VecDeque};

use archanon_core::constants::HIERARCHY_RELATION;
use archanon_core::IRelationStore;

/// Search `is_a` edges breadth-first from `source_id` for `ancestor`.
///
/// Returns the chain `[source_id, .., ancestor]` on success. Each node is
/// expanded at most once, so cyclic and diamond-shaped hierarchies terminate.
pub fn find_ancestor(
    store: &dyn IRelationStore,
    source_id: &str,
    ancestor: &str,
) -> Option<Vec<String>> {
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(source_id.to_string());

    // child → the node it was first reached from.
    let mut reached_from: HashMap<String, String> = HashMap::new();

    let mut queue = VecDeque::new();
    queue.push_back(source_id.to_string());

    while let Some(current) = queue.pop_front() {
        for parent in store.query_relationships(&current, HIERARCHY_RELATION) {
            if parent == ancestor {
                let mut chain = chain_to(&reached_from, &current);
                chain.push(parent);
                return Some(chain);
            }
            if visited.insert(parent.clone()) {
                reached_from.insert(parent.clone(), current.clone());
                queue.push_back(parent);
            }
        }
    }

    None
}

/// Rebuild the chain from the search root to `node`.
fn chain_to(reached_from: &HashMap<String, String>, node: &str) -> Vec<String> {
    let mut chain = vec![node.to_string()];
    let mut cursor = node;
    while let Some(prev) = reached_from.get(cursor) {
        chain.push(prev.clone());
        cursor = prev.as_str();
    }
    chain.reverse();
    chain
}
