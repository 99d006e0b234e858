/// Read access to labeled outgoing relationships.
///
/// Reasoners depend on this instead of a concrete graph type.
pub trait IRelationStore {
    /// Targets of `source`'s outgoing edges labeled `label`, in insertion order.
    /// Empty when `source` is unknown.
    fn query_relationships(&self, source_id: &str, label: &str) -> Vec<String>;

    /// Whether `node_id` is a known concept.
    fn contains_node(&self, node_id: &str) -> bool;
}
