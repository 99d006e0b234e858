//! Structured log events for key kernel operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a fact assertion.
pub fn fact_asserted(source_id: &str, target_id: &str, label: &str, inserted: bool) {
    tracing::debug!(
        event = "fact_asserted",
        source_id = %source_id,
        target_id = %target_id,
        label = %label,
        inserted = inserted,
        "fact asserted"
    );
}

/// Log a property deduction.
pub fn property_deduced(source_id: &str, property_label: &str, holds: bool) {
    tracing::debug!(
        event = "property_deduced",
        source_id = %source_id,
        property_label = %property_label,
        holds = holds,
        "property deduced"
    );
}

/// Log a kernel reset.
pub fn kernel_reset(discarded_nodes: usize, discarded_edges: usize, discarded_events: usize) {
    tracing::info!(
        event = "kernel_reset",
        discarded_nodes = discarded_nodes,
        discarded_edges = discarded_edges,
        discarded_events = discarded_events,
        "kernel reset"
    );
}

/// Log periodic learning progress.
pub fn learning_progress(facts_learned: usize) {
    tracing::info!(
        event = "learning_progress",
        facts_learned = facts_learned,
        "learning progress"
    );
}

/// Log learning completion with the resulting graph size.
pub fn learning_completed(facts_learned: usize, node_count: usize, edge_count: usize) {
    tracing::info!(
        event = "learning_completed",
        facts_learned = facts_learned,
        node_count = node_count,
        edge_count = edge_count,
        "learning completed"
    );
}
