/// Relation label followed during inheritance traversal.
pub const HIERARCHY_RELATION: &str = "is_a";

/// Relation label for properties attached directly to a concept.
pub const PROPERTY_RELATION: &str = "has_property";

/// Module names recorded in the audit chain.
pub mod modules {
    pub const GRAPH_STORE: &str = "GraphStore";
    pub const DEDUCTION_ENGINE: &str = "DeductionEngine";
    pub const COORDINATOR: &str = "Coordinator";
}

/// Action names recorded in the audit chain.
pub mod actions {
    pub const ADD_RELATIONSHIP: &str = "addRelationship";
    pub const DEDUCE_PROPERTY: &str = "deduceProperty";
    pub const RESET: &str = "reset";
}

/// Result recorded for a successful fact assertion.
pub const ASSERT_SUCCESS: &str = "Success";

/// Result recorded for a kernel reset.
pub const RESET_DESCRIPTION: &str = "System reset to initial state.";
