//! DeductionEngine: property membership by direct edge, identity, or inheritance.

use archanon_core::constants::PROPERTY_RELATION;
use archanon_core::IRelationStore;

use crate::deduction::Deduction;
use crate::traversal::hierarchy;

/// Stateless reasoner over a borrowed relation store.
pub struct DeductionEngine<'a> {
    store: &'a dyn IRelationStore,
}

impl<'a> DeductionEngine<'a> {
    pub fn new(store: &'a dyn IRelationStore) -> Self {
        Self { store }
    }

    /// Does `source_id` have `property_label`, directly or by inheritance?
    ///
    /// Unknown nodes and disconnected hierarchies yield `false`.
    pub fn deduce_property(&self, source_id: &str, property_label: &str) -> bool {
        self.explain_property(source_id, property_label).holds()
    }

    /// Resolve a property query and report which check settled it.
    ///
    /// Checks run in a fixed order: direct `has_property` edge, identity, then
    /// breadth-first inheritance along `is_a`. The first that succeeds wins.
    pub fn explain_property(&self, source_id: &str, property_label: &str) -> Deduction {
        let direct = self.store.query_relationships(source_id, PROPERTY_RELATION);
        if direct.iter().any(|p| p == property_label) {
            tracing::trace!(
                event = "deduction_step",
                source_id,
                property_label,
                resolution = "direct_property",
                "resolved by direct property"
            );
            return Deduction::DirectProperty;
        }

        if source_id == property_label {
            tracing::trace!(
                event = "deduction_step",
                source_id,
                resolution = "identity",
                "resolved by identity"
            );
            return Deduction::Identity;
        }

        // An unknown source has no hierarchy to climb.
        if !self.store.contains_node(source_id) {
            tracing::trace!(
                event = "deduction_step",
                source_id,
                property_label,
                resolution = "unproven",
                "unknown source"
            );
            return Deduction::Unproven;
        }

        match hierarchy::find_ancestor(self.store, source_id, property_label) {
            Some(via) => {
                tracing::trace!(
                    event = "deduction_step",
                    source_id,
                    property_label,
                    resolution = "inherited",
                    hops = via.len() - 1,
                    "resolved by inheritance"
                );
                Deduction::Inherited { via }
            }
            None => {
                tracing::trace!(
                    event = "deduction_step",
                    source_id,
                    property_label,
                    resolution = "unproven",
                    "unproven"
                );
                Deduction::Unproven
            }
        }
    }
}
