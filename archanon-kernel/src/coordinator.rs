//! Coordinator: the kernel facade over memory, deduction, and the audit chain.

use archanon_causal::DeductionEngine;
use archanon_core::constants::{actions, modules, ASSERT_SUCCESS, RESET_DESCRIPTION};
use archanon_core::{ArchanonConfig, AuditEvent, Params};
use archanon_memory::{GraphStats, GraphStore};
use archanon_observability::tracing_setup::events;
use archanon_observability::{assert_span, deduction_span, AuditLog};

/// Explicitly owned knowledge kernel.
///
/// Each public operation runs to completion and then appends exactly one
/// audit event carrying its inputs and observed result. Instances share no
/// state with each other.
#[derive(Debug)]
pub struct Coordinator {
    memory: GraphStore,
    monitor: AuditLog,
    config: ArchanonConfig,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::with_config(ArchanonConfig::default())
    }

    pub fn with_config(config: ArchanonConfig) -> Self {
        Self {
            memory: GraphStore::new(),
            monitor: AuditLog::with_config(config.audit.clone()),
            config,
        }
    }

    /// Record `source --label--> target` in memory.
    pub fn assert_fact(&mut self, source_id: &str, target_id: &str, label: &str) {
        let _span = assert_span!(source_id, label, target_id).entered();
        let params = Params::new()
            .with("source_id", source_id)
            .with("target_id", target_id)
            .with("label", label);

        let inserted = self.memory.add_relationship(source_id, target_id, label);
        events::fact_asserted(source_id, target_id, label, inserted);

        self.monitor.append(
            modules::GRAPH_STORE,
            actions::ADD_RELATIONSHIP,
            params,
            ASSERT_SUCCESS,
        );
    }

    /// Does `source_id` have `property_label`, directly or by inheritance?
    pub fn query(&mut self, source_id: &str, property_label: &str) -> bool {
        let _span = deduction_span!(source_id, property_label).entered();
        let params = Params::new()
            .with("source_id", source_id)
            .with("property_label", property_label);

        let holds = DeductionEngine::new(&self.memory).deduce_property(source_id, property_label);
        events::property_deduced(source_id, property_label, holds);

        self.monitor.append(
            modules::DEDUCTION_ENGINE,
            actions::DEDUCE_PROPERTY,
            params,
            holds,
        );
        holds
    }

    /// Human-readable chain of every recorded operation. Not itself recorded.
    pub fn get_trace(&self) -> String {
        self.monitor.render()
    }

    /// Raw audit events in completion order.
    pub fn events(&self) -> &[AuditEvent] {
        self.monitor.all()
    }

    /// Size of the current concept graph.
    pub fn stats(&self) -> GraphStats {
        self.memory.stats()
    }

    pub fn config(&self) -> &ArchanonConfig {
        &self.config
    }

    /// Discard all knowledge and history, leaving a single reset event.
    pub fn reset(&mut self) {
        let discarded = self.memory.stats();
        let discarded_events = self.monitor.len();

        self.memory = GraphStore::new();
        self.monitor.clear();
        events::kernel_reset(discarded.node_count, discarded.edge_count, discarded_events);

        self.monitor.append(
            modules::COORDINATOR,
            actions::RESET,
            Params::new(),
            RESET_DESCRIPTION,
        );
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}
