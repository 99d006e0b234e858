//! Learning loop: feed normalized triplets from an ingestion collaborator.

use archanon_core::Triplet;
use archanon_observability::learning_span;
use archanon_observability::tracing_setup::events;
use serde::{Deserialize, Serialize};

use crate::coordinator::Coordinator;

/// Outcome of a learning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearningReport {
    /// Triplets asserted during this pass, duplicates included.
    pub facts_learned: usize,
    /// Concepts in memory after the pass.
    pub node_count: usize,
    /// Relationships in memory after the pass.
    pub edge_count: usize,
}

impl Coordinator {
    /// Assert every triplet as `subject --relation--> object`.
    ///
    /// Each triplet goes through [`Coordinator::assert_fact`], so each one is
    /// recorded in the audit chain individually.
    pub fn learn<I>(&mut self, triplets: I) -> LearningReport
    where
        I: IntoIterator<Item = Triplet>,
    {
        let _span = learning_span!().entered();
        let interval = self.config().ingest.progress_interval;

        let mut facts_learned = 0;
        for triplet in triplets {
            self.assert_fact(&triplet.subject, &triplet.object, &triplet.relation);
            facts_learned += 1;
            if interval > 0 && facts_learned % interval == 0 {
                events::learning_progress(facts_learned);
            }
        }

        let stats = self.stats();
        events::learning_completed(facts_learned, stats.node_count, stats.edge_count);

        LearningReport {
            facts_learned,
            node_count: stats.node_count,
            edge_count: stats.edge_count,
        }
    }
}
