//! Thread-safe handle over a single [`Coordinator`].

use std::sync::{Arc, Mutex, MutexGuard};

use archanon_core::errors::{ArchanonError, ArchanonResult};
use archanon_core::{AuditEvent, Triplet};
use archanon_memory::GraphStats;

use crate::coordinator::Coordinator;
use crate::learning::LearningReport;

/// Cloneable handle serializing all access to one coordinator.
///
/// Every method takes the lock once and performs exactly one coordinator
/// call, so one call still yields one audit event.
#[derive(Debug, Clone, Default)]
pub struct SharedCoordinator {
    inner: Arc<Mutex<Coordinator>>,
}

impl SharedCoordinator {
    pub fn new(coordinator: Coordinator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(coordinator)),
        }
    }

    pub fn assert_fact(&self, source_id: &str, target_id: &str, label: &str) -> ArchanonResult<()> {
        self.lock()?.assert_fact(source_id, target_id, label);
        Ok(())
    }

    pub fn query(&self, source_id: &str, property_label: &str) -> ArchanonResult<bool> {
        Ok(self.lock()?.query(source_id, property_label))
    }

    pub fn get_trace(&self) -> ArchanonResult<String> {
        Ok(self.lock()?.get_trace())
    }

    pub fn reset(&self) -> ArchanonResult<()> {
        self.lock()?.reset();
        Ok(())
    }

    /// Learn a batch while holding the lock for the whole batch.
    pub fn learn<I>(&self, triplets: I) -> ArchanonResult<LearningReport>
    where
        I: IntoIterator<Item = Triplet>,
    {
        Ok(self.lock()?.learn(triplets))
    }

    /// Snapshot of the audit chain.
    pub fn events(&self) -> ArchanonResult<Vec<AuditEvent>> {
        Ok(self.lock()?.events().to_vec())
    }

    pub fn stats(&self) -> ArchanonResult<GraphStats> {
        Ok(self.lock()?.stats())
    }

    fn lock(&self) -> ArchanonResult<MutexGuard<'_, Coordinator>> {
        self.inner
            .lock()
            .map_err(|e| ArchanonError::ConcurrencyError(e.to_string()))
    }
}
