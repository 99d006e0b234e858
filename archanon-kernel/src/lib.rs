//! # archanon-kernel
//!
//! The integrated core. [`Coordinator`] owns one concept graph and one audit
//! chain, and records every assertion and query after it completes.
//! Ingestion collaborators feed it normalized triplets; nothing else writes
//! to the graph.

pub mod coordinator;
pub mod learning;
pub mod shared;

pub use coordinator::Coordinator;
pub use learning::LearningReport;
pub use shared::SharedCoordinator;

pub use archanon_core::{ArchanonConfig, ArchanonError, ArchanonResult, AuditEvent, Triplet};
pub use archanon_memory::GraphStats;
