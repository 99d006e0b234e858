//! # archanon-observability
//!
//! The kernel's observer: an append-only audit chain of every completed
//! operation with human-readable rendering, plus structured tracing setup,
//! span definitions, and log events.

pub mod audit_log;
pub mod tracing_setup;

pub use audit_log::AuditLog;
