mod audit_event;
mod triplet;

pub use audit_event::AuditEvent;
pub use triplet::Triplet;
