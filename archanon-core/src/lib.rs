//! # archanon-core
//!
//! Foundation crate for the Archanon knowledge kernel.
//! Defines the value model, audit records, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use config::ArchanonConfig;
pub use errors::{ArchanonError, ArchanonResult};
pub use models::{AuditEvent, Triplet};
pub use traits::IRelationStore;
pub use value::{Attributes, Param, Params, Value};
