//! # archanon-causal
//!
//! The reasoning half of the kernel. Answers "does X have property Y?" from
//! direct `has_property` edges, identity, and inheritance along `is_a`.
//! Holds no state of its own; it reads any [`IRelationStore`].
//!
//! [`IRelationStore`]: archanon_core::IRelationStore

pub mod deduction;
pub mod engine;
pub mod traversal;

pub use deduction::Deduction;
pub use engine::DeductionEngine;
