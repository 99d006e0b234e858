//! Hierarchy traversal over a relation store.

pub mod hierarchy;
