mod relation_store;

pub use relation_store::IRelationStore;
