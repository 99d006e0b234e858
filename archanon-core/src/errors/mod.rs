mod archanon_error;

pub use archanon_error::ArchanonError;

/// Convenience alias used across the workspace.
pub type ArchanonResult<T> = Result<T, ArchanonError>;
