/// Top-level error for the Archanon workspace.
///
/// Core graph and deduction operations never fail; absent entities are
/// reported as empty results. These variants cover the ambient surfaces.
#[derive(Debug, thiserror::Error)]
pub enum ArchanonError {
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("graph inconsistency: {details}")]
    GraphInconsistency { details: String },
}

impl From<toml::de::Error> for ArchanonError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            reason: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ArchanonError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigError {
            reason: err.to_string(),
        }
    }
}
