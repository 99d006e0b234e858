mod audit_config;
pub mod defaults;
mod ingest_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use audit_config::AuditConfig;
pub use ingest_config::IngestConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{ArchanonError, ArchanonResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchanonConfig {
    pub audit: AuditConfig,
    pub ingest: IngestConfig,
    pub observability: ObservabilityConfig,
}

impl ArchanonConfig {
    /// Parse from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> ArchanonResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ArchanonResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ArchanonError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> ArchanonResult<String> {
        Ok(toml::to_string(self)?)
    }
}
