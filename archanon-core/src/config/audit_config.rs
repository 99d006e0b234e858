use serde::{Deserialize, Serialize};

use super::defaults;

/// Audit chain rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Text returned by trace rendering when no events are recorded.
    pub empty_placeholder: String,
    /// `chrono` format string for the per-line timestamp.
    pub timestamp_format: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            empty_placeholder: defaults::DEFAULT_EMPTY_TRACE_PLACEHOLDER.to_string(),
            timestamp_format: defaults::DEFAULT_TRACE_TIMESTAMP_FORMAT.to_string(),
        }
    }
}
