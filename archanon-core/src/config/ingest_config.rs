use serde::{Deserialize, Serialize};

use super::defaults;

/// Triplet learning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Emit a progress event every N learned triplets. 0 disables progress events.
    pub progress_interval: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            progress_interval: defaults::DEFAULT_PROGRESS_INTERVAL,
        }
    }
}
