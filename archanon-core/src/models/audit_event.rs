use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::{Params, Value};

/// One immutable record in the append-only audit chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Component that performed the call, e.g. "GraphStore".
    pub module: String,
    /// Operation name, e.g. "addRelationship".
    pub action: String,
    /// Owned snapshot of the call's inputs.
    pub params: Params,
    /// Result observed after the call completed.
    pub result: Value,
}

impl AuditEvent {
    /// Create an event stamped with the current UTC time.
    pub fn new(
        module: impl Into<String>,
        action: impl Into<String>,
        params: Params,
        result: impl Into<Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            module: module.into(),
            action: action.into(),
            params,
            result: result.into(),
        }
    }
}
