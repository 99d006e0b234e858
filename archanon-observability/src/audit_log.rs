//! Append-only audit chain: every completed kernel operation, in completion order.

use std::fmt::Write as _;

use archanon_core::config::{defaults, AuditConfig};
use archanon_core::errors::ArchanonResult;
use archanon_core::{AuditEvent, Params, Value};
use chrono::{DateTime, Utc};

/// Ordered, append-only record of completed operations.
///
/// Events are never edited or removed individually; [`AuditLog::clear`] is
/// the only way to discard history.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
    config: AuditConfig,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::with_config(AuditConfig::default())
    }

    pub fn with_config(config: AuditConfig) -> Self {
        Self {
            events: Vec::new(),
            config,
        }
    }

    /// Record a completed call. `params` is taken by value, so the caller
    /// cannot alter the recorded inputs afterwards.
    pub fn append(
        &mut self,
        module: &str,
        action: &str,
        params: Params,
        result: impl Into<Value>,
    ) -> &AuditEvent {
        let event = AuditEvent::new(module, action, params, result);
        tracing::debug!(
            event = "audit_appended",
            seq = self.events.len(),
            module = %event.module,
            action = %event.action,
            result = %event.result,
            "audit event appended"
        );
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// All events in append order.
    pub fn all(&self) -> &[AuditEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Human-readable trace, one line per event:
    /// `[HH:MM:SS.mmm] <module>: Called <action>(<k>=<v>, ...). Result -> <result>`.
    pub fn render(&self) -> String {
        if self.events.is_empty() {
            return self.config.empty_placeholder.clone();
        }

        let mut out = String::new();
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(
                out,
                "[{}] {}: Called {}({}). Result -> {}",
                self.format_timestamp(&event.timestamp),
                event.module,
                event.action,
                event.params,
                event.result
            );
        }
        out
    }

    /// Discard every event. Irreversible.
    pub fn clear(&mut self) {
        let discarded = self.events.len();
        self.events.clear();
        tracing::debug!(event = "audit_cleared", discarded, "audit chain cleared");
    }

    /// Machine-readable export of the raw chain.
    pub fn to_json(&self) -> ArchanonResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.events)?)
    }

    fn format_timestamp(&self, ts: &DateTime<Utc>) -> String {
        let mut out = String::new();
        // An invalid user format surfaces as a fmt error, not a panic.
        if write!(out, "{}", ts.format(&self.config.timestamp_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", ts.format(defaults::DEFAULT_TRACE_TIMESTAMP_FORMAT));
        }
        out
    }
}
