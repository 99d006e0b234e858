// Single source of truth for all default values.

// --- Audit ---
pub const DEFAULT_EMPTY_TRACE_PLACEHOLDER: &str = "No events logged.";
pub const DEFAULT_TRACE_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

// --- Ingest ---
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = true;
