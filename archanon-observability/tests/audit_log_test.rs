//! Tests for the audit chain: ordering, snapshots, rendering, clearing.

use archanon_core::config::AuditConfig;
use archanon_core::{Params, Value};
use archanon_observability::AuditLog;

fn fact_params(source: &str, target: &str, label: &str) -> Params {
    Params::new()
        .with("source_id", source)
        .with("target_id", target)
        .with("label", label)
}

// ---------------------------------------------------------------------------
// Append and ordering
// ---------------------------------------------------------------------------

#[test]
fn new_log_is_empty_and_renders_placeholder() {
    let log = AuditLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert_eq!(log.render(), "No events logged.");
}

#[test]
fn events_are_kept_in_append_order() {
    let mut log = AuditLog::new();
    log.append("GraphStore", "addRelationship", fact_params("a", "b", "is_a"), "Success");
    log.append(
        "DeductionEngine",
        "deduceProperty",
        Params::new().with("source_id", "a").with("property_label", "b"),
        true,
    );

    let events = log.all();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].module, "GraphStore");
    assert_eq!(events[0].action, "addRelationship");
    assert_eq!(events[0].result, Value::from("Success"));
    assert_eq!(events[1].module, "DeductionEngine");
    assert_eq!(events[1].result, Value::from(true));
    assert!(events[0].timestamp <= events[1].timestamp);
    assert_ne!(events[0].id, events[1].id);
}

#[test]
fn append_returns_the_recorded_event() {
    let mut log = AuditLog::new();
    let event = log.append("Coordinator", "reset", Params::new(), "done");
    assert_eq!(event.action, "reset");
    assert!(event.params.is_empty());
}

#[test]
fn recorded_params_are_a_snapshot() {
    let mut log = AuditLog::new();
    let mut source = String::from("socrates");
    log.append(
        "GraphStore",
        "addRelationship",
        fact_params(&source, "human", "is_a"),
        "Success",
    );
    source.push_str("_renamed");

    assert_eq!(
        log.all()[0].params.get("source_id"),
        Some(&Value::from("socrates"))
    );
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn render_formats_one_line_per_event() {
    let mut log = AuditLog::new();
    log.append("GraphStore", "addRelationship", fact_params("socrates", "human", "is_a"), "Success");
    log.append(
        "DeductionEngine",
        "deduceProperty",
        Params::new()
            .with("source_id", "socrates")
            .with("property_label", "mortal"),
        false,
    );

    let rendered = log.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);

    let (stamp, rest) = lines[0].split_once("] ").unwrap();
    // "[HH:MM:SS.mmm"
    assert!(stamp.starts_with('['));
    assert_eq!(stamp.len(), 13);
    assert_eq!(&stamp[3..4], ":");
    assert_eq!(&stamp[9..10], ".");
    assert_eq!(
        rest,
        "GraphStore: Called addRelationship(source_id=socrates, target_id=human, label=is_a). Result -> Success"
    );

    assert!(lines[1].ends_with(
        "DeductionEngine: Called deduceProperty(source_id=socrates, property_label=mortal). Result -> false"
    ));
}

#[test]
fn render_with_empty_params_has_empty_parens() {
    let mut log = AuditLog::new();
    log.append("Coordinator", "reset", Params::new(), "System reset to initial state.");
    assert!(log
        .render()
        .ends_with("Coordinator: Called reset(). Result -> System reset to initial state."));
}

#[test]
fn render_honors_configured_placeholder_and_format() {
    let config = AuditConfig {
        empty_placeholder: "(nothing yet)".to_string(),
        timestamp_format: "%Y".to_string(),
    };
    let mut log = AuditLog::with_config(config);
    assert_eq!(log.render(), "(nothing yet)");

    log.append("GraphStore", "addRelationship", fact_params("a", "b", "is_a"), "Success");
    let year = chrono::Utc::now().format("%Y").to_string();
    assert!(log.render().starts_with(&format!("[{year}] GraphStore")));
}

#[test]
fn invalid_timestamp_format_falls_back_to_default() {
    let config = AuditConfig {
        timestamp_format: "%Q%".to_string(),
        ..Default::default()
    };
    let mut log = AuditLog::with_config(config);
    log.append("GraphStore", "addRelationship", Params::new(), "Success");
    let rendered = log.render();
    let (stamp, _) = rendered.split_once("] ").unwrap();
    assert_eq!(stamp.len(), 13);
}

// ---------------------------------------------------------------------------
// Clear and export
// ---------------------------------------------------------------------------

#[test]
fn clear_discards_everything() {
    let mut log = AuditLog::new();
    for i in 0..5 {
        log.append("GraphStore", "addRelationship", fact_params(&format!("n{i}"), "x", "is_a"), "Success");
    }
    assert_eq!(log.len(), 5);
    log.clear();
    assert!(log.all().is_empty());
    assert_eq!(log.render(), "No events logged.");
}

#[test]
fn to_json_exports_raw_chain() {
    let mut log = AuditLog::new();
    log.append("GraphStore", "addRelationship", fact_params("a", "b", "is_a"), "Success");
    log.append("DeductionEngine", "deduceProperty", Params::new().with("source_id", "a"), true);

    let json = log.to_json().unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["action"], "addRelationship");
    assert_eq!(arr[0]["params"][2]["name"], "label");
    assert_eq!(arr[1]["result"], true);
    assert!(arr[1]["timestamp"].is_string());
}
