//! Test fixture loader for Archanon golden datasets.
//!
//! Provides typed deserialization of the golden scenario files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

// ---------------------------------------------------------------------------
// Golden deduction scenarios
// ---------------------------------------------------------------------------

/// A fact to assert before running the scenario's checks.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenFact {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

/// An expected property query outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenQuery {
    pub source: String,
    pub property: String,
    pub expected: bool,
    /// Expected resolution kind: "direct_property", "identity", "inherited", "unproven".
    #[serde(default)]
    pub resolution: Option<String>,
}

/// An expected shortest-path outcome. `expected: null` means no path.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenPath {
    pub from: String,
    pub to: String,
    pub expected: Option<Vec<String>>,
}

/// One golden deduction scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    pub facts: Vec<GoldenFact>,
    #[serde(default)]
    pub queries: Vec<GoldenQuery>,
    #[serde(default)]
    pub paths: Vec<GoldenPath>,
}

/// Names of all golden deduction scenario files.
pub const GOLDEN_DEDUCTION_FILES: [&str; 5] = [
    "golden/deduction/socrates_syllogism.json",
    "golden/deduction/diamond_cycle.json",
    "golden/deduction/direct_property.json",
    "golden/deduction/closed_world.json",
    "golden/deduction/zoo_taxonomy.json",
];

/// Load every golden deduction scenario with its file path.
pub fn load_golden_deduction() -> Vec<(String, GoldenScenario)> {
    GOLDEN_DEDUCTION_FILES
        .iter()
        .map(|f| (f.to_string(), load_fixture(f)))
        .collect()
}
