//! Test fixture loader for Lexis golden documents.
//!
//! Golden files live under `golden/documents/` in this crate. Each one
//! pairs an input document with the exact report the engine must produce.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Directory holding the golden document cases.
pub const GOLDEN_DOCUMENTS: &str = "golden/documents";

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
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// One golden document case.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenDocument {
    pub name: String,
    pub description: String,
    pub input: GoldenInput,
    pub expected: GoldenExpected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenInput {
    pub content: String,
    /// Rule name → enabled. Absent rules are enabled.
    #[serde(default)]
    pub rules: BTreeMap<String, bool>,
    pub reference_year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpected {
    pub overall_passed: bool,
    pub score: u8,
    /// Rules present in the report, canonical order.
    pub executed_rules: Vec<String>,
    pub failed_rules: Vec<String>,
    pub issues: Vec<GoldenIssue>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoldenIssue {
    pub kind: String,
    pub severity: String,
    pub message: String,
    pub occurrences: u32,
}

/// Load every golden document case, sorted by file name.
pub fn load_golden_documents() -> Vec<GoldenDocument> {
    list_fixtures(GOLDEN_DOCUMENTS)
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}
