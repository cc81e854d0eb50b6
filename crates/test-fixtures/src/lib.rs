//! Test fixture loader for lensgraph golden scenarios, plus record builders
//! shared by the integration tests of every crate.

pub mod builders;

use std::collections::BTreeMap;
use std::path::PathBuf;

use lens_core::model::{Chunk, Node};
use lens_core::traits::SeedHit;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
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

/// A golden end-to-end scenario: inputs for a sync pass plus the query and
/// the outcome a correct build and traversal must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub dimensions: usize,
    pub chunks: Vec<Chunk>,
    #[serde(default)]
    pub entities: Vec<Node>,
    #[serde(default)]
    pub seeds: Vec<SeedHit>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub expected: Expected,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expected {
    /// Edge counts keyed by `EdgeType` name. Types not listed must be absent.
    #[serde(default)]
    pub edge_counts: Option<BTreeMap<String, usize>>,
    /// `(source, target, edge type)` triples that must exist.
    #[serde(default)]
    pub edges: Vec<(String, String, String)>,
    /// Node IDs that must appear in the result, keyed by authority level name.
    #[serde(default)]
    pub buckets: BTreeMap<String, Vec<String>>,
    /// Node IDs that must not appear anywhere in the result.
    #[serde(default)]
    pub absent: Vec<String>,
}

/// Load a golden scenario by name from `golden/<area>/<name>.json`.
pub fn load_scenario(area: &str, name: &str) -> Scenario {
    load_fixture(&format!("golden/{area}/{name}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_files_parse() {
        for (area, name) in [
            ("builder", "five_chunks"),
            ("retrieval", "catalog_ga"),
            ("retrieval", "superseded_chunk"),
        ] {
            assert!(fixture_exists(&format!("golden/{area}/{name}.json")));
            let scenario = load_scenario(area, name);
            assert!(!scenario.chunks.is_empty(), "{area}/{name} has no chunks");
            for chunk in &scenario.chunks {
                assert_eq!(chunk.embedding.len(), scenario.dimensions, "{}", chunk.id);
            }
        }
    }
}
