use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Checksum and record count of one snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// blake3 hex digest of the file bytes.
    pub checksum: String,
    pub records: usize,
}

/// Written last; a snapshot without a manifest was never completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub format_version: u32,
    /// Rebuild timestamp identifying this snapshot.
    pub version: String,
    pub created_at: DateTime<Utc>,
    /// Keyed by file name.
    pub files: BTreeMap<String, FileEntry>,
}

impl SnapshotManifest {
    pub fn node_total(&self) -> usize {
        self.files
            .iter()
            .filter(|(name, _)| name.ends_with("_nodes.json"))
            .map(|(_, f)| f.records)
            .sum()
    }

    pub fn edge_total(&self) -> usize {
        self.files
            .get(lens_core::constants::EDGES_FILE)
            .map(|f| f.records)
            .unwrap_or(0)
    }
}
