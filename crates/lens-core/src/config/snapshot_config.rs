use serde::{Deserialize, Serialize};

use super::defaults;

/// Snapshot persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Snapshot root. Each sync writes a versioned subdirectory and then
    /// repoints the `CURRENT` file at it.
    pub dir: String,
    /// Versioned snapshots kept on disk, the current one included.
    pub keep_versions: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            dir: defaults::DEFAULT_SNAPSHOT_DIR.to_string(),
            keep_versions: defaults::DEFAULT_KEEP_VERSIONS,
        }
    }
}
