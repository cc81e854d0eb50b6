use serde::{Deserialize, Serialize};

use super::defaults;

/// Authority assembler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Cap per entity bucket.
    pub max_per_category: usize,
    /// Cap for the chunk bucket.
    pub max_chunks: usize,
    /// Keep superseded chunks and superseded questions in the result.
    pub include_superseded: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            max_per_category: defaults::DEFAULT_MAX_PER_CATEGORY,
            max_chunks: defaults::DEFAULT_MAX_CHUNKS,
            include_superseded: defaults::DEFAULT_INCLUDE_SUPERSEDED,
        }
    }
}
