use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Cap on the stage A expanded chunk set (seeds included).
    pub max_expanded_chunks: usize,
    /// Hops followed during stage A.
    pub chunk_expansion_hops: usize,
    /// Hops followed during stage B.
    pub unified_hops: usize,
    /// Optional wall-clock budget for stage B. Partial results are kept on expiry.
    pub stage_b_timeout_ms: Option<u64>,
    /// Run the direct keyword scan for types the traversal missed.
    pub fallback_enabled: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_expanded_chunks: defaults::DEFAULT_MAX_EXPANDED_CHUNKS,
            chunk_expansion_hops: defaults::DEFAULT_CHUNK_EXPANSION_HOPS,
            unified_hops: defaults::DEFAULT_UNIFIED_HOPS,
            stage_b_timeout_ms: None,
            fallback_enabled: defaults::DEFAULT_FALLBACK_ENABLED,
        }
    }
}
