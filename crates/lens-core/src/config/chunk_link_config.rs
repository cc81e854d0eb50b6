use serde::{Deserialize, Serialize};

use super::defaults;

/// Intra-chunk edge inference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkLinkConfig {
    /// Minimum shared key terms for a TOPIC_OVERLAP edge.
    pub topic_min_shared_terms: usize,
    /// Minimum cosine similarity for a SIMILAR_TO edge.
    pub similarity_threshold: f64,
    /// Chunks per similarity batch. Bounds peak memory to O(batch²).
    pub similarity_batch_size: usize,
    /// Run similarity batches on the rayon pool.
    pub parallel_batches: bool,
}

impl Default for ChunkLinkConfig {
    fn default() -> Self {
        Self {
            topic_min_shared_terms: defaults::DEFAULT_TOPIC_MIN_SHARED_TERMS,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            similarity_batch_size: defaults::DEFAULT_SIMILARITY_BATCH_SIZE,
            parallel_batches: defaults::DEFAULT_PARALLEL_BATCHES,
        }
    }
}
