/// Retrieval errors. Soft: recorded in diagnostics, never raised to callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RetrievalError {
    #[error("stage B traversal timed out after {elapsed_ms} ms with {visited} nodes visited")]
    TraversalTimeout { elapsed_ms: u64, visited: usize },
}
