//! Error taxonomy. Subsystem enums aggregate into [`LensError`].

mod graph_error;
mod ingest_error;
mod retrieval_error;
mod snapshot_error;

pub use graph_error::GraphError;
pub use ingest_error::IngestError;
pub use retrieval_error::RetrievalError;
pub use snapshot_error::SnapshotError;

/// Crate-wide result alias.
pub type LensResult<T> = Result<T, LensError>;

/// Top-level error for every lensgraph operation.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("ingest error: {0}")]
    IngestError(#[from] IngestError),

    #[error("snapshot error: {0}")]
    SnapshotError(#[from] SnapshotError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error at {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl LensError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
