/// Snapshot load errors. Fatal: a snapshot that fails validation is never published.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot corrupt: {details}")]
    Corrupt { details: String },

    #[error("snapshot format version mismatch: expected {expected}, found {actual}")]
    VersionMismatch { expected: u32, actual: u32 },
}
