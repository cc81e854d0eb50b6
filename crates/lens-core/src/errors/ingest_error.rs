/// Inbound record errors. One bad record never aborts a sync pass.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("embedding dimension mismatch on {id}: expected {expected}, got {actual}")]
    DimensionMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("malformed record {id}: {reason}")]
    MalformedRecord { id: String, reason: String },
}

impl IngestError {
    /// Short key used to bucket skip counters.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::MalformedRecord { .. } => "malformed_record",
        }
    }
}
