use crate::model::NodeType;

/// Structural graph errors. These indicate a builder logic defect and are
/// returned to the caller as hard failures.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate node {id}: already registered as {existing}, attempted {attempted}")]
    DuplicateNode {
        id: String,
        existing: NodeType,
        attempted: NodeType,
    },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("invalid weight {weight} on edge {source_id} -> {target_id}: must be within [0, 1]")]
    InvalidWeight {
        source_id: String,
        target_id: String,
        weight: f64,
    },
}
