use serde::{Deserialize, Serialize};

use crate::errors::LensResult;

/// A ranked candidate chunk from the vector search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedHit {
    pub chunk_id: String,
    pub score: f64,
}

impl SeedHit {
    pub fn new(chunk_id: impl Into<String>, score: f64) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            score,
        }
    }
}

/// Vector search provider. The core only consumes its query contract.
pub trait IVectorSearch: Send + Sync {
    /// Return up to `limit` chunk IDs ranked by similarity to the query embedding.
    fn search(&self, query_embedding: &[f32], limit: usize) -> LensResult<Vec<SeedHit>>;
}
