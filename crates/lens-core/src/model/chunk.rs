use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChunkAttributes, Node, NodeAttributes};

/// Flat chunk record as supplied by the document & embedding provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub content: String,
    pub source_id: String,
    #[serde(default)]
    pub lens: String,
    pub embedding: Vec<f32>,
    #[serde(default)]
    pub key_terms: Vec<String>,
    #[serde(default)]
    pub time_refs: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superseded_by: Option<String>,
}

impl Chunk {
    /// Convert into a graph node. The embedding is always carried over.
    pub fn into_node(self) -> Node {
        Node {
            id: self.id,
            attributes: NodeAttributes::Chunk(ChunkAttributes {
                content: self.content,
                source_id: self.source_id,
                lens: self.lens,
                key_terms: self.key_terms,
                time_refs: self.time_refs,
                created_at: self.created_at,
                superseded_by: self.superseded_by,
            }),
            embedding: Some(self.embedding),
        }
    }
}

impl From<Chunk> for Node {
    fn from(chunk: Chunk) -> Self {
        chunk.into_node()
    }
}
