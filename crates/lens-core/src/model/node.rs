use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attributes::*;
use super::{AuthorityLevel, NodeType};
use crate::errors::IngestError;
use crate::text;

/// Per-type attributes as a closed sum type. The variant is the node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeAttributes {
    Chunk(ChunkAttributes),
    Decision(DecisionAttributes),
    Question(QuestionAttributes),
    RoadmapItem(RoadmapItemAttributes),
    Assessment(AssessmentAttributes),
    Gap(GapAttributes),
}

impl NodeAttributes {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Chunk(_) => NodeType::Chunk,
            Self::Decision(_) => NodeType::Decision,
            Self::Question(_) => NodeType::Question,
            Self::RoadmapItem(_) => NodeType::RoadmapItem,
            Self::Assessment(_) => NodeType::Assessment,
            Self::Gap(_) => NodeType::Gap,
        }
    }
}

/// A typed graph node. The ID is the external entity's stable ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub attributes: NodeAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Node {
    pub fn new(id: impl Into<String>, attributes: NodeAttributes) -> Self {
        Self {
            id: id.into(),
            attributes,
            embedding: None,
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn node_type(&self) -> NodeType {
        self.attributes.node_type()
    }

    /// Authority level: a pure function of type and question status.
    pub fn authority(&self) -> AuthorityLevel {
        match &self.attributes {
            NodeAttributes::Decision(_) => AuthorityLevel::Decision,
            NodeAttributes::Question(q) => match q.status {
                QuestionStatus::Answered => AuthorityLevel::AnsweredQuestion,
                QuestionStatus::Pending => AuthorityLevel::PendingQuestion,
            },
            NodeAttributes::Assessment(_) => AuthorityLevel::Assessment,
            NodeAttributes::RoadmapItem(_) => AuthorityLevel::RoadmapItem,
            NodeAttributes::Gap(_) => AuthorityLevel::Gap,
            NodeAttributes::Chunk(_) => AuthorityLevel::Chunk,
        }
    }

    /// Textual attribute fields: name, title, description, content, summary,
    /// question text, answer, decision text, rationale.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = match &self.attributes {
            NodeAttributes::Chunk(c) => vec![c.content.as_str()],
            NodeAttributes::Decision(d) => {
                let mut f = vec![d.title.as_str(), d.text.as_str()];
                if let Some(r) = &d.rationale {
                    f.push(r.as_str());
                }
                f
            }
            NodeAttributes::Question(q) => {
                let mut f = vec![q.text.as_str()];
                if let Some(a) = &q.answer {
                    f.push(a.as_str());
                }
                f
            }
            NodeAttributes::RoadmapItem(r) => vec![r.name.as_str(), r.description.as_str()],
            NodeAttributes::Assessment(a) => {
                let mut f = vec![a.title.as_str(), a.summary.as_str()];
                if let Some(v) = &a.verdict {
                    f.push(v.as_str());
                }
                f
            }
            NodeAttributes::Gap(g) => vec![g.name.as_str(), g.description.as_str()],
        };
        fields.retain(|f| !f.trim().is_empty());
        fields
    }

    /// All textual fields joined with a space.
    pub fn searchable_text(&self) -> String {
        self.text_fields().join(" ")
    }

    /// Short human-readable label.
    pub fn label(&self) -> String {
        let raw = match &self.attributes {
            NodeAttributes::Chunk(c) => c.content.as_str(),
            NodeAttributes::Decision(d) => d.title.as_str(),
            NodeAttributes::Question(q) => q.text.as_str(),
            NodeAttributes::RoadmapItem(r) => r.name.as_str(),
            NodeAttributes::Assessment(a) => a.title.as_str(),
            NodeAttributes::Gap(g) => g.name.as_str(),
        };
        text::truncate_chars(raw, 120)
    }

    /// Normalized term set used for topical matching. Chunks use their
    /// extracted key terms when present; everything else tokenizes its text.
    pub fn terms(&self) -> BTreeSet<String> {
        if let NodeAttributes::Chunk(c) = &self.attributes {
            if !c.key_terms.is_empty() {
                return c
                    .key_terms
                    .iter()
                    .map(|t| text::normalize_term(t))
                    .filter(|t| !t.is_empty())
                    .collect();
            }
        }
        text::extract_terms(&self.searchable_text())
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match &self.attributes {
            NodeAttributes::Chunk(c) => Some(c.created_at),
            NodeAttributes::Decision(d) => Some(d.created_at),
            _ => None,
        }
    }

    /// ID of the higher-authority entity that overrode this node, if any.
    pub fn superseded_by(&self) -> Option<&str> {
        match &self.attributes {
            NodeAttributes::Chunk(c) => c.superseded_by.as_deref(),
            NodeAttributes::Question(q) => q.superseded_by.as_deref(),
            _ => None,
        }
    }

    /// Validate an inbound record. `dimensions` is the deployment's embedding size.
    pub fn validate(&self, dimensions: usize) -> Result<(), IngestError> {
        if self.id.trim().is_empty() {
            return Err(IngestError::MalformedRecord {
                id: self.id.clone(),
                reason: "empty id".to_string(),
            });
        }
        if self.text_fields().is_empty() {
            return Err(IngestError::MalformedRecord {
                id: self.id.clone(),
                reason: format!("{} carries no text", self.node_type()),
            });
        }
        if let NodeAttributes::Chunk(c) = &self.attributes {
            if c.source_id.trim().is_empty() {
                return Err(IngestError::MalformedRecord {
                    id: self.id.clone(),
                    reason: "chunk without source_id".to_string(),
                });
            }
        }
        if let Some(embedding) = &self.embedding {
            if embedding.len() != dimensions {
                return Err(IngestError::DimensionMismatch {
                    id: self.id.clone(),
                    expected: dimensions,
                    actual: embedding.len(),
                });
            }
        }
        Ok(())
    }
}
