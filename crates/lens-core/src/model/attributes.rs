//! Per-type attribute structs. A gap always carries a severity and a roadmap
//! item always carries a horizon; the type system enforces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gap severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Significant,
    Moderate,
    Minor,
}

impl Severity {
    /// Ordering weight, higher = more severe.
    pub fn weight(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::Significant => 3,
            Self::Moderate => 2,
            Self::Minor => 1,
        }
    }
}

/// Pending question priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Ordering weight, higher = more urgent.
    pub fn weight(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Roadmap horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Now,
    Next,
    Later,
    Future,
}

impl Horizon {
    /// Ordering position, lower = sooner.
    pub fn position(&self) -> u8 {
        match self {
            Self::Now => 0,
            Self::Next => 1,
            Self::Later => 2,
            Self::Future => 3,
        }
    }
}

/// Question lifecycle status. Drives the question's authority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Pending,
    Answered,
}

impl Default for QuestionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkAttributes {
    pub content: String,
    pub source_id: String,
    /// Authority/credibility tag assigned to the source document at ingestion.
    #[serde(default)]
    pub lens: String,
    #[serde(default)]
    pub key_terms: Vec<String>,
    #[serde(default)]
    pub time_refs: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superseded_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionAttributes {
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    pub created_at: DateTime<Utc>,
    /// IDs of decisions this one explicitly conflicts with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts_with: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAttributes {
    pub text: String,
    #[serde(default)]
    pub status: QuestionStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Decision ID that answered this question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superseded_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentAttributes {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItemAttributes {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub horizon: Horizon,
    /// IDs of roadmap items this one depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAttributes {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
}
