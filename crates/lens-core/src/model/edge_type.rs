use serde::{Deserialize, Serialize};

/// Typed edge relations. Intra-chunk types come first, cross-type after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    /// Two chunks extracted from the same source document.
    SameSource,
    /// Embedding cosine similarity above threshold.
    SimilarTo,
    /// Shared extracted key terms.
    TopicOverlap,
    /// Intersecting extracted time references.
    TemporalOverlap,
    /// Roadmap item is backed by chunk evidence.
    SupportedBy,
    /// Decision overrides what a chunk says.
    Overrides,
    /// Roadmap item is validated by an assessment.
    ValidatedBy,
    /// Entity answers a question or closes a gap.
    Addresses,
    /// Roadmap item depends on another.
    DependsOn,
    /// Two decisions conflict.
    ConflictsWith,
    /// Generic topical relation between an entity and evidence.
    RelatesTo,
}

impl EdgeType {
    pub const COUNT: usize = 11;

    pub const ALL: [EdgeType; 11] = [
        Self::SameSource,
        Self::SimilarTo,
        Self::TopicOverlap,
        Self::TemporalOverlap,
        Self::SupportedBy,
        Self::Overrides,
        Self::ValidatedBy,
        Self::Addresses,
        Self::DependsOn,
        Self::ConflictsWith,
        Self::RelatesTo,
    ];

    /// Edge types followed during chunk expansion (stage A).
    pub const CHUNK_EXPANSION: [EdgeType; 3] =
        [Self::SimilarTo, Self::SameSource, Self::TopicOverlap];

    /// Produced by the chunk relationship builder.
    pub fn is_intra_chunk(&self) -> bool {
        matches!(
            self,
            Self::SameSource | Self::SimilarTo | Self::TopicOverlap | Self::TemporalOverlap
        )
    }

    /// Symmetric relations are stored once per unordered pair and read from both ends.
    pub fn is_symmetric(&self) -> bool {
        self.is_intra_chunk()
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameSource => "SAME_SOURCE",
            Self::SimilarTo => "SIMILAR_TO",
            Self::TopicOverlap => "TOPIC_OVERLAP",
            Self::TemporalOverlap => "TEMPORAL_OVERLAP",
            Self::SupportedBy => "SUPPORTED_BY",
            Self::Overrides => "OVERRIDES",
            Self::ValidatedBy => "VALIDATED_BY",
            Self::Addresses => "ADDRESSES",
            Self::DependsOn => "DEPENDS_ON",
            Self::ConflictsWith => "CONFLICTS_WITH",
            Self::RelatesTo => "RELATES_TO",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
