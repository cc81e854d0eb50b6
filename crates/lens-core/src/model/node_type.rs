use serde::{Deserialize, Serialize};

/// The six node types in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Chunk,
    Decision,
    Question,
    RoadmapItem,
    Assessment,
    Gap,
}

impl NodeType {
    pub const COUNT: usize = 6;

    pub const ALL: [NodeType; 6] = [
        Self::Chunk,
        Self::Decision,
        Self::Question,
        Self::RoadmapItem,
        Self::Assessment,
        Self::Gap,
    ];

    /// Higher-order entity types (everything but chunks).
    pub const ENTITIES: [NodeType; 5] = [
        Self::Decision,
        Self::Question,
        Self::RoadmapItem,
        Self::Assessment,
        Self::Gap,
    ];

    /// Dense index for per-type side tables.
    pub fn index(&self) -> usize {
        match self {
            Self::Chunk => 0,
            Self::Decision => 1,
            Self::Question => 2,
            Self::RoadmapItem => 3,
            Self::Assessment => 4,
            Self::Gap => 5,
        }
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "chunk" => Some(Self::Chunk),
            "decision" => Some(Self::Decision),
            "question" => Some(Self::Question),
            "roadmap_item" => Some(Self::RoadmapItem),
            "assessment" => Some(Self::Assessment),
            "gap" => Some(Self::Gap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chunk => "chunk",
            Self::Decision => "decision",
            Self::Question => "question",
            Self::RoadmapItem => "roadmap_item",
            Self::Assessment => "assessment",
            Self::Gap => "gap",
        }
    }

    /// Snapshot file stem holding nodes of this type, e.g. `chunk_nodes`.
    pub fn snapshot_stem(&self) -> &'static str {
        match self {
            Self::Chunk => "chunk_nodes",
            Self::Decision => "decision_nodes",
            Self::Question => "question_nodes",
            Self::RoadmapItem => "roadmap_item_nodes",
            Self::Assessment => "assessment_nodes",
            Self::Gap => "gap_nodes",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
