use serde::{Deserialize, Serialize};

/// The 7 fixed authority ranks, 1 = highest.
///
/// Derived from node type plus question status; never stored on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityLevel {
    Decision = 1,
    AnsweredQuestion = 2,
    Assessment = 3,
    RoadmapItem = 4,
    Gap = 5,
    Chunk = 6,
    PendingQuestion = 7,
}

impl AuthorityLevel {
    pub const COUNT: usize = 7;

    /// All levels, highest authority first.
    pub const ALL: [AuthorityLevel; 7] = [
        Self::Decision,
        Self::AnsweredQuestion,
        Self::Assessment,
        Self::RoadmapItem,
        Self::Gap,
        Self::Chunk,
        Self::PendingQuestion,
    ];

    /// Numeric rank, 1..=7.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.rank() == rank)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::AnsweredQuestion => "answered_question",
            Self::Assessment => "assessment",
            Self::RoadmapItem => "roadmap_item",
            Self::Gap => "gap",
            Self::Chunk => "chunk",
            Self::PendingQuestion => "pending_question",
        }
    }
}

impl std::fmt::Display for AuthorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.rank())
    }
}
