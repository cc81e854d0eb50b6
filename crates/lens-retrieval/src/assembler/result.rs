use chrono::{DateTime, Utc};
use lens_core::model::{AuthorityLevel, NodeAttributes, NodeType};
use serde::{Deserialize, Serialize};

/// One node in a bucket, stripped of its embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: String,
    pub label: String,
    /// BFS hops from the expanded chunk set; 0 for expanded chunks and fallback hits.
    pub depth: usize,
    /// Upstream vector-search score for seed chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_score: Option<f64>,
    #[serde(flatten)]
    pub attributes: NodeAttributes,
}

impl RankedEntry {
    pub fn node_type(&self) -> NodeType {
        self.attributes.node_type()
    }

    /// Source credibility tag, for chunks.
    pub fn lens(&self) -> Option<&str> {
        match &self.attributes {
            NodeAttributes::Chunk(c) => Some(c.lens.as_str()),
            _ => None,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match &self.attributes {
            NodeAttributes::Chunk(c) => Some(c.created_at),
            NodeAttributes::Decision(d) => Some(d.created_at),
            _ => None,
        }
    }
}

/// All entries of one authority level, ranked and capped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorityBucket {
    pub level: AuthorityLevel,
    pub entries: Vec<RankedEntry>,
    /// Eligible entries before the cap.
    pub candidates: usize,
}

impl AuthorityBucket {
    pub fn empty(level: AuthorityLevel) -> Self {
        Self {
            level,
            entries: Vec::new(),
            candidates: 0,
        }
    }

    pub fn truncated(&self) -> bool {
        self.candidates > self.entries.len()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }
}

/// What happened during one retrieval, for operators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalDiagnostics {
    pub seeds_requested: usize,
    pub missing_seeds: usize,
    pub expanded_chunks: usize,
    /// Nodes reached by the traversal before filtering.
    pub visited: usize,
    pub filtered_out: usize,
    pub superseded_excluded: usize,
    pub fallback_types: Vec<NodeType>,
    pub timed_out: bool,
    /// Errors absorbed instead of raised, as display strings.
    pub soft_errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_version: Option<String>,
}

/// The bucketed structure handed to the synthesis consumer: seven buckets in
/// authority order, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorityResult {
    pub buckets: Vec<AuthorityBucket>,
    pub diagnostics: RetrievalDiagnostics,
}

impl Default for AuthorityResult {
    fn default() -> Self {
        Self::empty(RetrievalDiagnostics::default())
    }
}

impl AuthorityResult {
    pub fn empty(diagnostics: RetrievalDiagnostics) -> Self {
        Self {
            buckets: AuthorityLevel::ALL
                .into_iter()
                .map(AuthorityBucket::empty)
                .collect(),
            diagnostics,
        }
    }

    pub fn bucket(&self, level: AuthorityLevel) -> &AuthorityBucket {
        &self.buckets[level.rank() as usize - 1]
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries().any(|e| e.id == id)
    }

    /// Every entry, highest authority first.
    pub fn entries(&self) -> impl Iterator<Item = &RankedEntry> + '_ {
        self.buckets.iter().flat_map(|b| b.entries.iter())
    }
}
