use serde::{Deserialize, Serialize};

use super::defaults;
use crate::model::{EdgeType, NodeType};

/// One cross-type inference rule: when the relevance between a `source` node
/// and a `target` node passes the threshold, create `source -[edge_type]-> target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRule {
    pub source: NodeType,
    pub target: NodeType,
    pub edge_type: EdgeType,
    /// Minimum cosine similarity when both sides carry embeddings.
    pub embedding_threshold: f64,
    /// Minimum shared terms for lexical scoring. Falls back to the config-wide value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_term_matches: Option<usize>,
}

impl LinkRule {
    pub fn new(source: NodeType, target: NodeType, edge_type: EdgeType, threshold: f64) -> Self {
        Self {
            source,
            target,
            edge_type,
            embedding_threshold: threshold,
            min_term_matches: None,
        }
    }
}

/// The default rule table.
pub fn default_link_rules() -> Vec<LinkRule> {
    use EdgeType::*;
    use NodeType::*;
    vec![
        LinkRule::new(RoadmapItem, Chunk, SupportedBy, defaults::DEFAULT_SUPPORTED_BY_THRESHOLD),
        LinkRule::new(Decision, Chunk, Overrides, defaults::DEFAULT_OVERRIDES_THRESHOLD),
        LinkRule::new(
            RoadmapItem,
            Assessment,
            ValidatedBy,
            defaults::DEFAULT_VALIDATED_BY_THRESHOLD,
        ),
        LinkRule::new(Decision, Question, Addresses, defaults::DEFAULT_ADDRESSES_THRESHOLD),
        LinkRule::new(RoadmapItem, Gap, Addresses, defaults::DEFAULT_ADDRESSES_THRESHOLD),
        LinkRule::new(Question, Chunk, RelatesTo, defaults::DEFAULT_QUESTION_RELATES_THRESHOLD),
        LinkRule::new(Assessment, Chunk, RelatesTo, defaults::DEFAULT_RELATES_TO_THRESHOLD),
        LinkRule::new(Gap, Chunk, RelatesTo, defaults::DEFAULT_RELATES_TO_THRESHOLD),
    ]
}

/// Cross-type edge inference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifiedConfig {
    pub link_rules: Vec<LinkRule>,
    /// Default minimum shared terms for lexical scoring.
    pub min_term_matches: usize,
    /// Restrict each entity's candidates to targets sharing at least one term.
    pub prefilter_candidates: bool,
    /// Upper bound on candidates scored per entity and rule.
    pub max_candidates_per_entity: usize,
}

impl UnifiedConfig {
    /// Effective lexical threshold for a rule.
    pub fn min_terms_for(&self, rule: &LinkRule) -> usize {
        rule.min_term_matches.unwrap_or(self.min_term_matches)
    }
}

impl Default for UnifiedConfig {
    fn default() -> Self {
        Self {
            link_rules: default_link_rules(),
            min_term_matches: defaults::DEFAULT_MIN_TERM_MATCHES,
            prefilter_candidates: defaults::DEFAULT_PREFILTER_CANDIDATES,
            max_candidates_per_entity: defaults::DEFAULT_MAX_CANDIDATES_PER_ENTITY,
        }
    }
}
