//! Relevance scorers for cross-type inference.
//!
//! Scorers are tried in order; the first that can judge a pair decides.
//! The default order prefers embedding cosine and falls back to lexical
//! term overlap when either side lacks a vector.

mod embedding;
mod lexical;

use std::collections::BTreeSet;

use lens_core::model::Node;

pub use embedding::EmbeddingScorer;
pub use lexical::LexicalScorer;

/// A node with its term set computed once per pass.
#[derive(Debug)]
pub struct Profile<'a> {
    pub node: &'a Node,
    pub terms: BTreeSet<String>,
}

impl<'a> Profile<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            terms: node.terms(),
        }
    }

    pub fn id(&self) -> &'a str {
        &self.node.id
    }
}

/// Per-rule pass criteria.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub embedding: f64,
    pub min_terms: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Embedding,
    Lexical,
}

/// A scorer's verdict on one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relevance {
    pub signal: Signal,
    /// Edge weight in [0, 1] if the pair passes.
    pub weight: f64,
    pub passes: bool,
}

pub trait RelevanceScorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` when this scorer cannot judge the pair.
    fn score(&self, entity: &Profile<'_>, target: &Profile<'_>, thresholds: &Thresholds)
        -> Option<Relevance>;
}

/// Embedding first, lexical fallback.
pub fn default_scorers() -> Vec<Box<dyn RelevanceScorer>> {
    vec![Box::new(EmbeddingScorer), Box::new(LexicalScorer)]
}

/// Verdict of the first scorer able to judge the pair.
pub fn evaluate(
    scorers: &[Box<dyn RelevanceScorer>],
    entity: &Profile<'_>,
    target: &Profile<'_>,
    thresholds: &Thresholds,
) -> Option<Relevance> {
    scorers
        .iter()
        .find_map(|s| s.score(entity, target, thresholds))
}
