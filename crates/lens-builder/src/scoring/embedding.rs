use lens_core::text::cosine_similarity;

use super::{Profile, Relevance, RelevanceScorer, Signal, Thresholds};

/// Cosine similarity of the two embeddings. Applies only when both sides carry one.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddingScorer;

impl RelevanceScorer for EmbeddingScorer {
    fn name(&self) -> &'static str {
        "embedding_cosine"
    }

    fn score(
        &self,
        entity: &Profile<'_>,
        target: &Profile<'_>,
        thresholds: &Thresholds,
    ) -> Option<Relevance> {
        let a = entity.node.embedding.as_deref()?;
        let b = target.node.embedding.as_deref()?;
        if a.is_empty() || a.len() != b.len() {
            return None;
        }
        let sim = cosine_similarity(a, b);
        Some(Relevance {
            signal: Signal::Embedding,
            weight: sim.clamp(0.0, 1.0),
            passes: sim >= thresholds.embedding,
        })
    }
}
