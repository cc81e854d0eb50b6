use super::{Profile, Relevance, RelevanceScorer, Signal, Thresholds};

/// Shared-term count against the rule's minimum. Weight is the Jaccard overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer;

impl RelevanceScorer for LexicalScorer {
    fn name(&self) -> &'static str {
        "lexical_overlap"
    }

    fn score(
        &self,
        entity: &Profile<'_>,
        target: &Profile<'_>,
        thresholds: &Thresholds,
    ) -> Option<Relevance> {
        let shared = entity.terms.intersection(&target.terms).count();
        let union = entity.terms.len() + target.terms.len() - shared;
        let weight = if union == 0 {
            0.0
        } else {
            shared as f64 / union as f64
        };
        Some(Relevance {
            signal: Signal::Lexical,
            weight,
            passes: shared >= thresholds.min_terms.max(1),
        })
    }
}
