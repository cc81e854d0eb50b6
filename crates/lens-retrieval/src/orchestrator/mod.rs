//! Retrieval Orchestrator.
//!
//! 1. Stage A expands the seed chunks one hop over `SIMILAR_TO`,
//!    `SAME_SOURCE` and `TOPIC_OVERLAP`, capped.
//! 2. Stage B runs a bidirectional BFS over every edge type from the expanded
//!    set, following successors and predecessors at each hop.
//! 3. The topic filter runs as a post-pass over the Stage A+B output.
//! 4. Entity types the traversal never reached, despite having nodes, get a
//!    direct keyword scan over their type index.

mod fallback;
mod filter;
mod stage_a;
mod stage_b;

use std::collections::HashMap;
use std::time::Duration;

use lens_core::config::RetrievalConfig;
use lens_core::errors::RetrievalError;
use lens_core::model::NodeType;
use lens_graph::RelationshipGraph;
use lens_observability::events;
use tracing::debug;

use crate::request::RetrievalRequest;
pub use stage_b::Visit;

/// Output of the orchestrator, ready for the assembler.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    /// Every emitted node, once, in discovery order.
    pub visits: Vec<Visit>,
    pub seed_scores: HashMap<String, f64>,
    pub missing_seeds: usize,
    pub expanded_chunks: usize,
    /// Nodes reached by Stage A+B before filtering.
    pub traversed: usize,
    pub filtered_out: usize,
    pub fallback_types: Vec<NodeType>,
    pub timeout: Option<RetrievalError>,
}

pub struct RetrievalOrchestrator {
    config: RetrievalConfig,
}

impl RetrievalOrchestrator {
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn expand(&self, graph: &RelationshipGraph, request: &RetrievalRequest) -> Expansion {
        if request.seeds.is_empty() {
            return Expansion::default();
        }

        let stage_a = stage_a::expand(
            graph,
            &request.seeds,
            self.config.chunk_expansion_hops,
            self.config.max_expanded_chunks,
        );
        let traversal = stage_b::traverse(
            graph,
            &stage_a.chunks,
            self.config.unified_hops,
            self.config.stage_b_timeout_ms.map(Duration::from_millis),
        );

        let timeout = traversal.timed_out.then(|| {
            let elapsed_ms = traversal.elapsed.as_millis() as u64;
            events::traversal_timeout(elapsed_ms, traversal.visits.len());
            RetrievalError::TraversalTimeout {
                elapsed_ms,
                visited: traversal.visits.len(),
            }
        });

        let mut visits = traversal.visits;
        let traversed = visits.len();
        let missing = fallback::missing_types(graph, &visits);

        let topics = request.topic_filter();
        let filtered_out = match topics {
            Some(t) => filter::retain_topics(graph, &mut visits, t),
            None => 0,
        };

        let mut fallback_types = Vec::new();
        if self.config.fallback_enabled && !missing.is_empty() {
            let keywords = fallback::keywords(topics, request.query_text.as_deref());
            if !keywords.is_empty() {
                for node_type in missing {
                    let mut found = fallback::scan(graph, node_type, &keywords);
                    if let Some(t) = topics {
                        filter::retain_topics(graph, &mut found, t);
                    }
                    visits.extend(found);
                    fallback_types.push(node_type);
                }
            }
        }

        debug!(
            seeds = request.seeds.len(),
            expanded = stage_a.chunks.len(),
            traversed,
            filtered_out,
            emitted = visits.len(),
            "expansion complete"
        );

        Expansion {
            visits,
            seed_scores: stage_a.seed_scores,
            missing_seeds: stage_a.missing_seeds,
            expanded_chunks: stage_a.chunks.len(),
            traversed,
            filtered_out,
            fallback_types,
            timeout,
        }
    }
}
