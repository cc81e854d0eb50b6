//! Unified Graph Builder: upserts every node and links higher-order entities
//! to chunks and to each other.
//!
//! Inference is driven by the configured [`LinkRule`] table. For each rule,
//! the whole target population is indexed, every source entity is scored
//! against its candidates, and passing pairs become typed edges weighted by
//! the signal that triggered them. Explicit references carried on the
//! records (`superseded_by`, `answered_by`, `depends_on`, `conflicts_with`)
//! become edges of weight 1.0.

mod candidates;
mod explicit;

use lens_core::config::{LinkRule, UnifiedConfig};
use lens_core::errors::{GraphError, LensResult};
use lens_core::model::{Node, NodeType};
use lens_graph::{RelationshipGraph, Upsert};
use lens_observability::{events, BuilderMetrics};
use rayon::prelude::*;
use tracing::debug;

use crate::edge_spec::{self, EdgeSpec};
use crate::scope::LinkScope;
use crate::scoring::{self, Profile, RelevanceScorer, Thresholds};
use candidates::CandidateIndex;

pub struct UnifiedGraphBuilder {
    config: UnifiedConfig,
    dimensions: usize,
    scorers: Vec<Box<dyn RelevanceScorer>>,
}

impl UnifiedGraphBuilder {
    pub fn new(config: &UnifiedConfig, dimensions: usize) -> Self {
        Self {
            config: config.clone(),
            dimensions,
            scorers: scoring::default_scorers(),
        }
    }

    /// Replace the scorer chain.
    pub fn with_scorers(mut self, scorers: Vec<Box<dyn RelevanceScorer>>) -> Self {
        self.scorers = scorers;
        self
    }

    /// Validate and upsert records. Invalid records and type collisions are
    /// logged and skipped. Returns the IDs inserted by this call.
    pub fn upsert_nodes(
        &self,
        graph: &mut RelationshipGraph,
        nodes: impl IntoIterator<Item = Node>,
        metrics: &mut BuilderMetrics,
    ) -> Vec<String> {
        let mut inserted = Vec::new();
        for node in nodes {
            if let Err(e) = node.validate(self.dimensions) {
                events::record_skipped(&node.id, &e.to_string());
                metrics.record_skip(e.kind());
                continue;
            }
            let id = node.id.clone();
            match graph.add_node(node) {
                Ok(outcome) => {
                    metrics.nodes_upserted += 1;
                    if outcome == Upsert::Inserted {
                        metrics.new_nodes += 1;
                        inserted.push(id);
                    }
                }
                Err(e @ GraphError::DuplicateNode { .. }) => {
                    events::record_skipped(&id, &e.to_string());
                    metrics.record_skip("duplicate_node");
                }
                Err(e) => {
                    events::record_skipped(&id, &e.to_string());
                    metrics.record_skip("graph_error");
                }
            }
        }
        inserted
    }

    /// Run every link rule and the explicit reference pass, inserting new edges.
    pub fn infer_edges(
        &self,
        graph: &mut RelationshipGraph,
        scope: &LinkScope,
        metrics: &mut BuilderMetrics,
    ) -> LensResult<usize> {
        let mut specs = self.score_rules(graph, scope, metrics);
        specs.extend(explicit::edges(graph, metrics));
        edge_spec::normalize(&mut specs);
        let inserted = edge_spec::insert_new(graph, &specs, metrics)?;
        record_coverage(graph, metrics);
        Ok(inserted)
    }

    fn score_rules(
        &self,
        graph: &RelationshipGraph,
        scope: &LinkScope,
        metrics: &mut BuilderMetrics,
    ) -> Vec<EdgeSpec> {
        if scope.is_empty() {
            return Vec::new();
        }

        let profiles: Vec<Vec<Profile<'_>>> = NodeType::ALL
            .iter()
            .map(|&t| {
                let nodes: Vec<&Node> = graph.nodes_of_type(t).collect();
                nodes.par_iter().map(|&n| Profile::new(n)).collect()
            })
            .collect();

        if self
            .config
            .link_rules
            .iter()
            .any(|r| r.target == NodeType::Chunk)
        {
            metrics.chunks_processed += profiles[NodeType::Chunk.index()].len() as u64;
        }

        let mut specs = Vec::new();
        for rule in &self.config.link_rules {
            let sources = &profiles[rule.source.index()];
            let targets = &profiles[rule.target.index()];
            if sources.is_empty() || targets.is_empty() {
                continue;
            }
            let found = self.score_rule(graph, rule, sources, targets, scope);
            debug!(
                source = %rule.source,
                target = %rule.target,
                edge_type = %rule.edge_type,
                edges = found.len(),
                "link rule scored"
            );
            specs.extend(found);
        }
        specs
    }

    fn score_rule(
        &self,
        graph: &RelationshipGraph,
        rule: &LinkRule,
        sources: &[Profile<'_>],
        targets: &[Profile<'_>],
        scope: &LinkScope,
    ) -> Vec<EdgeSpec> {
        let index = CandidateIndex::build(targets);
        let thresholds = Thresholds {
            embedding: rule.embedding_threshold,
            min_terms: self.config.min_terms_for(rule),
        };
        let cap = self.config.max_candidates_per_entity.max(1);

        sources
            .par_iter()
            .flat_map_iter(|entity| {
                index
                    .candidates(entity, cap, self.config.prefilter_candidates)
                    .into_iter()
                    .filter_map(|ti| {
                        let target = &targets[ti];
                        if entity.id() == target.id()
                            || !scope.admits(entity.id(), target.id())
                            || graph.contains_edge(entity.id(), target.id(), rule.edge_type)
                        {
                            return None;
                        }
                        let verdict = scoring::evaluate(&self.scorers, entity, target, &thresholds)?;
                        verdict.passes.then(|| {
                            EdgeSpec::directed(entity.id(), target.id(), rule.edge_type, verdict.weight)
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Chunk coverage after the pass: how many chunks touch a higher-order node.
pub fn record_coverage(graph: &RelationshipGraph, metrics: &mut BuilderMetrics) {
    let chunks: Vec<&Node> = graph.nodes_of_type(NodeType::Chunk).collect();
    metrics.chunks_total = chunks.len() as u64;
    metrics.chunks_linked = chunks
        .iter()
        .filter(|c| graph.has_cross_type_edge(&c.id))
        .count() as u64;
}
