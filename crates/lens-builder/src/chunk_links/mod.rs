//! Chunk Relationship Builder: intra-chunk edges from four independent passes.
//!
//! - `SAME_SOURCE`: chunks sharing a `source_id`, weight 1.0.
//! - `TOPIC_OVERLAP`: at least `topic_min_shared_terms` shared key terms, weight = |∩| / |∪|.
//! - `SIMILAR_TO`: embedding cosine ≥ threshold, computed in fixed-size block pairs.
//! - `TEMPORAL_OVERLAP`: intersecting time references, weight 1.0.
//!
//! All four types are symmetric and stored once per unordered pair. Pass
//! outputs are merged and sorted, so results never depend on pass or batch order.

mod same_source;
mod similarity;
mod temporal;
mod topic_overlap;

use std::collections::BTreeSet;

use lens_core::config::ChunkLinkConfig;
use lens_core::errors::LensResult;
use lens_core::model::{Node, NodeAttributes, NodeType};
use lens_core::text;
use lens_graph::RelationshipGraph;
use lens_observability::BuilderMetrics;
use tracing::debug;

use crate::edge_spec::{self, EdgeSpec};
use crate::scope::LinkScope;

/// The per-chunk fields the passes read.
#[derive(Debug)]
pub(crate) struct ChunkView<'a> {
    pub id: &'a str,
    pub source_id: &'a str,
    pub key_terms: BTreeSet<String>,
    pub time_refs: BTreeSet<&'a str>,
    pub embedding: Option<&'a [f32]>,
}

impl<'a> ChunkView<'a> {
    fn from_node(node: &'a Node) -> Option<Self> {
        let NodeAttributes::Chunk(c) = &node.attributes else {
            return None;
        };
        Some(Self {
            id: &node.id,
            source_id: &c.source_id,
            key_terms: c
                .key_terms
                .iter()
                .map(|t| text::normalize_term(t))
                .filter(|t| !t.is_empty())
                .collect(),
            time_refs: c
                .time_refs
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect(),
            embedding: node.embedding.as_deref().filter(|e| !e.is_empty()),
        })
    }
}

pub struct ChunkRelationshipBuilder {
    config: ChunkLinkConfig,
}

impl ChunkRelationshipBuilder {
    pub fn new(config: &ChunkLinkConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Run all four passes over `chunks`. Non-chunk nodes are ignored.
    /// The result is sorted and free of duplicate triples.
    pub fn build(&self, chunks: &[&Node], scope: &LinkScope) -> Vec<EdgeSpec> {
        let mut views: Vec<ChunkView<'_>> =
            chunks.iter().filter_map(|n| ChunkView::from_node(n)).collect();
        views.sort_by(|a, b| a.id.cmp(b.id));
        views.dedup_by(|a, b| a.id == b.id);

        if views.len() < 2 || scope.is_empty() {
            return Vec::new();
        }

        let mut specs = same_source::edges(&views, scope);
        specs.extend(topic_overlap::edges(
            &views,
            self.config.topic_min_shared_terms,
            scope,
        ));
        specs.extend(similarity::edges(
            &views,
            self.config.similarity_threshold,
            self.config.similarity_batch_size,
            self.config.parallel_batches,
            scope,
        ));
        specs.extend(temporal::edges(&views, scope));

        edge_spec::normalize(&mut specs);
        debug!(chunks = views.len(), edges = specs.len(), "chunk link passes done");
        specs
    }

    /// Infer intra-chunk edges over every chunk in `graph` and insert the new ones.
    pub fn apply(
        &self,
        graph: &mut RelationshipGraph,
        scope: &LinkScope,
        metrics: &mut BuilderMetrics,
    ) -> LensResult<usize> {
        let specs = {
            let chunks: Vec<&Node> = graph.nodes_of_type(NodeType::Chunk).collect();
            self.build(&chunks, scope)
        };
        edge_spec::insert_new(graph, &specs, metrics)
    }
}
