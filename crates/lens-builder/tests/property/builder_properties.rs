//! Property tests for lens-builder: batch invariance, SAME_SOURCE symmetry,
//! idempotent sync.

use proptest::prelude::*;

use lens_builder::{ChunkRelationshipBuilder, EdgeSpec, LinkScope, SyncEngine};
use lens_core::config::ChunkLinkConfig;
use lens_core::model::{EdgeType, Node};
use lens_core::{Chunk, LensConfig};
use lens_graph::RelationshipGraph;
use lens_observability::BuilderMetrics;
use test_fixtures::builders::chunk;

const DIMS: usize = 3;

fn chunks_strategy(max: usize) -> impl Strategy<Value = Vec<Chunk>> {
    prop::collection::vec(
        (prop::collection::vec(-1.0_f32..1.0, DIMS), 0usize..4),
        2..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (embedding, src))| {
                chunk(&format!("c{i:03}"), &format!("doc{src}"), "body", embedding)
            })
            .collect()
    })
}

fn similar_to(nodes: &[Node], batch_size: usize, parallel: bool) -> Vec<EdgeSpec> {
    let config = ChunkLinkConfig {
        similarity_threshold: 0.8,
        similarity_batch_size: batch_size,
        parallel_batches: parallel,
        ..ChunkLinkConfig::default()
    };
    let refs: Vec<&Node> = nodes.iter().collect();
    ChunkRelationshipBuilder::new(&config)
        .build(&refs, &LinkScope::All)
        .into_iter()
        .filter(|s| s.edge_type == EdgeType::SimilarTo)
        .collect()
}

// =============================================================================
// Batched similarity equals a single full pairwise pass
// =============================================================================
proptest! {
    #[test]
    fn batching_does_not_change_similar_to(
        chunks in chunks_strategy(40),
        batch_size in 1usize..50,
        parallel in any::<bool>(),
    ) {
        let nodes: Vec<Node> = chunks.into_iter().map(Node::from).collect();
        let full = similar_to(&nodes, nodes.len(), false);
        let batched = similar_to(&nodes, batch_size, parallel);
        prop_assert_eq!(full, batched);
    }
}

// =============================================================================
// SAME_SOURCE holds for every same-source pair and is traversable both ways
// =============================================================================
proptest! {
    #[test]
    fn same_source_covers_every_pair(chunks in chunks_strategy(25)) {
        let mut graph = RelationshipGraph::new();
        for c in &chunks {
            graph.add_node(c.clone().into()).unwrap();
        }
        let mut metrics = BuilderMetrics::new();
        ChunkRelationshipBuilder::new(&ChunkLinkConfig::default())
            .apply(&mut graph, &LinkScope::All, &mut metrics)
            .unwrap();

        for a in &chunks {
            for b in &chunks {
                if a.id == b.id {
                    continue;
                }
                let linked = graph.contains_edge(&a.id, &b.id, EdgeType::SameSource);
                prop_assert_eq!(linked, a.source_id == b.source_id);
                if linked {
                    let from_a = graph.neighbors(&a.id).into_iter().any(|n| {
                        n.node.id == b.id && n.edge_type == EdgeType::SameSource && n.weight == 1.0
                    });
                    prop_assert!(from_a);
                }
            }
        }
    }
}

// =============================================================================
// Building twice over unchanged input leaves node and edge counts unchanged
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn build_is_idempotent(chunks in chunks_strategy(20)) {
        let mut config = LensConfig::default();
        config.embedding.dimensions = DIMS;
        let engine = SyncEngine::new(&config).unwrap();
        let entities: Vec<Node> = Vec::new();

        let (first, _) = engine.build(None, &chunks, &entities).unwrap();
        let (rebuilt, _) = engine.build(None, &chunks, &entities).unwrap();
        let (second, metrics) = engine.build(Some(&first), &chunks, &entities).unwrap();

        prop_assert_eq!(first.edge_counts_by_type(), rebuilt.edge_counts_by_type());

        prop_assert_eq!(first.node_count(), second.node_count());
        prop_assert_eq!(first.edge_counts_by_type(), second.edge_counts_by_type());
        prop_assert_eq!(metrics.total_edges_added(), 0);
    }
}
