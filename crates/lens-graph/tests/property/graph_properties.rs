//! Property tests for lens-graph: referential integrity and type partitioning.

use proptest::prelude::*;

use lens_core::model::{EdgeType, Horizon, Node, NodeType, Severity};
use lens_graph::RelationshipGraph;
use test_fixtures::builders::*;

fn make_node(i: usize) -> Node {
    let id = format!("n{i}");
    match i % 4 {
        0 => chunk(&id, &format!("doc{}", i % 3), "chunk body", axis(4, i)).into(),
        1 => decision(&id, "decision title", "decision text", i as i64),
        2 => roadmap_item(&id, "roadmap item", "description", Horizon::Later),
        _ => gap(&id, "gap", "description", Severity::Moderate),
    }
}

/// Build a graph with `n` nodes. Edges to indices `>= n` are attempted and must fail.
fn build_graph(n: usize, edges: &[(usize, usize, usize, f64)]) -> (RelationshipGraph, usize) {
    let mut graph = RelationshipGraph::new();
    for i in 0..n {
        graph.add_node(make_node(i)).unwrap();
    }
    let mut rejected = 0;
    for &(src, dst, ty, weight) in edges {
        let edge_type = EdgeType::ALL[ty % EdgeType::COUNT];
        if graph
            .add_edge(&format!("n{src}"), &format!("n{dst}"), edge_type, weight)
            .is_err()
        {
            rejected += 1;
        }
    }
    (graph, rejected)
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, usize, f64)>> {
    prop::collection::vec((0..n + 3, 0..n + 3, 0..EdgeType::COUNT, 0.0_f64..=1.0), 0..n * 3)
}

// =============================================================================
// No dangling edges, before or after a snapshot round trip
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn no_dangling_edges_after_load(edges in edge_strategy(12)) {
        let (graph, rejected) = build_graph(12, &edges);
        prop_assert_eq!(graph.edge_count() + rejected, edges.len());

        let dir = tempfile::tempdir().unwrap();
        graph.save(dir.path()).unwrap();
        let loaded = RelationshipGraph::load(dir.path()).unwrap();

        prop_assert_eq!(loaded.edge_count(), graph.edge_count());
        for (src, dst, edge) in loaded.edges() {
            prop_assert!(loaded.contains_node(&src.id));
            prop_assert!(loaded.contains_node(&dst.id));
            prop_assert!((0.0..=1.0).contains(&edge.weight));
        }
    }
}

// =============================================================================
// Per-type index partitions the node set
// =============================================================================
proptest! {
    #[test]
    fn type_index_partitions_nodes(n in 0usize..40, repeats in 1usize..3) {
        let mut graph = RelationshipGraph::new();
        for _ in 0..repeats {
            for i in 0..n {
                graph.add_node(make_node(i)).unwrap();
            }
        }
        prop_assert_eq!(graph.node_count(), n);
        let mut total = 0;
        for t in NodeType::ALL {
            for node in graph.nodes_of_type(t) {
                prop_assert_eq!(node.node_type(), t);
            }
            total += graph.count_of_type(t);
        }
        prop_assert_eq!(total, n);
    }
}
