//! Property tests for lens-retrieval: termination, uniqueness, caps.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use lens_core::model::{EdgeType, Horizon, Node, NodeType, Priority, QuestionStatus, Severity};
use lens_core::LensConfig;
use lens_graph::RelationshipGraph;
use lens_retrieval::{RetrievalEngine, RetrievalRequest};
use test_fixtures::builders::*;

fn make_node(i: usize) -> Node {
    let id = format!("n{i}");
    match i % 5 {
        0 | 1 => chunk(&id, &format!("doc{}", i % 3), "catalog notes", axis(4, i)).into(),
        2 => decision(&id, "catalog decision", "decision text", i as i64),
        3 => question(&id, "catalog question", QuestionStatus::Pending, Priority::High),
        _ => match i % 2 {
            0 => roadmap_item(&id, "catalog roadmap", "description", Horizon::Next),
            _ => gap(&id, "catalog gap", "description", Severity::Minor),
        },
    }
}

/// Undirected hop distance from the nearest chunk seed, by plain BFS.
fn distances(graph: &RelationshipGraph, seeds: &[String]) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    for s in seeds {
        if graph.node(s).is_some_and(|n| n.node_type() == NodeType::Chunk) && !dist.contains_key(s) {
            dist.insert(s.clone(), 0);
            queue.push_back(s.clone());
        }
    }
    while let Some(id) = queue.pop_front() {
        let d = dist[&id];
        for n in graph.neighbors(&id) {
            if !dist.contains_key(&n.node.id) {
                dist.insert(n.node.id.clone(), d + 1);
                queue.push_back(n.node.id.clone());
            }
        }
    }
    dist
}

fn random_graph(n: usize, edges: &[(usize, usize, usize)]) -> RelationshipGraph {
    let mut graph = RelationshipGraph::new();
    for i in 0..n {
        graph.add_node(make_node(i)).unwrap();
    }
    for &(src, dst, ty) in edges {
        let edge_type = EdgeType::ALL[ty % EdgeType::COUNT];
        graph
            .add_edge(&format!("n{}", src % n), &format!("n{}", dst % n), edge_type, 0.7)
            .unwrap();
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_node_is_emitted_at_most_once(
        edges in prop::collection::vec((0..30usize, 0..30usize, 0..EdgeType::COUNT), 0..120),
        seeds in prop::collection::vec(0..30usize, 1..6),
    ) {
        let graph = random_graph(30, &edges);
        let engine = RetrievalEngine::new(&LensConfig::default()).unwrap();
        let seed_ids: Vec<String> = seeds.iter().map(|s| format!("n{s}")).collect();
        let result = engine.retrieve(&graph, &RetrievalRequest::from_ids(seed_ids.clone()));
        let reach = distances(&graph, &seed_ids);

        let mut seen = HashSet::new();
        for entry in result.entries() {
            prop_assert!(seen.insert(entry.id.clone()), "duplicate {}", entry.id);
            // One chunk-expansion hop plus two traversal hops.
            let hops = reach.get(&entry.id).copied();
            prop_assert!(hops.is_some_and(|h| h <= 3), "{} is {:?} hops out", entry.id, hops);
        }
    }

    #[test]
    fn buckets_never_exceed_their_caps(
        edges in prop::collection::vec((0..40usize, 0..40usize, 0..EdgeType::COUNT), 0..200),
        per_category in 1..4usize,
        max_chunks in 1..4usize,
    ) {
        let graph = random_graph(40, &edges);
        let mut config = LensConfig::default();
        config.assembler.max_per_category = per_category;
        config.assembler.max_chunks = max_chunks;
        let engine = RetrievalEngine::new(&config).unwrap();
        let result = engine.retrieve(&graph, &RetrievalRequest::from_ids(["n0", "n1", "n5"]));

        for bucket in &result.buckets {
            let cap = match bucket.level {
                lens_core::AuthorityLevel::Chunk => max_chunks,
                _ => per_category,
            };
            prop_assert!(bucket.entries.len() <= cap);
            prop_assert!(bucket.candidates >= bucket.entries.len());
        }
    }
}
