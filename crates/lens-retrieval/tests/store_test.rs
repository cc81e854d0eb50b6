//! Retrieval against published snapshots and the external collaborators.

use std::sync::{Arc, Mutex};
use std::thread;

use lens_core::errors::{LensError, LensResult};
use lens_core::model::{AuthorityLevel, EdgeType, Node};
use lens_core::traits::{IVectorSearch, SeedHit};
use lens_core::LensConfig;
use lens_graph::{GraphStore, RelationshipGraph};
use lens_retrieval::{AuthorityResult, ISynthesisConsumer, RetrievalEngine, RetrievalRequest};
use test_fixtures::builders::*;

fn graph_with_decision(decision_id: &str) -> RelationshipGraph {
    let mut graph = RelationshipGraph::new();
    graph
        .add_node(Node::from(chunk("c1", "doc1", "Catalog search overview", axis(4, 0))))
        .unwrap();
    graph
        .add_node(decision(decision_id, "Catalog call", "Catalog ships", 0))
        .unwrap();
    graph.add_edge(decision_id, "c1", EdgeType::Overrides, 0.9).unwrap();
    graph
}

struct FixedSearch(Vec<SeedHit>);

impl IVectorSearch for FixedSearch {
    fn search(&self, _query_embedding: &[f32], limit: usize) -> LensResult<Vec<SeedHit>> {
        Ok(self.0.iter().take(limit).cloned().collect())
    }
}

struct BrokenSearch;

impl IVectorSearch for BrokenSearch {
    fn search(&self, _query_embedding: &[f32], _limit: usize) -> LensResult<Vec<SeedHit>> {
        Err(LensError::ConfigError("index offline".into()))
    }
}

#[derive(Default)]
struct Recorder {
    totals: Mutex<Vec<usize>>,
}

impl ISynthesisConsumer for Recorder {
    fn consume(&self, result: &AuthorityResult) -> LensResult<()> {
        self.totals
            .lock()
            .map_err(|e| LensError::ConcurrencyError(e.to_string()))?
            .push(result.total());
        Ok(())
    }
}

#[test]
fn store_retrieval_reports_snapshot_version() {
    let store = GraphStore::with_graph(graph_with_decision("d1"), "v1");
    let engine = RetrievalEngine::new(&LensConfig::default()).unwrap();
    let result = engine.retrieve_from_store(&store, &RetrievalRequest::from_ids(["c1"]));

    assert_eq!(result.diagnostics.snapshot_version.as_deref(), Some("v1"));
    assert_eq!(result.bucket(AuthorityLevel::Decision).ids(), vec!["d1"]);
}

#[test]
fn concurrent_queries_each_see_one_whole_snapshot() {
    let store = Arc::new(GraphStore::with_graph(graph_with_decision("d_old"), "v1"));
    let engine = Arc::new(RetrievalEngine::new(&LensConfig::default()).unwrap());

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..50)
                    .map(|_| engine.retrieve_from_store(&store, &RetrievalRequest::from_ids(["c1"])))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    store.publish(graph_with_decision("d_new"), "v2").unwrap();

    for reader in readers {
        for result in reader.join().unwrap() {
            let ids = result.bucket(AuthorityLevel::Decision).ids();
            match result.diagnostics.snapshot_version.as_deref() {
                Some("v1") => assert_eq!(ids, vec!["d_old"]),
                Some("v2") => assert_eq!(ids, vec!["d_new"]),
                other => panic!("unexpected version {other:?}"),
            }
        }
    }
    assert_eq!(engine.metrics().snapshot().queries, 400);
}

#[test]
fn vector_search_supplies_the_seeds() {
    let store = GraphStore::with_graph(graph_with_decision("d1"), "v1");
    let engine = RetrievalEngine::new(&LensConfig::default()).unwrap();
    let search = FixedSearch(vec![SeedHit::new("c1", 0.93), SeedHit::new("c_gone", 0.5)]);

    let result = engine.retrieve_for_query(&store, &search, &[1.0, 0.0, 0.0, 0.0], 1, RetrievalRequest::default());

    assert_eq!(result.diagnostics.seeds_requested, 1);
    assert_eq!(result.diagnostics.missing_seeds, 0);
    assert_eq!(result.bucket(AuthorityLevel::Chunk).entries[0].seed_score, Some(0.93));
    assert!(result.contains("d1"));
}

#[test]
fn failing_vector_search_degrades_to_empty_result() {
    let store = GraphStore::with_graph(graph_with_decision("d1"), "v1");
    let engine = RetrievalEngine::new(&LensConfig::default()).unwrap();
    let result = engine.retrieve_for_query(&store, &BrokenSearch, &[1.0; 4], 5, RetrievalRequest::default());

    assert!(result.is_empty());
    assert_eq!(result.diagnostics.soft_errors.len(), 1);
    assert!(result.diagnostics.soft_errors[0].contains("index offline"));
    assert_eq!(engine.metrics().snapshot().empty_results, 1);
}

#[test]
fn results_are_delivered_to_the_synthesis_consumer() {
    let store = GraphStore::with_graph(graph_with_decision("d1"), "v1");
    let engine = RetrievalEngine::new(&LensConfig::default()).unwrap();
    let recorder = Recorder::default();

    let result = engine.retrieve_from_store(&store, &RetrievalRequest::from_ids(["c1"]));
    engine.deliver(&recorder, &result).unwrap();
    engine
        .deliver(&recorder, &AuthorityResult::default())
        .unwrap();

    assert_eq!(*recorder.totals.lock().unwrap(), vec![2, 0]);
}
