use std::sync::Arc;
use std::thread;

use lens_core::model::{EdgeType, NodeType};
use lens_observability::tracing_setup::events;
use lens_observability::{init_tracing_with_filter, BuilderMetrics, RetrievalMetrics};

#[test]
fn builder_metrics_count_skips_and_edges() {
    let mut m = BuilderMetrics::new();
    m.record_skip("dimension_mismatch");
    m.record_skip("dimension_mismatch");
    m.record_skip("malformed_record");
    m.record_edge(EdgeType::SupportedBy);
    m.record_edge(EdgeType::SameSource);
    m.record_edge(EdgeType::SameSource);

    assert_eq!(m.total_skipped(), 3);
    assert_eq!(m.records_skipped["dimension_mismatch"], 2);
    assert_eq!(m.edges_of(EdgeType::SameSource), 2);
    assert_eq!(m.edges_of(EdgeType::Overrides), 0);
    assert_eq!(m.total_edges_added(), 3);
}

#[test]
fn chunk_coverage_is_linked_over_total() {
    let m = BuilderMetrics {
        chunks_linked: 100,
        chunks_total: 987,
        ..Default::default()
    };
    assert!((m.chunk_coverage() - 100.0 / 987.0).abs() < 1e-12);
    assert_eq!(BuilderMetrics::new().chunk_coverage(), 0.0);
}

#[test]
fn retrieval_metrics_are_shared_across_threads() {
    let metrics = Arc::new(RetrievalMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let m = Arc::clone(&metrics);
            thread::spawn(move || {
                m.record_query(i % 2);
                m.record_missing_seeds(1);
                m.record_fallback(NodeType::RoadmapItem);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let snap = metrics.snapshot();
    assert_eq!(snap.queries, 8);
    assert_eq!(snap.empty_results, 4);
    assert_eq!(snap.missing_seeds, 8);
    assert_eq!(
        snap.fallback_activations,
        vec![("roadmap_item".to_string(), 8)]
    );
}

#[test]
fn events_emit_without_subscriber_panics() {
    init_tracing_with_filter("debug");
    // A second init is a no-op, not a panic.
    init_tracing_with_filter("info");
    events::record_skipped("c-1", "dimension_mismatch");
    events::sync_completed(10, 20, 0.5, "full");
    events::seed_missing("c-404");
    events::fallback_scan(NodeType::Gap, 2);
    events::traversal_timeout(12, 40);
    events::retrieval_completed(1, 2, 3, 4);
    events::snapshot_published("v1", 10, 20);
}

#[test]
fn metric_snapshots_serialize_for_operators() {
    let mut m = BuilderMetrics::new();
    m.record_edge(EdgeType::TopicOverlap);
    m.chunks_total = 4;
    m.chunks_linked = 1;
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["chunks_total"], 4);

    let r = RetrievalMetrics::new();
    r.record_timeout();
    let json = serde_json::to_value(r.snapshot()).unwrap();
    assert_eq!(json["traversal_timeouts"], 1);
}
