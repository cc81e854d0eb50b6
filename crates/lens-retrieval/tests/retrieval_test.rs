//! End-to-end retrieval: seeds in, authority buckets out.

use std::collections::BTreeMap;

use lens_builder::SyncEngine;
use lens_core::model::{AuthorityLevel, EdgeType, Horizon, Node, NodeType, Priority, QuestionStatus, Severity};
use lens_core::LensConfig;
use lens_graph::RelationshipGraph;
use lens_retrieval::{RetrievalEngine, RetrievalRequest};
use test_fixtures::builders::*;
use test_fixtures::{load_scenario, Scenario};

const DIMS: usize = 4;

fn build(scenario: &Scenario) -> RelationshipGraph {
    let mut config = LensConfig::default();
    config.embedding.dimensions = scenario.dimensions;
    let (graph, _) = SyncEngine::new(&config).unwrap()
        .build(None, &scenario.chunks, &scenario.entities)
        .unwrap();
    graph
}

fn engine() -> RetrievalEngine {
    RetrievalEngine::new(&LensConfig::default()).unwrap()
}

/// Seed chunk `c1` with every node in `linked` attached to it by `edge`.
fn star(linked: Vec<(Node, EdgeType)>) -> RelationshipGraph {
    let mut graph = RelationshipGraph::new();
    graph
        .add_node(Node::from(chunk("c1", "doc1", "Catalog search overview", axis(DIMS, 0))))
        .unwrap();
    for (node, edge) in linked {
        let id = node.id.clone();
        graph.add_node(node).unwrap();
        graph.add_edge(&id, "c1", edge, 0.8).unwrap();
    }
    graph
}

fn check_golden(scenario: &Scenario, result: &lens_retrieval::AuthorityResult) {
    let actual: BTreeMap<String, Vec<String>> = result
        .buckets
        .iter()
        .filter(|b| !b.entries.is_empty())
        .map(|b| {
            (
                b.level.as_str().to_string(),
                b.ids().into_iter().map(String::from).collect(),
            )
        })
        .collect();
    assert_eq!(actual, scenario.expected.buckets, "{}", scenario.description);
    for id in &scenario.expected.absent {
        assert!(!result.contains(id), "{id} should be absent");
    }
}

#[test]
fn empty_seed_set_returns_seven_empty_buckets() {
    let graph = star(vec![(decision("d1", "Ship it", "Catalog goes out", 0), EdgeType::Overrides)]);
    let result = engine().retrieve(&graph, &RetrievalRequest::new(Vec::new()));

    assert!(result.is_empty());
    assert_eq!(result.buckets.len(), 7);
    let levels: Vec<_> = result.buckets.iter().map(|b| b.level).collect();
    assert_eq!(levels, AuthorityLevel::ALL.to_vec());
}

#[test]
fn catalog_roadmap_item_is_reached_through_predecessor_edge() {
    let scenario = load_scenario("retrieval", "catalog_ga");
    let graph = build(&scenario);
    let result = engine().retrieve(&graph, &RetrievalRequest::new(scenario.seeds.clone()));

    check_golden(&scenario, &result);
    let roadmap = &result.bucket(AuthorityLevel::RoadmapItem).entries[0];
    assert_eq!(roadmap.depth, 1);
    assert_eq!(result.bucket(AuthorityLevel::Chunk).entries[0].seed_score, Some(0.91));
    assert_eq!(result.diagnostics.expanded_chunks, 2);
}

#[test]
fn superseded_chunk_is_excluded_by_default() {
    let scenario = load_scenario("retrieval", "superseded_chunk");
    let graph = build(&scenario);
    let result = engine().retrieve(&graph, &RetrievalRequest::new(scenario.seeds.clone()));

    check_golden(&scenario, &result);
    assert_eq!(result.diagnostics.superseded_excluded, 1);
}

#[test]
fn superseded_chunk_is_kept_on_request() {
    let scenario = load_scenario("retrieval", "superseded_chunk");
    let graph = build(&scenario);
    let request = RetrievalRequest::new(scenario.seeds.clone()).including_superseded();
    let result = engine().retrieve(&graph, &request);

    assert_eq!(result.bucket(AuthorityLevel::Chunk).ids(), vec!["chunk_2", "chunk_1"]);
    assert_eq!(result.bucket(AuthorityLevel::Decision).ids(), vec!["decision_1"]);
    assert_eq!(result.diagnostics.superseded_excluded, 0);
}

#[test]
fn superseded_question_is_excluded_but_superseded_decision_is_not() {
    let mut answered = question("q1", "Which region hosts the catalog?", QuestionStatus::Answered, Priority::Medium);
    if let lens_core::NodeAttributes::Question(q) = &mut answered.attributes {
        q.superseded_by = Some("d_new".into());
    }
    let graph = star(vec![
        (answered, EdgeType::RelatesTo),
        (decision("d_new", "Move region", "Catalog moves to eu-west", 10), EdgeType::Overrides),
    ]);
    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));

    assert!(!result.contains("q1"));
    assert!(result.contains("d_new"));
    assert_eq!(result.diagnostics.superseded_excluded, 1);
}

#[test]
fn missing_and_non_chunk_seeds_are_counted_and_skipped() {
    let graph = star(vec![(decision("d1", "Ship it", "Catalog goes out", 0), EdgeType::Overrides)]);
    let engine = engine();
    let result = engine.retrieve(&graph, &RetrievalRequest::from_ids(["ghost", "d1", "c1"]));

    assert_eq!(result.diagnostics.seeds_requested, 3);
    assert_eq!(result.diagnostics.missing_seeds, 2);
    assert_eq!(result.bucket(AuthorityLevel::Chunk).ids(), vec!["c1"]);
    assert!(result.contains("d1"));
    assert_eq!(engine.metrics().snapshot().missing_seeds, 2);
}

#[test]
fn only_missing_seeds_yield_empty_result() {
    let graph = star(Vec::new());
    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["ghost"]));
    assert!(result.is_empty());
    assert_eq!(result.diagnostics.missing_seeds, 1);
}

#[test]
fn buckets_are_ordered_by_their_own_keys() {
    let graph = star(vec![
        (decision("d_old", "Old call", "Catalog v1", 0), EdgeType::Overrides),
        (decision("d_new", "New call", "Catalog v2", 500), EdgeType::Overrides),
        (decision("d_mid", "Mid call", "Catalog v1.5", 200), EdgeType::Overrides),
        (gap("g_minor", "Docs", "Catalog docs thin", Severity::Minor), EdgeType::RelatesTo),
        (gap("g_crit", "Auth", "Catalog auth missing", Severity::Critical), EdgeType::RelatesTo),
        (question("q_low", "Rename the catalog?", QuestionStatus::Pending, Priority::Low), EdgeType::RelatesTo),
        (question("q_high", "Who owns the catalog?", QuestionStatus::Pending, Priority::High), EdgeType::RelatesTo),
        (roadmap_item("r_later", "Catalog v3", "Later work", Horizon::Later), EdgeType::SupportedBy),
        (roadmap_item("r_now", "Catalog GA", "Current work", Horizon::Now), EdgeType::SupportedBy),
    ]);
    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));

    assert_eq!(result.bucket(AuthorityLevel::Decision).ids(), vec!["d_new", "d_mid", "d_old"]);
    assert_eq!(result.bucket(AuthorityLevel::Gap).ids(), vec!["g_crit", "g_minor"]);
    assert_eq!(result.bucket(AuthorityLevel::PendingQuestion).ids(), vec!["q_high", "q_low"]);
    assert_eq!(result.bucket(AuthorityLevel::RoadmapItem).ids(), vec!["r_now", "r_later"]);

    let order: Vec<AuthorityLevel> = result.buckets.iter().map(|b| b.level).collect();
    assert_eq!(order[0], AuthorityLevel::Decision);
    assert_eq!(order[6], AuthorityLevel::PendingQuestion);
}

#[test]
fn bucket_caps_truncate_and_report_candidates() {
    let linked = (0..5)
        .map(|i| {
            (
                decision(&format!("d{i}"), "Call", "Catalog choice", i as i64),
                EdgeType::Overrides,
            )
        })
        .collect();
    let graph = star(linked);
    let mut config = LensConfig::default();
    config.assembler.max_per_category = 2;
    let result = RetrievalEngine::new(&config).unwrap().retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));

    let decisions = result.bucket(AuthorityLevel::Decision);
    assert_eq!(decisions.ids(), vec!["d4", "d3"]);
    assert_eq!(decisions.candidates, 5);
    assert!(decisions.truncated());
    assert!(!result.bucket(AuthorityLevel::Chunk).truncated());
}

#[test]
fn topic_filter_drops_nodes_without_the_topic() {
    let graph = star(vec![
        (decision("d_catalog", "Catalog storage", "Catalog moves to S3", 0), EdgeType::Overrides),
        (decision("d_payroll", "Payroll vendor", "Switch payroll provider", 0), EdgeType::Overrides),
    ]);
    let request = RetrievalRequest::from_ids(["c1"]).with_topics(["catalog"]);
    let result = engine().retrieve(&graph, &request);

    assert!(result.contains("d_catalog"));
    assert!(!result.contains("d_payroll"));
    assert_eq!(result.diagnostics.filtered_out, 1);
}

#[test]
fn blank_topics_mean_no_filter() {
    let graph = star(vec![(decision("d_payroll", "Payroll vendor", "Switch payroll provider", 0), EdgeType::Overrides)]);
    let request = RetrievalRequest::from_ids(["c1"]).with_topics(["  "]);
    let result = engine().retrieve(&graph, &request);
    assert!(result.contains("d_payroll"));
    assert_eq!(result.diagnostics.filtered_out, 0);
}

#[test]
fn fallback_scan_finds_unreached_types_by_query_terms() {
    let mut graph = star(Vec::new());
    graph
        .add_node(decision("d_storage", "Object storage", "Artifacts move to object storage", 0))
        .unwrap();

    let engine = engine();
    let without_text = engine.retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));
    assert!(!without_text.contains("d_storage"));
    assert!(without_text.diagnostics.fallback_types.is_empty());

    let request = RetrievalRequest::from_ids(["c1"]).with_query_text("storage plans");
    let with_text = engine.retrieve(&graph, &request);
    assert_eq!(with_text.bucket(AuthorityLevel::Decision).ids(), vec!["d_storage"]);
    assert_eq!(with_text.diagnostics.fallback_types, vec![NodeType::Decision]);
    assert_eq!(engine.metrics().fallback_count(NodeType::Decision), 1);
}

#[test]
fn fallback_hits_respect_the_topic_filter() {
    let mut graph = star(Vec::new());
    graph
        .add_node(decision("d_storage", "Object storage", "Artifacts move to object storage", 0))
        .unwrap();
    let request = RetrievalRequest::from_ids(["c1"])
        .with_query_text("storage")
        .with_topics(["catalog"]);
    let result = engine().retrieve(&graph, &request);
    assert!(!result.contains("d_storage"));
}

#[test]
fn fallback_can_be_disabled() {
    let mut graph = star(Vec::new());
    graph
        .add_node(decision("d_storage", "Object storage", "Artifacts move to object storage", 0))
        .unwrap();
    let mut config = LensConfig::default();
    config.retrieval.fallback_enabled = false;
    let request = RetrievalRequest::from_ids(["c1"]).with_query_text("storage");
    let result = RetrievalEngine::new(&config).unwrap().retrieve(&graph, &request);
    assert!(!result.contains("d_storage"));
}

#[test]
fn stage_b_timeout_keeps_partial_results() {
    let graph = star(vec![(decision("d1", "Ship it", "Catalog goes out", 0), EdgeType::Overrides)]);
    let mut config = LensConfig::default();
    config.retrieval.stage_b_timeout_ms = Some(0);
    let engine = RetrievalEngine::new(&config).unwrap();
    let result = engine.retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));

    assert!(result.diagnostics.timed_out);
    assert_eq!(result.diagnostics.soft_errors.len(), 1);
    assert!(result.contains("c1"));
    assert_eq!(engine.metrics().snapshot().traversal_timeouts, 1);
}

#[test]
fn cycles_do_not_duplicate_entries() {
    let mut graph = star(vec![
        (decision("d1", "A", "Catalog", 0), EdgeType::Overrides),
        (gap("g1", "B", "Catalog", Severity::Moderate), EdgeType::RelatesTo),
    ]);
    graph.add_edge("d1", "g1", EdgeType::Addresses, 0.5).unwrap();
    graph.add_edge("g1", "d1", EdgeType::RelatesTo, 0.5).unwrap();

    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["c1", "c1"]));
    let mut ids: Vec<&str> = result.entries().map(|e| e.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 3);
}

#[test]
fn result_serializes_with_level_names_and_flat_attributes() {
    let graph = star(vec![(gap("g1", "Auth", "Catalog auth missing", Severity::Critical), EdgeType::RelatesTo)]);
    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["buckets"][4]["level"], "gap");
    let entry = &json["buckets"][4]["entries"][0];
    assert_eq!(entry["id"], "g1");
    assert_eq!(entry["severity"], "critical");
    assert!(entry.get("embedding").is_none());

    let back: lens_retrieval::AuthorityResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn stage_a_expansion_stops_at_the_configured_cap() {
    let mut graph = RelationshipGraph::new();
    graph
        .add_node(Node::from(chunk("hub", "doc0", "Catalog hub", axis(DIMS, 0))))
        .unwrap();
    for i in 0..40 {
        let id = format!("leaf{i:02}");
        graph
            .add_node(Node::from(chunk(&id, "doc0", "Catalog leaf", axis(DIMS, 1))))
            .unwrap();
        graph.add_edge("hub", &id, EdgeType::SameSource, 1.0).unwrap();
    }
    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["hub"]));

    assert_eq!(result.diagnostics.expanded_chunks, 30);
    // The remaining leaves are one Stage B hop away from the hub.
    assert_eq!(result.bucket(AuthorityLevel::Chunk).candidates, 41);
}

#[test]
fn temporal_overlap_is_not_followed_during_chunk_expansion() {
    let mut graph = star(Vec::new());
    graph
        .add_node(Node::from(chunk("c_q3", "doc9", "Q3 staffing plan", axis(DIMS, 2))))
        .unwrap();
    graph.add_edge("c1", "c_q3", EdgeType::TemporalOverlap, 1.0).unwrap();

    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));

    assert_eq!(result.diagnostics.expanded_chunks, 1);
    let chunks = &result.bucket(AuthorityLevel::Chunk).entries;
    let temporal = chunks.iter().find(|e| e.id == "c_q3").unwrap();
    assert_eq!(temporal.depth, 1);
}

#[test]
fn stage_b_stops_after_two_hops() {
    let mut graph = star(vec![(gap("g1", "Auth", "Catalog auth", Severity::Critical), EdgeType::RelatesTo)]);
    graph.add_node(gap("g2", "Audit", "Audit log", Severity::Moderate)).unwrap();
    graph.add_node(gap("g3", "Backup", "Backup policy", Severity::Minor)).unwrap();
    graph.add_edge("g1", "g2", EdgeType::RelatesTo, 0.6).unwrap();
    graph.add_edge("g2", "g3", EdgeType::RelatesTo, 0.6).unwrap();

    let result = engine().retrieve(&graph, &RetrievalRequest::from_ids(["c1"]));

    assert_eq!(result.bucket(AuthorityLevel::Gap).ids(), vec!["g1", "g2"]);
    assert!(!result.contains("g3"));
    assert_eq!(result.diagnostics.visited, 3);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut config = LensConfig::default();
    config.embedding.dimensions = 0;
    assert!(matches!(
        RetrievalEngine::new(&config),
        Err(lens_core::LensError::ConfigError(_))
    ));
}
