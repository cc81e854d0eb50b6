use lens_core::config::*;
use lens_core::model::{EdgeType, NodeType};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LensConfig::from_toml("").unwrap();

    assert_eq!(config.embedding.dimensions, 384);

    assert_eq!(config.chunk_links.topic_min_shared_terms, 2);
    assert_eq!(config.chunk_links.similarity_threshold, 0.80);
    assert_eq!(config.chunk_links.similarity_batch_size, 100);
    assert!(config.chunk_links.parallel_batches);

    assert_eq!(config.unified.min_term_matches, 2);
    assert!(config.unified.prefilter_candidates);
    assert_eq!(config.unified.link_rules.len(), 8);

    assert_eq!(config.retrieval.max_expanded_chunks, 30);
    assert_eq!(config.retrieval.unified_hops, 2);
    assert!(config.retrieval.stage_b_timeout_ms.is_none());
    assert!(config.retrieval.fallback_enabled);

    assert_eq!(config.assembler.max_per_category, 10);
    assert_eq!(config.assembler.max_chunks, 30);
    assert!(!config.assembler.include_superseded);

    assert_eq!(config.snapshot.keep_versions, 3);

    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[embedding]
dimensions = 768

[chunk_links]
similarity_threshold = 0.9

[retrieval]
stage_b_timeout_ms = 250
"#;
    let config = LensConfig::from_toml(toml).unwrap();
    assert_eq!(config.embedding.dimensions, 768);
    assert_eq!(config.chunk_links.similarity_threshold, 0.9);
    // Non-overridden fields keep defaults
    assert_eq!(config.chunk_links.similarity_batch_size, 100);
    assert_eq!(config.retrieval.stage_b_timeout_ms, Some(250));
    assert_eq!(config.retrieval.max_expanded_chunks, 30);
}

#[test]
fn link_rules_are_configurable() {
    let toml = r#"
[[unified.link_rules]]
source = "roadmap_item"
target = "chunk"
edge_type = "SUPPORTED_BY"
embedding_threshold = 0.5
min_term_matches = 3
"#;
    let config = LensConfig::from_toml(toml).unwrap();
    assert_eq!(config.unified.link_rules.len(), 1);
    let rule = &config.unified.link_rules[0];
    assert_eq!(rule.source, NodeType::RoadmapItem);
    assert_eq!(rule.edge_type, EdgeType::SupportedBy);
    assert_eq!(config.unified.min_terms_for(rule), 3);
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let toml = r#"
[chunk_links]
similarity_threshold = 1.5
"#;
    let err = LensConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("similarity_threshold"));
}

#[test]
fn zero_batch_size_is_rejected() {
    let toml = "[chunk_links]\nsimilarity_batch_size = 0\n";
    assert!(LensConfig::from_toml(toml).is_err());
}

#[test]
fn zero_kept_versions_is_rejected() {
    let toml = "[snapshot]\nkeep_versions = 0\n";
    let err = LensConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("keep_versions"));
}

#[test]
fn config_serde_roundtrip() {
    let config = LensConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = LensConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.embedding.dimensions, config.embedding.dimensions);
    assert_eq!(roundtripped.unified.link_rules, config.unified.link_rules);
}
