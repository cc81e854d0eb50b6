//! Direct keyword scan for entity types the traversal never reached.

use std::collections::{BTreeSet, HashSet};

use lens_core::model::NodeType;
use lens_core::text;
use lens_graph::RelationshipGraph;
use lens_observability::events;

use super::stage_b::Visit;

/// Keywords for the scan: the topics plus the terms of the query text.
pub(crate) fn keywords(topics: Option<&[String]>, query_text: Option<&str>) -> Vec<String> {
    let mut set: BTreeSet<String> = BTreeSet::new();
    for t in topics.unwrap_or_default() {
        let t = t.trim().to_lowercase();
        if !t.is_empty() {
            set.insert(t);
        }
    }
    if let Some(q) = query_text {
        set.extend(text::extract_terms(q));
    }
    set.into_iter().collect()
}

/// Entity types with nodes in the graph but none among `visits`.
pub(crate) fn missing_types(graph: &RelationshipGraph, visits: &[Visit]) -> Vec<NodeType> {
    let reached: HashSet<NodeType> = visits
        .iter()
        .filter_map(|v| graph.node(&v.id))
        .map(|n| n.node_type())
        .collect();
    NodeType::ENTITIES
        .into_iter()
        .filter(|t| !reached.contains(t) && graph.count_of_type(*t) > 0)
        .collect()
}

/// Scan one type's index for keyword matches, in index order.
pub(crate) fn scan(graph: &RelationshipGraph, node_type: NodeType, keywords: &[String]) -> Vec<Visit> {
    let found: Vec<Visit> = graph
        .nodes_of_type(node_type)
        .filter(|n| text::contains_any_keyword(&n.text_fields(), keywords))
        .map(|n| Visit {
            id: n.id.clone(),
            depth: 0,
        })
        .collect();
    events::fallback_scan(node_type, found.len());
    found
}
