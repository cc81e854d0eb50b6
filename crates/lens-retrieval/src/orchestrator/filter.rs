use lens_core::text;
use lens_graph::RelationshipGraph;

use super::stage_b::Visit;

/// Keep visits whose node text mentions any topic. Returns the number removed.
pub(crate) fn retain_topics(graph: &RelationshipGraph, visits: &mut Vec<Visit>, topics: &[String]) -> usize {
    let before = visits.len();
    visits.retain(|v| {
        graph
            .node(&v.id)
            .is_some_and(|n| text::contains_any_keyword(&n.text_fields(), topics))
    });
    before - visits.len()
}
