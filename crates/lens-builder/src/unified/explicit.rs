//! Edges declared by the records themselves rather than inferred.

use lens_core::constants::BOOLEAN_EDGE_WEIGHT;
use lens_core::model::{EdgeType, NodeAttributes, NodeType};
use lens_graph::RelationshipGraph;
use lens_observability::{events, BuilderMetrics};

use crate::edge_spec::EdgeSpec;

/// Who points at whom for one declared reference.
#[derive(Clone, Copy)]
enum Direction {
    /// referenced -> holder
    FromReferenced,
    /// holder -> referenced
    ToReferenced,
}

pub(crate) fn edges(graph: &RelationshipGraph, metrics: &mut BuilderMetrics) -> Vec<EdgeSpec> {
    use Direction::*;

    let mut out = Vec::new();
    let mut link = |holder: &str,
                    referenced: &str,
                    expected: NodeType,
                    edge_type: EdgeType,
                    direction: Direction| {
        if !resolves(graph, referenced, expected) {
            metrics.dangling_references += 1;
            events::record_skipped(
                holder,
                &format!("{edge_type} reference to unknown {expected} {referenced}"),
            );
            return;
        }
        let (from, to) = match direction {
            FromReferenced => (referenced, holder),
            ToReferenced => (holder, referenced),
        };
        out.push(EdgeSpec::directed(from, to, edge_type, BOOLEAN_EDGE_WEIGHT));
    };

    for node in graph.nodes() {
        let id = node.id.as_str();
        match &node.attributes {
            NodeAttributes::Chunk(c) => {
                if let Some(d) = c.superseded_by.as_deref() {
                    link(id, d, NodeType::Decision, EdgeType::Overrides, FromReferenced);
                }
            }
            NodeAttributes::Question(q) => {
                if let Some(d) = q.answered_by.as_deref() {
                    link(id, d, NodeType::Decision, EdgeType::Addresses, FromReferenced);
                }
                if let Some(d) = q.superseded_by.as_deref() {
                    link(id, d, NodeType::Decision, EdgeType::Overrides, FromReferenced);
                }
            }
            NodeAttributes::RoadmapItem(r) => {
                for dep in r.depends_on.iter().filter(|d| d.as_str() != id) {
                    link(id, dep.as_str(), NodeType::RoadmapItem, EdgeType::DependsOn, ToReferenced);
                }
            }
            NodeAttributes::Decision(d) => {
                for other in d.conflicts_with.iter().filter(|o| o.as_str() != id) {
                    link(
                        id,
                        other.as_str(),
                        NodeType::Decision,
                        EdgeType::ConflictsWith,
                        ToReferenced,
                    );
                }
            }
            NodeAttributes::Assessment(_) | NodeAttributes::Gap(_) => {}
        }
    }
    out
}

fn resolves(graph: &RelationshipGraph, id: &str, expected: NodeType) -> bool {
    graph
        .node(id)
        .is_some_and(|n| n.node_type() == expected)
}
