//! Stage B: bidirectional BFS over every edge type from the expanded chunks.
//!
//! A single visited set spans the whole traversal, so each node is emitted
//! at most once and cycles cannot prevent termination.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use lens_graph::RelationshipGraph;

/// A node reached by the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: String,
    /// Hops from the nearest expanded chunk. Expanded chunks are depth 0.
    pub depth: usize,
}

pub(crate) struct Traversal {
    pub visits: Vec<Visit>,
    pub timed_out: bool,
    pub elapsed: Duration,
}

pub(crate) fn traverse(
    graph: &RelationshipGraph,
    start: &[String],
    max_hops: usize,
    timeout: Option<Duration>,
) -> Traversal {
    let started = Instant::now();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut visits = Vec::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();

    for id in start {
        if let Some(node) = graph.node(id) {
            if visited.insert(node.id.as_str()) {
                visits.push(Visit {
                    id: node.id.clone(),
                    depth: 0,
                });
                queue.push_back((node.id.as_str(), 0));
            }
        }
    }

    let mut timed_out = false;
    while let Some((id, depth)) = queue.pop_front() {
        if depth >= max_hops {
            continue;
        }
        if timeout.is_some_and(|t| started.elapsed() >= t) {
            timed_out = true;
            break;
        }

        let mut adjacent = graph.neighbors(id);
        adjacent.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.node.id.cmp(&b.node.id))
        });
        for n in adjacent {
            if visited.insert(n.node.id.as_str()) {
                visits.push(Visit {
                    id: n.node.id.clone(),
                    depth: depth + 1,
                });
                queue.push_back((n.node.id.as_str(), depth + 1));
            }
        }
    }

    Traversal {
        visits,
        timed_out,
        elapsed: started.elapsed(),
    }
}
