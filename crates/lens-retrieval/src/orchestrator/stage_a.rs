//! Stage A: expand the seed chunks over intra-chunk edges.

use std::collections::{HashMap, HashSet};

use lens_core::model::{EdgeType, NodeType};
use lens_core::traits::SeedHit;
use lens_graph::RelationshipGraph;
use lens_observability::events;

pub(crate) struct ChunkExpansion {
    /// Seeds first in request order, then neighbors by hop, strongest edge first.
    pub chunks: Vec<String>,
    /// Upstream similarity for chunks that were seeds.
    pub seed_scores: HashMap<String, f64>,
    pub missing_seeds: usize,
}

pub(crate) fn expand(
    graph: &RelationshipGraph,
    seeds: &[SeedHit],
    hops: usize,
    cap: usize,
) -> ChunkExpansion {
    let mut seen: HashSet<String> = HashSet::new();
    let mut chunks = Vec::new();
    let mut seed_scores = HashMap::new();
    let mut missing_seeds = 0;

    for seed in seeds {
        let known = graph
            .node(&seed.chunk_id)
            .is_some_and(|n| n.node_type() == NodeType::Chunk);
        if !known {
            events::seed_missing(&seed.chunk_id);
            missing_seeds += 1;
            continue;
        }
        if seen.insert(seed.chunk_id.clone()) {
            seed_scores.insert(seed.chunk_id.clone(), seed.score);
            if chunks.len() < cap {
                chunks.push(seed.chunk_id.clone());
            }
        }
    }

    let mut frontier = chunks.clone();
    for _ in 0..hops {
        if frontier.is_empty() || chunks.len() >= cap {
            break;
        }
        let mut next = Vec::new();
        for id in &frontier {
            let mut adjacent: Vec<_> = graph
                .neighbors(id)
                .into_iter()
                .filter(|n| {
                    EdgeType::CHUNK_EXPANSION.contains(&n.edge_type)
                        && n.node.node_type() == NodeType::Chunk
                })
                .collect();
            adjacent.sort_by(|a, b| {
                b.weight
                    .total_cmp(&a.weight)
                    .then_with(|| a.node.id.cmp(&b.node.id))
            });
            for n in adjacent {
                if chunks.len() >= cap {
                    break;
                }
                if seen.insert(n.node.id.clone()) {
                    chunks.push(n.node.id.clone());
                    next.push(n.node.id.clone());
                }
            }
        }
        frontier = next;
    }

    ChunkExpansion {
        chunks,
        seed_scores,
        missing_seeds,
    }
}
