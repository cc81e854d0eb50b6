//! Authority Assembler: seven fixed buckets with per-bucket ordering and caps.

mod result;

use std::cmp::Reverse;

use lens_core::config::AssemblerConfig;
use lens_core::model::{AuthorityLevel, Node, NodeAttributes};
use lens_graph::RelationshipGraph;

use crate::orchestrator::Expansion;
pub use result::{AuthorityBucket, AuthorityResult, RankedEntry, RetrievalDiagnostics};

pub struct AuthorityAssembler {
    config: AssemblerConfig,
}

impl AuthorityAssembler {
    pub fn new(config: &AssemblerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Bucket and cap the orchestrator's output.
    /// Returns the buckets and the number of superseded nodes excluded.
    pub fn assemble(
        &self,
        graph: &RelationshipGraph,
        expansion: &Expansion,
        include_superseded: bool,
    ) -> (Vec<AuthorityBucket>, usize) {
        let include_superseded = include_superseded || self.config.include_superseded;
        let mut grouped: Vec<Vec<(&Node, usize)>> = vec![Vec::new(); AuthorityLevel::COUNT];
        let mut excluded = 0;

        for visit in &expansion.visits {
            let Some(node) = graph.node(&visit.id) else {
                continue;
            };
            let level = node.authority();
            if !include_superseded && hides_when_superseded(level) && node.superseded_by().is_some() {
                excluded += 1;
                continue;
            }
            grouped[level.rank() as usize - 1].push((node, visit.depth));
        }

        let buckets = AuthorityLevel::ALL
            .into_iter()
            .zip(grouped)
            .map(|(level, mut members)| {
                rank(level, &mut members);
                let candidates = members.len();
                members.truncate(self.cap(level));
                AuthorityBucket {
                    level,
                    entries: members
                        .into_iter()
                        .map(|(node, depth)| RankedEntry {
                            id: node.id.clone(),
                            label: node.label(),
                            depth,
                            seed_score: expansion.seed_scores.get(&node.id).copied(),
                            attributes: node.attributes.clone(),
                        })
                        .collect(),
                    candidates,
                }
            })
            .collect();
        (buckets, excluded)
    }

    fn cap(&self, level: AuthorityLevel) -> usize {
        match level {
            AuthorityLevel::Chunk => self.config.max_chunks,
            _ => self.config.max_per_category,
        }
    }
}

/// Superseded content is hidden from these buckets by default.
fn hides_when_superseded(level: AuthorityLevel) -> bool {
    matches!(level, AuthorityLevel::Chunk | AuthorityLevel::AnsweredQuestion)
}

/// Stable per-bucket ordering. Unlisted buckets keep input order.
fn rank(level: AuthorityLevel, members: &mut [(&Node, usize)]) {
    match level {
        AuthorityLevel::Decision => {
            members.sort_by_key(|(n, _)| Reverse(n.created_at()));
        }
        AuthorityLevel::Gap => members.sort_by_key(|(n, _)| match &n.attributes {
            NodeAttributes::Gap(g) => Reverse(g.severity.weight()),
            _ => Reverse(0),
        }),
        AuthorityLevel::PendingQuestion => members.sort_by_key(|(n, _)| match &n.attributes {
            NodeAttributes::Question(q) => Reverse(q.priority.weight()),
            _ => Reverse(0),
        }),
        AuthorityLevel::RoadmapItem => members.sort_by_key(|(n, _)| match &n.attributes {
            NodeAttributes::RoadmapItem(r) => r.horizon.position(),
            _ => u8::MAX,
        }),
        AuthorityLevel::AnsweredQuestion | AuthorityLevel::Assessment | AuthorityLevel::Chunk => {}
    }
}
