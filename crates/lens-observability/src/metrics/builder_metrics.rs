//! Per-sync-pass counters: skipped records, edges by type, chunk coverage.

use std::collections::BTreeMap;

use lens_core::model::EdgeType;
use serde::{Deserialize, Serialize};

/// Counters collected during one sync pass. Builders run single-threaded,
/// so plain fields suffice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderMetrics {
    /// Nodes upserted in this pass.
    pub nodes_upserted: u64,
    /// Nodes that did not exist before this pass.
    pub new_nodes: u64,
    /// Skipped records keyed by reason.
    pub records_skipped: BTreeMap<String, u64>,
    /// Edges added keyed by edge type.
    pub edges_added: BTreeMap<EdgeType, u64>,
    /// Explicit references to IDs that are not in the graph.
    pub dangling_references: u64,
    /// Chunks considered by cross-type inference.
    pub chunks_processed: u64,
    /// Chunks with at least one cross-type edge after the pass.
    pub chunks_linked: u64,
    /// Total chunks in the graph after the pass.
    pub chunks_total: u64,
}

impl BuilderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skip(&mut self, reason: &str) {
        *self.records_skipped.entry(reason.to_string()).or_default() += 1;
    }

    pub fn record_edge(&mut self, edge_type: EdgeType) {
        *self.edges_added.entry(edge_type).or_default() += 1;
    }

    pub fn total_skipped(&self) -> u64 {
        self.records_skipped.values().sum()
    }

    pub fn total_edges_added(&self) -> u64 {
        self.edges_added.values().sum()
    }

    pub fn edges_of(&self, edge_type: EdgeType) -> u64 {
        self.edges_added.get(&edge_type).copied().unwrap_or(0)
    }

    /// Fraction of chunks reachable from at least one higher-order node.
    /// A sudden drop is the signature of a partial-population sync.
    pub fn chunk_coverage(&self) -> f64 {
        if self.chunks_total == 0 {
            return 0.0;
        }
        self.chunks_linked as f64 / self.chunks_total as f64
    }
}
