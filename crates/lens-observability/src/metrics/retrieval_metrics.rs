//! Lock-free retrieval counters shared by concurrent queries.

use std::sync::atomic::{AtomicU64, Ordering};

use lens_core::model::NodeType;
use serde::{Deserialize, Serialize};

/// Tracks retrieval health across queries. All counters are atomics so any
/// number of queries can record against one instance without locking.
#[derive(Debug, Default)]
pub struct RetrievalMetrics {
    queries: AtomicU64,
    empty_results: AtomicU64,
    missing_seeds: AtomicU64,
    traversal_timeouts: AtomicU64,
    fallback_activations: [AtomicU64; NodeType::COUNT],
}

/// Point-in-time copy of [`RetrievalMetrics`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalMetricsSnapshot {
    pub queries: u64,
    pub empty_results: u64,
    pub missing_seeds: u64,
    pub traversal_timeouts: u64,
    /// Fallback scans keyed by node type name.
    pub fallback_activations: Vec<(String, u64)>,
}

impl RetrievalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_query(&self, returned: usize) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if returned == 0 {
            self.empty_results.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_missing_seeds(&self, count: usize) {
        self.missing_seeds.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_timeout(&self) {
        self.traversal_timeouts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self, node_type: NodeType) {
        self.fallback_activations[node_type.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn fallback_count(&self, node_type: NodeType) -> u64 {
        self.fallback_activations[node_type.index()].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> RetrievalMetricsSnapshot {
        RetrievalMetricsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            empty_results: self.empty_results.load(Ordering::Relaxed),
            missing_seeds: self.missing_seeds.load(Ordering::Relaxed),
            traversal_timeouts: self.traversal_timeouts.load(Ordering::Relaxed),
            fallback_activations: NodeType::ALL
                .iter()
                .map(|t| (t.as_str().to_string(), self.fallback_count(*t)))
                .filter(|(_, n)| *n > 0)
                .collect(),
        }
    }
}
