//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

use lens_core::model::NodeType;

/// Log a record skipped during a sync pass.
pub fn record_skipped(record_id: &str, reason: &str) {
    tracing::warn!(
        event = "record_skipped",
        record_id = %record_id,
        reason = %reason,
        "record skipped"
    );
}

/// Log a sync pass completion with its coverage ratio.
pub fn sync_completed(nodes: usize, edges: usize, coverage: f64, mode: &str) {
    tracing::info!(
        event = "sync_completed",
        nodes = nodes,
        edges = edges,
        chunk_coverage = coverage,
        mode = %mode,
        "sync pass completed"
    );
}

/// Log a snapshot swap.
pub fn snapshot_published(version: &str, nodes: usize, edges: usize) {
    tracing::info!(
        event = "snapshot_published",
        version = %version,
        nodes = nodes,
        edges = edges,
        "snapshot published"
    );
}

/// Log a seed chunk absent from the graph.
pub fn seed_missing(chunk_id: &str) {
    tracing::warn!(
        event = "seed_missing",
        chunk_id = %chunk_id,
        "seed chunk not in graph, skipping"
    );
}

/// Log a fallback keyword scan for a type the traversal never reached.
pub fn fallback_scan(node_type: NodeType, matched: usize) {
    tracing::warn!(
        event = "fallback_scan",
        node_type = %node_type,
        matched = matched,
        "traversal reached no nodes of this type, ran keyword fallback"
    );
}

/// Log a stage B timeout. Partial results are kept.
pub fn traversal_timeout(elapsed_ms: u64, visited: usize) {
    tracing::warn!(
        event = "traversal_timeout",
        elapsed_ms = elapsed_ms,
        visited = visited,
        "stage B traversal timed out, returning partial results"
    );
}

/// Log a completed retrieval.
pub fn retrieval_completed(seeds: usize, expanded: usize, visited: usize, returned: usize) {
    tracing::info!(
        event = "retrieval_completed",
        seeds = seeds,
        expanded_chunks = expanded,
        visited = visited,
        returned = returned,
        "retrieval completed"
    );
}
