//! # lens-graph
//!
//! The relationship graph: a `petgraph::StableGraph` of typed nodes and typed,
//! weighted edges with an ID index and a per-type side table. Snapshots persist
//! one file per node type plus an edge list; `GraphStore` publishes snapshots
//! with swap-pointer semantics.

pub mod graph;
pub mod snapshot;
pub mod store;

pub use graph::{LensEdge, Neighbor, RelationshipGraph, Upsert};
pub use snapshot::SnapshotManifest;
pub use store::{GraphStore, PublishedSnapshot};
