//! # lens-builder
//!
//! Populates the relationship graph.
//!
//! ## Architecture
//!
//! ```text
//! SyncEngine
//! ├── UnifiedGraphBuilder::upsert_nodes    (validate, upsert, skip bad records)
//! ├── ChunkRelationshipBuilder             (SAME_SOURCE, TOPIC_OVERLAP, SIMILAR_TO, TEMPORAL_OVERLAP)
//! ├── UnifiedGraphBuilder::infer_edges     (link rules + explicit references)
//! │   └── RelevanceScorer chain            (embedding cosine, lexical overlap)
//! └── snapshot save → GraphStore::publish
//! ```

pub mod chunk_links;
pub mod edge_spec;
pub mod engine;
pub mod scope;
pub mod scoring;
pub mod unified;

pub use chunk_links::ChunkRelationshipBuilder;
pub use edge_spec::EdgeSpec;
pub use engine::{SyncEngine, SyncMode, SyncReport};
pub use scope::LinkScope;
pub use unified::UnifiedGraphBuilder;
