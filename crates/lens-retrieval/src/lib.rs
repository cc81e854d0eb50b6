//! # lens-retrieval
//!
//! Authority-aware retrieval over a published relationship graph.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── IVectorSearch                 (seed chunks, external)
//! ├── RetrievalOrchestrator
//! │   ├── Stage A: chunk expansion  (SIMILAR_TO, SAME_SOURCE, TOPIC_OVERLAP, 1 hop, capped)
//! │   ├── Stage B: unified BFS      (all edge types, both directions, 2 hops, global visited set)
//! │   ├── topic filter              (post-pass)
//! │   └── fallback keyword scan     (types with nodes but no hits)
//! ├── AuthorityAssembler            (7 buckets, per-bucket order, caps, superseded exclusion)
//! └── ISynthesisConsumer            (outbound, external)
//! ```

pub mod assembler;
pub mod consumer;
pub mod engine;
pub mod orchestrator;
pub mod request;

pub use assembler::{AuthorityAssembler, AuthorityBucket, AuthorityResult, RankedEntry, RetrievalDiagnostics};
pub use consumer::ISynthesisConsumer;
pub use engine::RetrievalEngine;
pub use orchestrator::{Expansion, RetrievalOrchestrator, Visit};
pub use request::RetrievalRequest;
