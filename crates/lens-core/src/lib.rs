//! # lens-core
//!
//! Foundation crate for lensgraph.
//! Defines the typed node/edge model, the authority hierarchy, errors, config,
//! provider traits, and the text helpers shared by builders and retrieval.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LensConfig;
pub use errors::{LensError, LensResult};
pub use model::{AuthorityLevel, Chunk, EdgeType, Node, NodeAttributes, NodeType};
