//! Contracts for the external collaborators the core consumes.

mod providers;
mod vector_search;

pub use providers::{IChunkProvider, IEntityProvider};
pub use vector_search::{IVectorSearch, SeedHit};
