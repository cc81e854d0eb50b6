//! Typed node/edge model and the authority hierarchy.

mod attributes;
mod authority;
mod chunk;
mod edge_type;
mod node;
mod node_type;

pub use attributes::{
    AssessmentAttributes, ChunkAttributes, DecisionAttributes, GapAttributes, Horizon, Priority,
    QuestionAttributes, QuestionStatus, RoadmapItemAttributes, Severity,
};
pub use authority::AuthorityLevel;
pub use chunk::Chunk;
pub use edge_type::EdgeType;
pub use node::{Node, NodeAttributes};
pub use node_type::NodeType;
