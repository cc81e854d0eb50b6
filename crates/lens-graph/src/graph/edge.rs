use lens_core::model::{EdgeType, Node};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// Weight on a graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensEdge {
    pub edge_type: EdgeType,
    /// Similarity/overlap score that triggered creation, or 1.0 for boolean signals.
    pub weight: f64,
}

/// One adjacency entry as seen from a given node.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub node: &'a Node,
    pub edge_type: EdgeType,
    pub weight: f64,
    /// `Outgoing` for successors, `Incoming` for predecessors.
    pub direction: Direction,
}

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

impl Upsert {
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}
