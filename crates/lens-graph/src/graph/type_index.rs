//! Per-type side table maintained alongside the adjacency structure.

use lens_core::model::NodeType;
use petgraph::stable_graph::NodeIndex;

#[derive(Debug, Clone, Default)]
pub(crate) struct TypeIndex {
    by_type: [Vec<NodeIndex>; NodeType::COUNT],
}

impl TypeIndex {
    pub(crate) fn insert(&mut self, node_type: NodeType, idx: NodeIndex) {
        self.by_type[node_type.index()].push(idx);
    }

    pub(crate) fn get(&self, node_type: NodeType) -> &[NodeIndex] {
        &self.by_type[node_type.index()]
    }
}
