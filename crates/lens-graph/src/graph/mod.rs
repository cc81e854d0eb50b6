//! `petgraph::StableGraph` wrapper with typed nodes, typed weighted edges,
//! an ID → index map, and an O(1) per-type index.

mod edge;
mod type_index;

use std::collections::{BTreeMap, HashMap, HashSet};

use lens_core::errors::GraphError;
use lens_core::model::{EdgeType, Node, NodeType};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

pub use edge::{LensEdge, Neighbor, Upsert};
use type_index::TypeIndex;

/// The underlying directed multigraph type.
pub type LensStableGraph = StableGraph<Node, LensEdge, Directed>;

/// In-memory directed multigraph with typed nodes/edges.
///
/// Mutation is single-writer; once published through the store the graph is
/// only read, so any number of traversals can share it.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    graph: LensStableGraph,
    node_index: HashMap<String, NodeIndex>,
    type_index: TypeIndex,
    edge_keys: HashSet<(NodeIndex, NodeIndex, EdgeType)>,
}

impl RelationshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Nodes ---

    /// Insert a node, or replace the attributes of an existing node of the same type.
    /// A different type under an existing ID is rejected.
    pub fn add_node(&mut self, node: Node) -> Result<Upsert, GraphError> {
        if let Some(&idx) = self.node_index.get(&node.id) {
            let existing = &mut self.graph[idx];
            let attempted = node.node_type();
            if existing.node_type() != attempted {
                return Err(GraphError::DuplicateNode {
                    id: node.id,
                    existing: existing.node_type(),
                    attempted,
                });
            }
            existing.attributes = node.attributes;
            existing.embedding = node.embedding;
            return Ok(Upsert::Updated);
        }

        let node_type = node.node_type();
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        self.type_index.insert(node_type, idx);
        Ok(Upsert::Inserted)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// All nodes of one type, in insertion order.
    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &Node> + '_ {
        self.type_index
            .get(node_type)
            .iter()
            .map(move |&idx| &self.graph[idx])
    }

    pub fn count_of_type(&self, node_type: NodeType) -> usize {
        self.type_index.get(node_type).len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    // --- Edges ---

    /// Append a typed edge. Both endpoints must exist and the weight must lie in [0, 1].
    /// Identical edges are allowed; builders dedupe with [`Self::contains_edge`].
    pub fn add_edge(
        &mut self,
        source_id: &str,
        target_id: &str,
        edge_type: EdgeType,
        weight: f64,
    ) -> Result<EdgeIndex, GraphError> {
        let src = self.require(source_id)?;
        let dst = self.require(target_id)?;
        if !(0.0..=1.0).contains(&weight) {
            return Err(GraphError::InvalidWeight {
                source_id: source_id.to_string(),
                target_id: target_id.to_string(),
                weight,
            });
        }
        self.edge_keys.insert((src, dst, edge_type));
        Ok(self.graph.add_edge(src, dst, LensEdge { edge_type, weight }))
    }

    /// Does an edge of this type already connect the pair? Symmetric types
    /// match in either orientation.
    pub fn contains_edge(&self, source_id: &str, target_id: &str, edge_type: EdgeType) -> bool {
        let (Some(&src), Some(&dst)) = (self.node_index.get(source_id), self.node_index.get(target_id))
        else {
            return false;
        };
        self.edge_keys.contains(&(src, dst, edge_type))
            || (edge_type.is_symmetric() && self.edge_keys.contains(&(dst, src, edge_type)))
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edge counts keyed by type.
    pub fn edge_counts_by_type(&self) -> BTreeMap<EdgeType, usize> {
        let mut counts = BTreeMap::new();
        for e in self.graph.edge_indices() {
            *counts.entry(self.graph[e].edge_type).or_insert(0) += 1;
        }
        counts
    }

    /// Every edge as `(source, target, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, &LensEdge)> + '_ {
        self.graph.edge_indices().filter_map(move |e| {
            let (src, dst) = self.graph.edge_endpoints(e)?;
            Some((&self.graph[src], &self.graph[dst], &self.graph[e]))
        })
    }

    // --- Adjacency ---

    /// Outgoing adjacency of `id`. Unknown IDs yield an empty list.
    pub fn successors(&self, id: &str) -> Vec<Neighbor<'_>> {
        self.adjacent(id, Direction::Outgoing)
    }

    /// Incoming adjacency of `id`. Unknown IDs yield an empty list.
    pub fn predecessors(&self, id: &str) -> Vec<Neighbor<'_>> {
        self.adjacent(id, Direction::Incoming)
    }

    /// Successors followed by predecessors.
    pub fn neighbors(&self, id: &str) -> Vec<Neighbor<'_>> {
        let mut all = self.successors(id);
        all.extend(self.predecessors(id));
        all
    }

    /// True when the node touches at least one edge to a node of another type.
    pub fn has_cross_type_edge(&self, id: &str) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        let own = node.node_type();
        self.neighbors(id)
            .iter()
            .any(|n| n.node.node_type() != own)
    }

    fn adjacent(&self, id: &str, direction: Direction) -> Vec<Neighbor<'_>> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, direction)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                Neighbor {
                    node: &self.graph[other],
                    edge_type: e.weight().edge_type,
                    weight: e.weight().weight,
                    direction,
                }
            })
            .collect()
    }

    fn require(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })
    }

    // --- Persistence ---

    /// Persist to `dir` as one file per node type plus an edge list.
    pub fn save(
        &self,
        dir: impl AsRef<std::path::Path>,
    ) -> lens_core::LensResult<crate::snapshot::SnapshotManifest> {
        crate::snapshot::save(self, dir.as_ref())
    }

    /// Load and validate a snapshot from `dir`.
    pub fn load(dir: impl AsRef<std::path::Path>) -> lens_core::LensResult<Self> {
        crate::snapshot::load(dir.as_ref()).map(|(graph, _)| graph)
    }
}
