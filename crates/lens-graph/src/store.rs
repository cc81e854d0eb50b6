//! Swap-on-publish graph store.
//!
//! Readers clone an `Arc` to the current snapshot and traverse it without
//! holding any lock. A rebuild publishes a fresh graph by swapping the
//! pointer; in-flight readers keep the snapshot they started with.

use std::path::Path;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use lens_core::errors::{LensError, LensResult};
use lens_observability::events;

use crate::graph::RelationshipGraph;
use crate::snapshot;

/// An immutable, published graph.
#[derive(Debug)]
pub struct PublishedSnapshot {
    pub graph: RelationshipGraph,
    /// Rebuild timestamp of the snapshot this graph came from.
    pub version: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct GraphStore {
    current: RwLock<Arc<PublishedSnapshot>>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// A store publishing an empty graph.
    pub fn new() -> Self {
        Self::with_graph(RelationshipGraph::new(), "empty")
    }

    pub fn with_graph(graph: RelationshipGraph, version: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(Arc::new(PublishedSnapshot {
                graph,
                version: version.into(),
                published_at: Utc::now(),
            })),
        }
    }

    /// The currently published snapshot.
    pub fn current(&self) -> LensResult<Arc<PublishedSnapshot>> {
        let guard = self
            .current
            .read()
            .map_err(|e| LensError::ConcurrencyError(e.to_string()))?;
        Ok(Arc::clone(&guard))
    }

    /// Publish `graph`, returning the snapshot it replaced.
    pub fn publish(
        &self,
        graph: RelationshipGraph,
        version: impl Into<String>,
    ) -> LensResult<Arc<PublishedSnapshot>> {
        let next = Arc::new(PublishedSnapshot {
            graph,
            version: version.into(),
            published_at: Utc::now(),
        });
        events::snapshot_published(&next.version, next.graph.node_count(), next.graph.edge_count());
        let mut guard = self
            .current
            .write()
            .map_err(|e| LensError::ConcurrencyError(e.to_string()))?;
        Ok(std::mem::replace(&mut *guard, next))
    }

    /// Load the snapshot in `dir` and publish it. On any load failure the
    /// previously published snapshot stays current.
    pub fn load_and_publish(&self, dir: impl AsRef<Path>) -> LensResult<Arc<PublishedSnapshot>> {
        let (graph, manifest) = snapshot::load(dir.as_ref())?;
        self.publish(graph, manifest.version)?;
        self.current()
    }

    /// Load the snapshot the root's `CURRENT` file points at and publish it.
    pub fn load_current_and_publish(&self, root: impl AsRef<Path>) -> LensResult<Arc<PublishedSnapshot>> {
        let (graph, manifest) = snapshot::load_current(root.as_ref())?;
        self.publish(graph, manifest.version)?;
        self.current()
    }
}
