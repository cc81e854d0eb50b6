//! SyncEngine: runs both builders over the providers' current records,
//! persists the snapshot, and publishes it to the store.

use std::path::PathBuf;

use lens_core::errors::LensResult;
use lens_core::model::Node;
use lens_core::traits::{IChunkProvider, IEntityProvider};
use lens_core::LensConfig;
use lens_graph::{snapshot, GraphStore, RelationshipGraph, SnapshotManifest};
use lens_observability::{events, BuilderMetrics};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chunk_links::ChunkRelationshipBuilder;
use crate::scope::LinkScope;
use crate::unified::UnifiedGraphBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Rebuild from an empty graph.
    Full,
    /// Start from the published graph; only pairs touching new nodes are scored.
    Incremental,
}

impl SyncMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Incremental => "incremental",
        }
    }
}

/// Outcome of one sync pass.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub mode: SyncMode,
    pub nodes: usize,
    pub edges: usize,
    pub metrics: BuilderMetrics,
    pub manifest: SnapshotManifest,
    /// Versioned directory the snapshot was written to.
    pub snapshot_dir: PathBuf,
}

pub struct SyncEngine {
    chunk_links: ChunkRelationshipBuilder,
    unified: UnifiedGraphBuilder,
    snapshot_root: PathBuf,
    keep_versions: usize,
}

impl SyncEngine {
    /// Fails with `ConfigError` when `config` does not validate.
    pub fn new(config: &LensConfig) -> LensResult<Self> {
        config.validate()?;
        Ok(Self {
            chunk_links: ChunkRelationshipBuilder::new(&config.chunk_links),
            unified: UnifiedGraphBuilder::new(&config.unified, config.embedding.dimensions),
            snapshot_root: PathBuf::from(&config.snapshot.dir),
            keep_versions: config.snapshot.keep_versions,
        })
    }

    pub fn with_unified_builder(mut self, unified: UnifiedGraphBuilder) -> Self {
        self.unified = unified;
        self
    }

    /// Build a graph in memory. `base` is extended when given, otherwise the
    /// build starts from empty.
    pub fn build(
        &self,
        base: Option<&RelationshipGraph>,
        chunks: &dyn IChunkProvider,
        entities: &dyn IEntityProvider,
    ) -> LensResult<(RelationshipGraph, BuilderMetrics)> {
        let mut graph = base.cloned().unwrap_or_default();
        let mut metrics = BuilderMetrics::new();

        let records = chunks
            .chunks()?
            .into_iter()
            .map(Node::from)
            .chain(entities.entities()?);
        let inserted = self.unified.upsert_nodes(&mut graph, records, &mut metrics);

        let scope = match base {
            Some(_) => LinkScope::touching(inserted),
            None => LinkScope::All,
        };
        self.chunk_links.apply(&mut graph, &scope, &mut metrics)?;
        self.unified.infer_edges(&mut graph, &scope, &mut metrics)?;

        Ok((graph, metrics))
    }

    /// Build one snapshot, persist it under a new version, then publish it.
    pub fn sync(
        &self,
        store: &GraphStore,
        mode: SyncMode,
        chunks: &dyn IChunkProvider,
        entities: &dyn IEntityProvider,
    ) -> LensResult<SyncReport> {
        let current = match mode {
            SyncMode::Full => None,
            SyncMode::Incremental => Some(store.current()?),
        };
        let (graph, metrics) =
            self.build(current.as_ref().map(|s| &s.graph), chunks, entities)?;
        drop(current);

        let (manifest, snapshot_dir) =
            snapshot::save_versioned(&graph, &self.snapshot_root, self.keep_versions)?;
        let (nodes, edges) = (graph.node_count(), graph.edge_count());
        store.publish(graph, manifest.version.clone())?;

        events::sync_completed(nodes, edges, metrics.chunk_coverage(), mode.as_str());
        info!(
            skipped = metrics.total_skipped(),
            edges_added = metrics.total_edges_added(),
            dangling_references = metrics.dangling_references,
            "sync metrics"
        );

        Ok(SyncReport {
            mode,
            nodes,
            edges,
            metrics,
            manifest,
            snapshot_dir,
        })
    }
}
