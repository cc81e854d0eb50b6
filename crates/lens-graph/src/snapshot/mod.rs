//! Snapshot persistence: one JSON file per node type (`chunk_nodes.json`, …),
//! one edge list, and a manifest with blake3 checksums written last.
//!
//! Load validates checksums and referential integrity before anything is
//! returned; a snapshot with dangling edges is never published.
//!
//! Under a snapshot root, each rebuild lands in its own subdirectory named by
//! its version. The `CURRENT` pointer file is replaced only after the new
//! directory is complete, so an interrupted save leaves the previous snapshot
//! current.

mod manifest;
mod validate;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lens_core::constants::{CURRENT_FILE, EDGES_FILE, MANIFEST_FILE, SNAPSHOT_FORMAT_VERSION};
use lens_core::errors::{LensError, LensResult, SnapshotError};
use lens_core::model::{EdgeType, Node, NodeType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::graph::RelationshipGraph;
pub use manifest::{FileEntry, SnapshotManifest};

/// One persisted edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source_id: String,
    pub target_id: String,
    pub edge_type: EdgeType,
    pub weight: f64,
}

fn node_file(node_type: NodeType) -> String {
    format!("{}.json", node_type.snapshot_stem())
}

fn version_of(created_at: DateTime<Utc>) -> String {
    created_at.format("%Y%m%dT%H%M%S%.6fZ").to_string()
}

/// Persist the graph to `dir`. Output is deterministic for a given graph.
pub fn save(graph: &RelationshipGraph, dir: &Path) -> LensResult<SnapshotManifest> {
    save_at(graph, dir, Utc::now())
}

/// Persist the graph to a new versioned subdirectory of `root`, repoint
/// `CURRENT` at it, then drop all but the newest `keep` versions.
pub fn save_versioned(
    graph: &RelationshipGraph,
    root: &Path,
    keep: usize,
) -> LensResult<(SnapshotManifest, PathBuf)> {
    let mut created_at = Utc::now();
    while root.join(version_of(created_at)).exists() {
        created_at += chrono::Duration::microseconds(1);
    }
    let version = version_of(created_at);
    let dir = root.join(&version);
    let manifest = save_at(graph, &dir, created_at)?;

    write_atomic(root, CURRENT_FILE, version.as_bytes())?;
    prune(root, &version, keep)?;
    Ok((manifest, dir))
}

/// The directory `CURRENT` points at.
pub fn current_dir(root: &Path) -> LensResult<PathBuf> {
    let raw = read(root, CURRENT_FILE)?;
    let version = String::from_utf8(raw)
        .map_err(|e| corrupt(format!("unreadable {CURRENT_FILE}: {e}")))?;
    let version = version.trim();
    if version.is_empty() || version.contains(['/', '\\']) || version.starts_with('.') {
        return Err(corrupt(format!("{CURRENT_FILE} holds no valid version")));
    }
    Ok(root.join(version))
}

/// Load and validate the snapshot `CURRENT` points at.
pub fn load_current(root: &Path) -> LensResult<(RelationshipGraph, SnapshotManifest)> {
    load(&current_dir(root)?)
}

/// Versioned snapshot directories under `root`, oldest first.
pub fn versions(root: &Path) -> LensResult<Vec<String>> {
    let entries = fs::read_dir(root).map_err(|e| LensError::io(root, e))?;
    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LensError::io(root, e))?;
        if entry.path().join(MANIFEST_FILE).is_file() {
            if let Some(name) = entry.file_name().to_str() {
                found.push(name.to_string());
            }
        }
    }
    // Version names are timestamps, so lexical order is age order.
    found.sort();
    Ok(found)
}

fn prune(root: &Path, current: &str, keep: usize) -> LensResult<()> {
    let all = versions(root)?;
    let excess = all.len().saturating_sub(keep.max(1));
    for old in all.iter().take(excess).filter(|v| v.as_str() != current) {
        let path = root.join(old);
        if let Err(e) = fs::remove_dir_all(&path) {
            warn!(dir = %path.display(), error = %e, "could not remove old snapshot");
        }
    }
    Ok(())
}

fn save_at(graph: &RelationshipGraph, dir: &Path, created_at: DateTime<Utc>) -> LensResult<SnapshotManifest> {
    fs::create_dir_all(dir).map_err(|e| LensError::io(dir, e))?;

    let mut files = BTreeMap::new();

    for node_type in NodeType::ALL {
        let mut nodes: Vec<&Node> = graph.nodes_of_type(node_type).collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        let checksum = write_json(dir, &node_file(node_type), &nodes)?;
        files.insert(
            node_file(node_type),
            FileEntry {
                checksum,
                records: nodes.len(),
            },
        );
    }

    let mut edges: Vec<EdgeRecord> = graph
        .edges()
        .map(|(src, dst, edge)| EdgeRecord {
            source_id: src.id.clone(),
            target_id: dst.id.clone(),
            edge_type: edge.edge_type,
            weight: edge.weight,
        })
        .collect();
    edges.sort_by(|a, b| {
        (&a.source_id, &a.target_id, a.edge_type).cmp(&(&b.source_id, &b.target_id, b.edge_type))
    });
    let checksum = write_json(dir, EDGES_FILE, &edges)?;
    files.insert(
        EDGES_FILE.to_string(),
        FileEntry {
            checksum,
            records: edges.len(),
        },
    );

    let manifest = SnapshotManifest {
        format_version: SNAPSHOT_FORMAT_VERSION,
        version: version_of(created_at),
        created_at,
        files,
    };
    write_json(dir, MANIFEST_FILE, &manifest)?;

    info!(
        dir = %dir.display(),
        version = %manifest.version,
        nodes = manifest.node_total(),
        edges = manifest.edge_total(),
        "snapshot saved"
    );
    Ok(manifest)
}

/// Load and validate the snapshot in `dir`.
pub fn load(dir: &Path) -> LensResult<(RelationshipGraph, SnapshotManifest)> {
    let manifest: SnapshotManifest = serde_json::from_slice(&read(dir, MANIFEST_FILE)?)
        .map_err(|e| corrupt(format!("unreadable manifest: {e}")))?;
    if manifest.format_version != SNAPSHOT_FORMAT_VERSION {
        return Err(SnapshotError::VersionMismatch {
            expected: SNAPSHOT_FORMAT_VERSION,
            actual: manifest.format_version,
        }
        .into());
    }

    let mut nodes_by_type = Vec::with_capacity(NodeType::COUNT);
    for node_type in NodeType::ALL {
        let nodes: Vec<Node> = read_verified(dir, &manifest, &node_file(node_type))?;
        nodes_by_type.push((node_type, nodes));
    }
    let edges: Vec<EdgeRecord> = read_verified(dir, &manifest, EDGES_FILE)?;

    let ids = validate::check_nodes(&nodes_by_type)?;
    validate::check_edges(&ids, &edges)?;

    let mut graph = RelationshipGraph::new();
    for (_, nodes) in nodes_by_type {
        for node in nodes {
            graph
                .add_node(node)
                .map_err(|e| corrupt(e.to_string()))?;
        }
    }
    for e in &edges {
        graph
            .add_edge(&e.source_id, &e.target_id, e.edge_type, e.weight)
            .map_err(|err| corrupt(err.to_string()))?;
    }

    debug!(
        version = %manifest.version,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "snapshot loaded"
    );
    Ok((graph, manifest))
}

fn corrupt(details: String) -> LensError {
    SnapshotError::Corrupt { details }.into()
}

fn read(dir: &Path, name: &str) -> LensResult<Vec<u8>> {
    let path = dir.join(name);
    fs::read(&path).map_err(|e| LensError::io(&path, e))
}

fn read_verified<T: for<'de> Deserialize<'de>>(
    dir: &Path,
    manifest: &SnapshotManifest,
    name: &str,
) -> LensResult<Vec<T>> {
    let entry = manifest
        .files
        .get(name)
        .ok_or_else(|| corrupt(format!("manifest has no entry for {name}")))?;
    let bytes = read(dir, name)?;
    let checksum = blake3::hash(&bytes).to_hex().to_string();
    if checksum != entry.checksum {
        return Err(corrupt(format!("checksum mismatch for {name}")));
    }
    let records: Vec<T> = serde_json::from_slice(&bytes)
        .map_err(|e| corrupt(format!("unreadable {name}: {e}")))?;
    if records.len() != entry.records {
        return Err(corrupt(format!(
            "{name} holds {} records, manifest says {}",
            records.len(),
            entry.records
        )));
    }
    Ok(records)
}

/// Write JSON atomically. Returns the blake3 hex digest.
fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> LensResult<String> {
    let bytes = serde_json::to_vec_pretty(value)?;
    write_atomic(dir, name, &bytes)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

/// Write via a temp file and rename.
fn write_atomic(dir: &Path, name: &str, bytes: &[u8]) -> LensResult<()> {
    let path = dir.join(name);
    let tmp = dir.join(format!("{name}.tmp"));
    fs::write(&tmp, bytes).map_err(|e| LensError::io(&tmp, e))?;
    fs::rename(&tmp, &path).map_err(|e| LensError::io(&path, e))
}
