//! Load-time integrity checks. Any failure is `SnapshotError::Corrupt`.

use std::collections::HashSet;

use lens_core::errors::SnapshotError;
use lens_core::model::{Node, NodeType};

use super::EdgeRecord;

/// Reports at most this many offending edges in the error message.
const MAX_REPORTED: usize = 5;

/// Every node sits in its own type's file and IDs are globally unique.
pub(crate) fn check_nodes(nodes: &[(NodeType, Vec<Node>)]) -> Result<HashSet<&str>, SnapshotError> {
    let mut ids = HashSet::new();
    for (file_type, file_nodes) in nodes {
        for node in file_nodes {
            if node.node_type() != *file_type {
                return Err(SnapshotError::Corrupt {
                    details: format!(
                        "node {} of type {} found in {} file",
                        node.id,
                        node.node_type(),
                        file_type.snapshot_stem()
                    ),
                });
            }
            if !ids.insert(node.id.as_str()) {
                return Err(SnapshotError::Corrupt {
                    details: format!("duplicate node id {}", node.id),
                });
            }
        }
    }
    Ok(ids)
}

/// Every edge endpoint exists and every weight lies in [0, 1].
pub(crate) fn check_edges(ids: &HashSet<&str>, edges: &[EdgeRecord]) -> Result<(), SnapshotError> {
    let dangling: Vec<String> = edges
        .iter()
        .filter(|e| !ids.contains(e.source_id.as_str()) || !ids.contains(e.target_id.as_str()))
        .map(|e| format!("{} -[{}]-> {}", e.source_id, e.edge_type, e.target_id))
        .collect();
    if !dangling.is_empty() {
        return Err(SnapshotError::Corrupt {
            details: format!(
                "{} dangling edge(s): {}",
                dangling.len(),
                dangling
                    .iter()
                    .take(MAX_REPORTED)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        });
    }
    if let Some(bad) = edges.iter().find(|e| !(0.0..=1.0).contains(&e.weight)) {
        return Err(SnapshotError::Corrupt {
            details: format!(
                "edge {} -> {} has weight {} outside [0, 1]",
                bad.source_id, bad.target_id, bad.weight
            ),
        });
    }
    Ok(())
}
