/// On-disk snapshot format version. Bumped whenever the file layout changes.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Snapshot manifest file name.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Pointer file naming the current versioned snapshot under a snapshot root.
pub const CURRENT_FILE: &str = "CURRENT";

/// Snapshot edge-list file name.
pub const EDGES_FILE: &str = "edges.json";

/// Edge weight for boolean-signal and explicit-reference edges.
pub const BOOLEAN_EDGE_WEIGHT: f64 = 1.0;

/// Shortest token kept by term extraction.
pub const MIN_TERM_LEN: usize = 3;
