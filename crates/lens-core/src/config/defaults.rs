// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

// --- Chunk links ---
pub const DEFAULT_TOPIC_MIN_SHARED_TERMS: usize = 2;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.80;
pub const DEFAULT_SIMILARITY_BATCH_SIZE: usize = 100;
pub const DEFAULT_PARALLEL_BATCHES: bool = true;

// --- Unified links ---
pub const DEFAULT_MIN_TERM_MATCHES: usize = 2;
pub const DEFAULT_PREFILTER_CANDIDATES: bool = true;
pub const DEFAULT_MAX_CANDIDATES_PER_ENTITY: usize = 1_000;
pub const DEFAULT_SUPPORTED_BY_THRESHOLD: f64 = 0.70;
pub const DEFAULT_OVERRIDES_THRESHOLD: f64 = 0.75;
pub const DEFAULT_VALIDATED_BY_THRESHOLD: f64 = 0.65;
pub const DEFAULT_ADDRESSES_THRESHOLD: f64 = 0.65;
pub const DEFAULT_QUESTION_RELATES_THRESHOLD: f64 = 0.60;
pub const DEFAULT_RELATES_TO_THRESHOLD: f64 = 0.65;

// --- Retrieval ---
pub const DEFAULT_MAX_EXPANDED_CHUNKS: usize = 30;
pub const DEFAULT_CHUNK_EXPANSION_HOPS: usize = 1;
pub const DEFAULT_UNIFIED_HOPS: usize = 2;
pub const DEFAULT_FALLBACK_ENABLED: bool = true;

// --- Assembler ---
pub const DEFAULT_MAX_PER_CATEGORY: usize = 10;
pub const DEFAULT_MAX_CHUNKS: usize = 30;
pub const DEFAULT_INCLUDE_SUPERSEDED: bool = false;

// --- Snapshot ---
pub const DEFAULT_SNAPSHOT_DIR: &str = "lens_snapshot";
pub const DEFAULT_KEEP_VERSIONS: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
