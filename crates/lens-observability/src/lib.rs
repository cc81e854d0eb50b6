//! # lens-observability
//!
//! Tracing setup and named events, plus the counters operators use to
//! spot builder coverage gaps and retrieval degradation.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{BuilderMetrics, RetrievalMetrics, RetrievalMetricsSnapshot};
pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
