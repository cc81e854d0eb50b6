//! Builder and retrieval counters.

mod builder_metrics;
mod retrieval_metrics;

pub use builder_metrics::BuilderMetrics;
pub use retrieval_metrics::{RetrievalMetrics, RetrievalMetricsSnapshot};
