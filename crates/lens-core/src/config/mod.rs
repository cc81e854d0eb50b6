//! Layered configuration loaded from TOML. Every section is optional.

mod assembler_config;
mod chunk_link_config;
pub mod defaults;
mod embedding_config;
mod observability_config;
mod retrieval_config;
mod snapshot_config;
mod unified_config;

pub use assembler_config::AssemblerConfig;
pub use chunk_link_config::ChunkLinkConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use snapshot_config::SnapshotConfig;
pub use unified_config::{default_link_rules, LinkRule, UnifiedConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{LensError, LensResult};

/// Top-level lensgraph configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub embedding: EmbeddingConfig,
    pub chunk_links: ChunkLinkConfig,
    pub unified: UnifiedConfig,
    pub retrieval: RetrievalConfig,
    pub assembler: AssemblerConfig,
    pub snapshot: SnapshotConfig,
    pub observability: ObservabilityConfig,
}

impl LensConfig {
    /// Parse from a TOML string; missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> LensResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| LensError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the builders or the traversal misbehave.
    pub fn validate(&self) -> LensResult<()> {
        if self.embedding.dimensions == 0 {
            return Err(LensError::ConfigError(
                "embedding.dimensions must be positive".into(),
            ));
        }
        if self.chunk_links.similarity_batch_size == 0 {
            return Err(LensError::ConfigError(
                "chunk_links.similarity_batch_size must be at least 1".into(),
            ));
        }
        if self.snapshot.keep_versions == 0 {
            return Err(LensError::ConfigError(
                "snapshot.keep_versions must be at least 1".into(),
            ));
        }
        check_unit("chunk_links.similarity_threshold", self.chunk_links.similarity_threshold)?;
        for rule in &self.unified.link_rules {
            check_unit(
                &format!("unified.link_rules[{}->{}]", rule.source, rule.target),
                rule.embedding_threshold,
            )?;
        }
        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> LensResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LensError::ConfigError(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}
