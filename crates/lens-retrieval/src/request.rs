use lens_core::traits::SeedHit;
use serde::{Deserialize, Serialize};

/// One retrieval query: the externally ranked seed chunks plus optional filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalRequest {
    pub seeds: Vec<SeedHit>,
    /// Free text of the query. Its terms feed the fallback keyword scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_text: Option<String>,
    /// Keep only nodes whose text mentions one of these. Empty means no filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub include_superseded: bool,
}

impl RetrievalRequest {
    pub fn new(seeds: Vec<SeedHit>) -> Self {
        Self {
            seeds,
            ..Self::default()
        }
    }

    /// Seeds from bare chunk IDs, scored by rank.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let n = ids.len().max(1) as f64;
        Self::new(
            ids.into_iter()
                .enumerate()
                .map(|(rank, id)| SeedHit::new(id, 1.0 - rank as f64 / n))
                .collect(),
        )
    }

    pub fn with_query_text(mut self, text: impl Into<String>) -> Self {
        self.query_text = Some(text.into());
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = Some(topics.into_iter().map(Into::into).collect());
        self
    }

    pub fn including_superseded(mut self) -> Self {
        self.include_superseded = true;
        self
    }

    /// Non-empty topic list, if any.
    pub fn topic_filter(&self) -> Option<&[String]> {
        self.topics
            .as_deref()
            .filter(|t| t.iter().any(|k| !k.trim().is_empty()))
    }
}
