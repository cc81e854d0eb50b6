use std::collections::HashSet;

/// Which node pairs a pass may score.
#[derive(Debug, Clone, Default)]
pub enum LinkScope {
    /// Every pair.
    #[default]
    All,
    /// Only pairs where at least one side is in the set.
    Touching(HashSet<String>),
}

impl LinkScope {
    pub fn touching(ids: impl IntoIterator<Item = String>) -> Self {
        Self::Touching(ids.into_iter().collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Touching(ids) => ids.contains(id),
        }
    }

    /// May the pair `(a, b)` be scored in this pass?
    pub fn admits(&self, a: &str, b: &str) -> bool {
        self.contains(a) || self.contains(b)
    }

    /// True when nothing can be scored.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Touching(ids) if ids.is_empty())
    }
}
