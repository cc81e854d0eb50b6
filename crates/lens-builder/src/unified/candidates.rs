use std::collections::HashMap;

use crate::scoring::Profile;

/// Inverted term index over one target population. Every target is indexed,
/// so no part of the population is starved of candidates.
pub(crate) struct CandidateIndex<'p> {
    postings: HashMap<&'p str, Vec<usize>>,
    len: usize,
}

impl<'p> CandidateIndex<'p> {
    pub(crate) fn build(targets: &'p [Profile<'_>]) -> Self {
        let mut postings: HashMap<&'p str, Vec<usize>> = HashMap::new();
        for (i, t) in targets.iter().enumerate() {
            for term in &t.terms {
                postings.entry(term.as_str()).or_default().push(i);
            }
        }
        Self {
            postings,
            len: targets.len(),
        }
    }

    /// Target indices to score for `entity`.
    ///
    /// Populations no larger than `cap` are scored in full. Larger ones are
    /// narrowed to targets sharing at least one term, most shared first,
    /// truncated to `cap`.
    pub(crate) fn candidates(&self, entity: &Profile<'_>, cap: usize, prefilter: bool) -> Vec<usize> {
        if !prefilter || self.len <= cap {
            return (0..self.len).collect();
        }
        let mut shared: HashMap<usize, usize> = HashMap::new();
        for term in &entity.terms {
            if let Some(list) = self.postings.get(term.as_str()) {
                for &i in list {
                    *shared.entry(i).or_default() += 1;
                }
            }
        }
        let mut ranked: Vec<(usize, usize)> = shared.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(cap);
        ranked.into_iter().map(|(i, _)| i).collect()
    }
}
