use std::collections::{BTreeMap, HashMap};

use lens_core::model::EdgeType;

use super::ChunkView;
use crate::edge_spec::EdgeSpec;
use crate::scope::LinkScope;

/// Pairs sharing at least `min_shared` key terms, found through an inverted
/// term index so only co-occurring pairs are counted.
pub(super) fn edges(views: &[ChunkView<'_>], min_shared: usize, scope: &LinkScope) -> Vec<EdgeSpec> {
    let min_shared = min_shared.max(1);
    let mut index: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, v) in views.iter().enumerate() {
        for term in &v.key_terms {
            index.entry(term.as_str()).or_default().push(i);
        }
    }

    let mut out = Vec::new();
    for (i, v) in views.iter().enumerate() {
        let mut shared: HashMap<usize, usize> = HashMap::new();
        for term in &v.key_terms {
            if let Some(members) = index.get(term.as_str()) {
                for &j in members.iter().filter(|&&j| j > i) {
                    *shared.entry(j).or_default() += 1;
                }
            }
        }
        for (j, n) in shared {
            if n < min_shared || !scope.admits(v.id, views[j].id) {
                continue;
            }
            let union = v.key_terms.len() + views[j].key_terms.len() - n;
            out.push(EdgeSpec::symmetric(
                v.id,
                views[j].id,
                EdgeType::TopicOverlap,
                n as f64 / union as f64,
            ));
        }
    }
    out
}
