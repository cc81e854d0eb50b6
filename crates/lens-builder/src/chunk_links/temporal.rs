use std::collections::{BTreeMap, BTreeSet};

use lens_core::constants::BOOLEAN_EDGE_WEIGHT;
use lens_core::model::EdgeType;

use super::ChunkView;
use crate::edge_spec::EdgeSpec;
use crate::scope::LinkScope;

pub(super) fn edges(views: &[ChunkView<'_>], scope: &LinkScope) -> Vec<EdgeSpec> {
    let mut by_ref: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, v) in views.iter().enumerate() {
        for r in &v.time_refs {
            by_ref.entry(*r).or_default().push(i);
        }
    }

    let mut pairs = BTreeSet::new();
    for members in by_ref.values() {
        for (k, &i) in members.iter().enumerate() {
            for &j in &members[k + 1..] {
                pairs.insert((i, j));
            }
        }
    }

    pairs
        .into_iter()
        .filter(|&(i, j)| scope.admits(views[i].id, views[j].id))
        .map(|(i, j)| {
            EdgeSpec::symmetric(
                views[i].id,
                views[j].id,
                EdgeType::TemporalOverlap,
                BOOLEAN_EDGE_WEIGHT,
            )
        })
        .collect()
}
