use std::collections::BTreeMap;

use lens_core::constants::BOOLEAN_EDGE_WEIGHT;
use lens_core::model::EdgeType;

use super::ChunkView;
use crate::edge_spec::EdgeSpec;
use crate::scope::LinkScope;

pub(super) fn edges(views: &[ChunkView<'_>], scope: &LinkScope) -> Vec<EdgeSpec> {
    let mut by_source: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for v in views {
        by_source.entry(v.source_id).or_default().push(v.id);
    }

    let mut out = Vec::new();
    for ids in by_source.values() {
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                if scope.admits(a, b) {
                    out.push(EdgeSpec::symmetric(
                        a,
                        b,
                        EdgeType::SameSource,
                        BOOLEAN_EDGE_WEIGHT,
                    ));
                }
            }
        }
    }
    out
}
