//! Batched pairwise cosine similarity.
//!
//! Chunks are split into blocks of `batch_size`. Every block pair `(bi, bj)`
//! with `bi <= bj` is an independent unit of work, so each pair of chunks is
//! compared exactly once no matter the batch size. Block pairs run on the
//! rayon pool when enabled.

use lens_core::model::EdgeType;
use lens_core::text::cosine_similarity;
use rayon::prelude::*;

use super::ChunkView;
use crate::edge_spec::EdgeSpec;
use crate::scope::LinkScope;

pub(super) fn edges(
    views: &[ChunkView<'_>],
    threshold: f64,
    batch_size: usize,
    parallel: bool,
    scope: &LinkScope,
) -> Vec<EdgeSpec> {
    let embedded: Vec<(&str, &[f32])> = views
        .iter()
        .filter_map(|v| v.embedding.map(|e| (v.id, e)))
        .collect();
    let batch_size = batch_size.max(1);
    let blocks = embedded.len().div_ceil(batch_size);

    let block_pairs: Vec<(usize, usize)> = (0..blocks)
        .flat_map(|bi| (bi..blocks).map(move |bj| (bi, bj)))
        .collect();

    let compare = |&(bi, bj): &(usize, usize)| -> Vec<EdgeSpec> {
        let a = block(&embedded, bi, batch_size);
        let b = block(&embedded, bj, batch_size);
        let mut found = Vec::new();
        for (ia, (id_a, emb_a)) in a.iter().enumerate() {
            let start = if bi == bj { ia + 1 } else { 0 };
            for (id_b, emb_b) in &b[start..] {
                if !scope.admits(id_a, id_b) {
                    continue;
                }
                let sim = cosine_similarity(emb_a, emb_b);
                if sim >= threshold {
                    found.push(EdgeSpec::symmetric(
                        id_a,
                        id_b,
                        EdgeType::SimilarTo,
                        sim.clamp(0.0, 1.0),
                    ));
                }
            }
        }
        found
    };

    if parallel {
        block_pairs.par_iter().flat_map_iter(compare).collect()
    } else {
        block_pairs.iter().flat_map(compare).collect()
    }
}

fn block<'v, 'a>(items: &'v [(&'a str, &'a [f32])], index: usize, size: usize) -> &'v [(&'a str, &'a [f32])] {
    let start = index * size;
    let end = (start + size).min(items.len());
    &items[start..end]
}
