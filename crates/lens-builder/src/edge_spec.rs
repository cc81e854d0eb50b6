use lens_core::errors::LensResult;
use lens_core::model::EdgeType;
use lens_graph::RelationshipGraph;
use lens_observability::BuilderMetrics;

/// An edge produced by an inference pass, not yet inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source_id: String,
    pub target_id: String,
    pub edge_type: EdgeType,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn directed(source_id: &str, target_id: &str, edge_type: EdgeType, weight: f64) -> Self {
        Self {
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            edge_type,
            weight,
        }
    }

    /// Symmetric edges are stored once per unordered pair, lower ID first.
    pub fn symmetric(a: &str, b: &str, edge_type: EdgeType, weight: f64) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self::directed(lo, hi, edge_type, weight)
    }

    fn key(&self) -> (&str, &str, EdgeType) {
        (&self.source_id, &self.target_id, self.edge_type)
    }
}

/// Sort and drop duplicate `(source, target, type)` triples, keeping the first.
/// Makes the result independent of the order passes or batches finished in.
pub fn normalize(specs: &mut Vec<EdgeSpec>) {
    specs.sort_by(|a, b| {
        a.key()
            .cmp(&b.key())
            .then_with(|| b.weight.total_cmp(&a.weight))
    });
    specs.dedup_by(|a, b| a.key() == b.key());
}

/// Insert every spec the graph does not already hold. Returns the number inserted.
/// Structural failures are logic defects and abort the pass.
pub fn insert_new(
    graph: &mut RelationshipGraph,
    specs: &[EdgeSpec],
    metrics: &mut BuilderMetrics,
) -> LensResult<usize> {
    let mut inserted = 0;
    for spec in specs {
        if graph.contains_edge(&spec.source_id, &spec.target_id, spec.edge_type) {
            continue;
        }
        graph.add_edge(&spec.source_id, &spec.target_id, spec.edge_type, spec.weight)?;
        metrics.record_edge(spec.edge_type);
        inserted += 1;
    }
    Ok(inserted)
}
