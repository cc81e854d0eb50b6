//! RetrievalEngine: seed set → orchestrator → assembler → caller.
//!
//! Retrieval never fails from the caller's point of view. Internal errors are
//! logged and reported through the result's diagnostics.

use lens_core::errors::LensResult;
use lens_core::traits::IVectorSearch;
use lens_core::LensConfig;
use lens_graph::{GraphStore, RelationshipGraph};
use lens_observability::{events, RetrievalMetrics};
use tracing::{debug, warn};

use crate::assembler::{AuthorityAssembler, AuthorityResult, RetrievalDiagnostics};
use crate::consumer::ISynthesisConsumer;
use crate::orchestrator::RetrievalOrchestrator;
use crate::request::RetrievalRequest;

pub struct RetrievalEngine {
    orchestrator: RetrievalOrchestrator,
    assembler: AuthorityAssembler,
    metrics: RetrievalMetrics,
}

impl RetrievalEngine {
    /// Fails with `ConfigError` when `config` does not validate.
    pub fn new(config: &LensConfig) -> LensResult<Self> {
        config.validate()?;
        Ok(Self {
            orchestrator: RetrievalOrchestrator::new(&config.retrieval),
            assembler: AuthorityAssembler::new(&config.assembler),
            metrics: RetrievalMetrics::new(),
        })
    }

    pub fn metrics(&self) -> &RetrievalMetrics {
        &self.metrics
    }

    /// Run the pipeline against one graph.
    pub fn retrieve(&self, graph: &RelationshipGraph, request: &RetrievalRequest) -> AuthorityResult {
        let expansion = self.orchestrator.expand(graph, request);
        let (buckets, superseded_excluded) =
            self.assembler
                .assemble(graph, &expansion, request.include_superseded);

        let mut diagnostics = RetrievalDiagnostics {
            seeds_requested: request.seeds.len(),
            missing_seeds: expansion.missing_seeds,
            expanded_chunks: expansion.expanded_chunks,
            visited: expansion.traversed,
            filtered_out: expansion.filtered_out,
            superseded_excluded,
            fallback_types: expansion.fallback_types.clone(),
            timed_out: expansion.timeout.is_some(),
            ..RetrievalDiagnostics::default()
        };
        if let Some(err) = &expansion.timeout {
            diagnostics.soft_errors.push(err.to_string());
            self.metrics.record_timeout();
        }
        if expansion.missing_seeds > 0 {
            self.metrics.record_missing_seeds(expansion.missing_seeds);
        }
        for node_type in &expansion.fallback_types {
            self.metrics.record_fallback(*node_type);
        }

        let result = AuthorityResult {
            buckets,
            diagnostics,
        };
        self.metrics.record_query(result.total());
        events::retrieval_completed(
            request.seeds.len(),
            expansion.expanded_chunks,
            expansion.traversed,
            result.total(),
        );
        result
    }

    /// Run the pipeline against the store's current snapshot. The snapshot
    /// is held for the whole query, so a concurrent publish does not affect it.
    pub fn retrieve_from_store(&self, store: &GraphStore, request: &RetrievalRequest) -> AuthorityResult {
        match store.current() {
            Ok(snapshot) => {
                let mut result = self.retrieve(&snapshot.graph, request);
                result.diagnostics.snapshot_version = Some(snapshot.version.clone());
                result
            }
            Err(e) => {
                warn!(error = %e, "no readable snapshot, returning empty result");
                self.metrics.record_query(0);
                AuthorityResult::empty(RetrievalDiagnostics {
                    seeds_requested: request.seeds.len(),
                    soft_errors: vec![e.to_string()],
                    ..RetrievalDiagnostics::default()
                })
            }
        }
    }

    /// Ask the vector search for seeds, then run the pipeline. Seeds already
    /// on `request` are replaced.
    pub fn retrieve_for_query(
        &self,
        store: &GraphStore,
        search: &dyn IVectorSearch,
        query_embedding: &[f32],
        seed_limit: usize,
        mut request: RetrievalRequest,
    ) -> AuthorityResult {
        match search.search(query_embedding, seed_limit) {
            Ok(seeds) => {
                debug!(seeds = seeds.len(), "vector search returned seeds");
                request.seeds = seeds;
                self.retrieve_from_store(store, &request)
            }
            Err(e) => {
                warn!(error = %e, "vector search failed, returning empty result");
                self.metrics.record_query(0);
                AuthorityResult::empty(RetrievalDiagnostics {
                    soft_errors: vec![e.to_string()],
                    ..RetrievalDiagnostics::default()
                })
            }
        }
    }

    /// Hand a result to the synthesis consumer.
    pub fn deliver(&self, consumer: &dyn ISynthesisConsumer, result: &AuthorityResult) -> LensResult<()> {
        consumer.consume(result)
    }
}
