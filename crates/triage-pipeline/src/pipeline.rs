//! Pipeline orchestrator.
//!
//! normalize → deduplicate → embed → reduce → cluster → label → aggregate.
//! Each stage consumes the complete output of the previous one; stage
//! outputs are length-checked before they are handed on.

use std::time::Instant;

use triage_core::config::TriageConfig;
use triage_core::constants::{truncate_label, NOISE_CLUSTER_ID};
use triage_core::errors::{TriageError, TriageResult};
use triage_core::models::{
    AssignmentRow, ClusterId, ClusterLabels, ClusterStats, DedupEntry, KpiSet, RawRecord, Report,
    TopClusterRow,
};
use triage_core::traits::{
    IDensityClusterer, IDimensionReducer, IEmbeddingProvider, IKeywordExtractor,
};
use tracing::{debug, info};

use crate::aggregation::summarize;
use crate::dedup::deduplicate;
use crate::labeling::label_clusters;
use crate::normalizer::Normalizer;

/// The numeric and text capabilities a run depends on.
pub struct PipelineContext {
    pub embedder: Box<dyn IEmbeddingProvider>,
    pub reducer: Box<dyn IDimensionReducer>,
    pub clusterer: Box<dyn IDensityClusterer>,
    pub extractor: Box<dyn IKeywordExtractor>,
}

impl PipelineContext {
    pub fn new(
        embedder: Box<dyn IEmbeddingProvider>,
        reducer: Box<dyn IDimensionReducer>,
        clusterer: Box<dyn IDensityClusterer>,
        extractor: Box<dyn IKeywordExtractor>,
    ) -> Self {
        Self {
            embedder,
            reducer,
            clusterer,
            extractor,
        }
    }
}

/// Everything a run produced, stage by stage.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub entries: Vec<DedupEntry>,
    /// One cluster id per entry, same order.
    pub assignments: Vec<ClusterId>,
    pub labels: ClusterLabels,
    pub stats: Vec<ClusterStats>,
    pub kpis: KpiSet,
    pub top_clusters: Vec<TopClusterRow>,
}

impl PipelineOutcome {
    /// Build the report handed to a sink. Assignment rows are ordered by
    /// cluster id, then input order.
    pub fn report(&self, include_assignments: bool) -> Report {
        let assignments = if include_assignments {
            let mut rows: Vec<AssignmentRow> = self
                .entries
                .iter()
                .zip(&self.assignments)
                .map(|(entry, &id)| AssignmentRow {
                    cluster_id: id,
                    label: self.label(id),
                    total_occurrences: entry.total_occurrences,
                    representative_text: entry.representative_text.clone(),
                    canonical_key: entry.canonical_key.clone(),
                })
                .collect();
            rows.sort_by_key(|r| r.cluster_id);
            rows
        } else {
            Vec::new()
        };
        Report {
            kpis: self.kpis.clone(),
            top_clusters: self.top_clusters.clone(),
            assignments,
        }
    }

    fn label(&self, id: ClusterId) -> String {
        self.stats
            .iter()
            .find(|s| s.cluster_id == id)
            .map(|s| s.label.clone())
            .unwrap_or_default()
    }
}

/// Run the full pipeline over `records`.
pub fn run_pipeline(
    records: &[RawRecord],
    config: &TriageConfig,
    ctx: &PipelineContext,
) -> TriageResult<PipelineOutcome> {
    let started = Instant::now();

    let normalizer = Normalizer::from_triage_config(config)?;
    let entries = deduplicate(records, &normalizer);

    let keys: Vec<String> = entries.iter().map(|e| e.canonical_key.clone()).collect();
    let vectors = ctx.embedder.embed_batch(&keys)?;
    check_len("embed", entries.len(), vectors.len())?;
    debug!(provider = ctx.embedder.name(), count = vectors.len(), "embedding stage done");

    let reduced = ctx.reducer.reduce(vectors)?;
    check_len("reduce", entries.len(), reduced.len())?;
    debug!(reducer = ctx.reducer.name(), count = reduced.len(), "reduction stage done");

    let assignments = ctx.clusterer.assign(&reduced)?;
    check_len("cluster", entries.len(), assignments.len())?;

    let texts: Vec<String> = entries
        .iter()
        .map(|e| e.representative_text.clone())
        .collect();
    let labeling = &config.labeling;
    let mut labels = label_clusters(
        &texts,
        &assignments,
        &labeling.keywords,
        ctx.extractor.as_ref(),
        labeling.yake_topk,
        labeling.yake_max_ngram,
    )?;
    if let Some(noise_label) = &labeling.noise_label {
        if let Some(label) = labels.get_mut(&NOISE_CLUSTER_ID) {
            *label = truncate_label(noise_label);
        }
    }

    let occurrences: Vec<u64> = entries.iter().map(|e| e.total_occurrences).collect();
    let aggregation = summarize(
        &texts,
        &occurrences,
        &assignments,
        &labels,
        config.output.top_n_clusters,
        config.output.include_noise,
    )?;

    info!(
        records = records.len(),
        unique = entries.len(),
        clusters = aggregation.kpis.cluster_count,
        noise = aggregation.kpis.noise_lines,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "pipeline complete"
    );

    Ok(PipelineOutcome {
        entries,
        assignments,
        labels,
        stats: aggregation.stats,
        kpis: aggregation.kpis,
        top_clusters: aggregation.top_clusters,
    })
}

fn check_len(stage: &'static str, expected: usize, actual: usize) -> TriageResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(TriageError::shape_mismatch(stage, expected, actual))
    }
}
