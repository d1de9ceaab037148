//! KPI computation and top-cluster selection.

use std::collections::{BTreeMap, HashSet};

use triage_core::constants::{synthetic_label, NOISE_CLUSTER_ID, NOISE_LABEL};
use triage_core::errors::{TriageError, TriageResult};
use triage_core::models::{ClusterId, ClusterLabels, ClusterStats, KpiSet, TopClusterRow};
use tracing::info;

/// Full aggregation result: KPIs, top rows, and the per-cluster stats they
/// were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub kpis: KpiSet,
    pub top_clusters: Vec<TopClusterRow>,
    /// Every cluster including noise, ordered by id.
    pub stats: Vec<ClusterStats>,
}

/// Compute the KPI set and the top `top_n` cluster rows.
pub fn aggregate(
    texts: &[String],
    occurrences: &[u64],
    cluster_ids: &[ClusterId],
    cluster_labels: &ClusterLabels,
    top_n: usize,
    include_noise: bool,
) -> TriageResult<(KpiSet, Vec<TopClusterRow>)> {
    let aggregation = summarize(
        texts,
        occurrences,
        cluster_ids,
        cluster_labels,
        top_n,
        include_noise,
    )?;
    Ok((aggregation.kpis, aggregation.top_clusters))
}

/// [`aggregate`], also returning the per-cluster stats.
pub fn summarize(
    texts: &[String],
    occurrences: &[u64],
    cluster_ids: &[ClusterId],
    cluster_labels: &ClusterLabels,
    top_n: usize,
    include_noise: bool,
) -> TriageResult<Aggregation> {
    let stats = cluster_stats(texts, occurrences, cluster_ids, cluster_labels)?;

    let input_rows_total: u64 = occurrences.iter().sum();
    let noise_lines = stats
        .iter()
        .find(|s| s.cluster_id == NOISE_CLUSTER_ID)
        .map_or(0, |s| s.count_total);

    let mut sizes: Vec<u64> = stats
        .iter()
        .filter(|s| s.cluster_id != NOISE_CLUSTER_ID)
        .map(|s| s.count_total)
        .collect();
    sizes.sort_unstable();

    let kpis = KpiSet {
        input_rows_total,
        unique_rows_total: texts.len(),
        cluster_count: sizes.len(),
        noise_lines,
        largest_cluster: sizes.last().copied(),
        smallest_cluster: sizes.first().copied(),
        median_cluster: median(&sizes),
    };

    let top_clusters = top_rows(&stats, top_n, include_noise);
    info!(
        input_rows = kpis.input_rows_total,
        unique_rows = kpis.unique_rows_total,
        clusters = kpis.cluster_count,
        noise_lines = kpis.noise_lines,
        top_rows = top_clusters.len(),
        "aggregation complete"
    );

    Ok(Aggregation {
        kpis,
        top_clusters,
        stats,
    })
}

/// Per-cluster volume statistics, noise included, ordered by cluster id.
pub fn cluster_stats(
    texts: &[String],
    occurrences: &[u64],
    cluster_ids: &[ClusterId],
    cluster_labels: &ClusterLabels,
) -> TriageResult<Vec<ClusterStats>> {
    if occurrences.len() != texts.len() {
        return Err(TriageError::shape_mismatch("aggregate", texts.len(), occurrences.len()));
    }
    if cluster_ids.len() != texts.len() {
        return Err(TriageError::shape_mismatch("aggregate", texts.len(), cluster_ids.len()));
    }

    let input_rows_total: u64 = occurrences.iter().sum();

    let mut groups: BTreeMap<ClusterId, (u64, HashSet<&str>)> = BTreeMap::new();
    for ((text, &count), &id) in texts.iter().zip(occurrences).zip(cluster_ids) {
        let group = groups.entry(id).or_default();
        group.0 += count;
        group.1.insert(text.as_str());
    }

    Ok(groups
        .into_iter()
        .map(|(id, (count_total, distinct))| ClusterStats {
            cluster_id: id,
            label: label_for(cluster_labels, id),
            count_total,
            count_unique: distinct.len(),
            share_percent: share_percent(count_total, input_rows_total),
        })
        .collect())
}

/// Sort by volume descending, ties by ascending id, and keep `top_n`.
fn top_rows(stats: &[ClusterStats], top_n: usize, include_noise: bool) -> Vec<TopClusterRow> {
    let mut rows: Vec<&ClusterStats> = stats
        .iter()
        .filter(|s| include_noise || s.cluster_id != NOISE_CLUSTER_ID)
        .collect();
    rows.sort_by(|a, b| {
        b.count_total
            .cmp(&a.count_total)
            .then(a.cluster_id.cmp(&b.cluster_id))
    });
    rows.into_iter()
        .take(top_n)
        .map(|s| TopClusterRow {
            cluster_id: s.cluster_id,
            label: s.label.clone(),
            total_occurrences: s.count_total,
            share_percent: s.share_percent,
        })
        .collect()
}

fn label_for(labels: &ClusterLabels, id: ClusterId) -> String {
    match labels.get(&id) {
        Some(label) => label.clone(),
        None if id == NOISE_CLUSTER_ID => NOISE_LABEL.to_string(),
        None => synthetic_label(id),
    }
}

fn share_percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Median of sorted values; mean of the middle pair for even counts.
fn median(sorted: &[u64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    })
}
