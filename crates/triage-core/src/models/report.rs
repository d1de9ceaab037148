use serde::{Deserialize, Serialize};

use super::ClusterId;

/// Summary statistics over the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    /// Ticket volume before deduplication.
    pub input_rows_total: u64,
    /// Entries after deduplication.
    pub unique_rows_total: usize,
    /// Distinct cluster ids, noise excluded.
    pub cluster_count: usize,
    /// Ticket volume the clusterer left unassigned.
    pub noise_lines: u64,
    pub largest_cluster: Option<u64>,
    pub smallest_cluster: Option<u64>,
    pub median_cluster: Option<f64>,
}

impl KpiSet {
    /// KPI rows in report order. `None` marks an undefined value.
    pub fn metrics(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("input_rows_total", Some(self.input_rows_total as f64)),
            ("unique_rows_total", Some(self.unique_rows_total as f64)),
            ("cluster_count", Some(self.cluster_count as f64)),
            ("noise_lines", Some(self.noise_lines as f64)),
            ("largest_cluster", self.largest_cluster.map(|v| v as f64)),
            ("smallest_cluster", self.smallest_cluster.map(|v| v as f64)),
            ("median_cluster", self.median_cluster),
        ]
    }
}

/// One line of the top-cluster table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopClusterRow {
    pub cluster_id: ClusterId,
    pub label: String,
    pub total_occurrences: u64,
    pub share_percent: f64,
}

/// One deduplicated entry with its cluster, for the drill-down sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub cluster_id: ClusterId,
    pub label: String,
    pub total_occurrences: u64,
    pub representative_text: String,
    pub canonical_key: String,
}

/// Everything a report sink renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub kpis: KpiSet,
    pub top_clusters: Vec<TopClusterRow>,
    /// Empty unless the drill-down sheet was requested.
    pub assignments: Vec<AssignmentRow>,
}
