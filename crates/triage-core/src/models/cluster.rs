use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cluster id produced by the density clusterer. `-1` is noise.
pub type ClusterId = i32;

/// Display label per cluster id, ordered by id.
pub type ClusterLabels = BTreeMap<ClusterId, String>;

/// Volume statistics for one cluster, noise included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterStats {
    pub cluster_id: ClusterId,
    pub label: String,
    /// Sum of occurrences of the cluster's entries.
    pub count_total: u64,
    /// Number of distinct entry texts in the cluster.
    pub count_unique: usize,
    /// `count_total` relative to all input rows, in percent.
    pub share_percent: f64,
}
