use serde::{Deserialize, Serialize};

use super::defaults;

/// Density clusterer configuration (`hdbscan:` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClustererConfig {
    /// Smallest group the clusterer reports as a cluster.
    pub min_cluster_size: usize,
    /// Core-distance neighbor count. `None` uses `min_cluster_size`.
    pub min_samples: Option<usize>,
    /// Distance below which clusters are merged.
    pub cluster_selection_epsilon: f64,
}

impl Default for ClustererConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            min_samples: None,
            cluster_selection_epsilon: defaults::DEFAULT_CLUSTER_SELECTION_EPSILON,
        }
    }
}
