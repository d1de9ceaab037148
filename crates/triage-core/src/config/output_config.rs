use serde::{Deserialize, Serialize};

use super::defaults;

/// Report configuration (`output:` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rows in the top-cluster table.
    pub top_n_clusters: usize,
    /// Whether the noise cluster may appear in the top-cluster table.
    pub include_noise: bool,
    /// Adds a per-entry drill-down sheet to the workbook.
    pub include_assignments: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_n_clusters: defaults::DEFAULT_TOP_N_CLUSTERS,
            include_noise: defaults::DEFAULT_INCLUDE_NOISE,
            include_assignments: defaults::DEFAULT_INCLUDE_ASSIGNMENTS,
        }
    }
}
