use serde::{Deserialize, Serialize};

use super::defaults;

/// Dimensionality reducer configuration (`umap:` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    /// When false the reducer is a passthrough.
    pub enabled: bool,
    /// Neighborhood size. Clamped to `sample_count - 1`.
    pub n_neighbors: usize,
    /// Target dimensionality. Clamped to `sample_count - 1`.
    pub n_components: usize,
    /// Minimum embedding distance.
    pub min_dist: f64,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_REDUCER_ENABLED,
            n_neighbors: defaults::DEFAULT_N_NEIGHBORS,
            n_components: defaults::DEFAULT_N_COMPONENTS,
            min_dist: defaults::DEFAULT_MIN_DIST,
        }
    }
}
