//! Density clustering with HDBSCAN.
//!
//! Batches smaller than `min_cluster_size`, zero-width batches, and batches of
//! identical points cannot form a cluster and come back as all noise without
//! calling into HDBSCAN.

use std::collections::BTreeSet;

use hdbscan::{Hdbscan, HdbscanHyperParams};
use triage_core::config::ClustererConfig;
use triage_core::constants::NOISE_CLUSTER_ID;
use triage_core::errors::{ClusteringError, TriageResult};
use triage_core::models::ClusterId;
use triage_core::traits::IDensityClusterer;
use tracing::{debug, info};

/// HDBSCAN-backed implementation of [`IDensityClusterer`].
pub struct HdbscanClusterer {
    config: ClustererConfig,
}

impl HdbscanClusterer {
    pub fn new(config: ClustererConfig) -> Self {
        Self { config }
    }

    /// Core-distance neighbor count for `n` points, in `1..n`.
    fn min_samples_for(&self, n: usize) -> usize {
        self.config
            .min_samples
            .unwrap_or(self.config.min_cluster_size)
            .clamp(1, n.saturating_sub(1).max(1))
    }
}

impl IDensityClusterer for HdbscanClusterer {
    fn assign(&self, points: &[Vec<f32>]) -> TriageResult<Vec<ClusterId>> {
        let n = points.len();
        let min_cluster_size = self.config.min_cluster_size.max(2);
        if n < min_cluster_size {
            debug!(
                points = n,
                min_cluster_size, "too few points to form a cluster, all noise"
            );
            return Ok(vec![NOISE_CLUSTER_ID; n]);
        }

        if points[0].is_empty() || points.iter().all(|p| *p == points[0]) {
            debug!(points = n, "points carry no spread, all noise");
            return Ok(vec![NOISE_CLUSTER_ID; n]);
        }

        let min_samples = self.min_samples_for(n);
        let hyper_params = HdbscanHyperParams::builder()
            .min_cluster_size(min_cluster_size)
            .min_samples(min_samples)
            .epsilon(self.config.cluster_selection_epsilon)
            .build();

        let clusterer = Hdbscan::new(points, hyper_params);
        let labels = clusterer
            .cluster()
            .map_err(|e| ClusteringError::ClusteringFailed {
                reason: format!("{e:?}"),
            })?;

        if labels.len() != n {
            return Err(ClusteringError::ClusteringFailed {
                reason: format!("expected {n} labels, got {}", labels.len()),
            }
            .into());
        }

        let clusters: BTreeSet<ClusterId> = labels
            .iter()
            .copied()
            .filter(|&l| l != NOISE_CLUSTER_ID)
            .collect();
        let noise = labels.iter().filter(|&&l| l == NOISE_CLUSTER_ID).count();
        info!(
            points = n,
            clusters = clusters.len(),
            noise,
            min_cluster_size,
            min_samples,
            "clustering complete"
        );
        Ok(labels)
    }

    fn name(&self) -> &str {
        "hdbscan"
    }
}
