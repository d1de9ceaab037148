//! Dimensionality reduction: principal component projection.
//!
//! Parameters are clamped to `sample_count - 1`. Batches of zero or one
//! vector, batches of identical vectors, a disabled reducer, a target width at
//! or above the input width, and projections that keep no component all pass
//! through unchanged.

use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_reduction::Pca;
use ndarray::Array2;
use triage_core::config::ReducerConfig;
use triage_core::errors::{ClusteringError, TriageResult};
use triage_core::traits::IDimensionReducer;
use tracing::{debug, info};

/// Reducer parameters after clamping to the batch size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducerParams {
    pub n_neighbors: usize,
    pub n_components: usize,
    pub min_dist: f64,
}

impl ReducerParams {
    /// Clamp the configured parameters for `sample_count` vectors.
    /// `None` when the batch is too small to reduce.
    pub fn for_samples(config: &ReducerConfig, sample_count: usize) -> Option<Self> {
        if sample_count <= 1 {
            return None;
        }
        let limit = sample_count - 1;
        Some(Self {
            n_neighbors: config.n_neighbors.min(limit),
            n_components: config.n_components.min(limit),
            min_dist: config.min_dist,
        })
    }
}

/// PCA-backed implementation of [`IDimensionReducer`].
///
/// Only `n_components` shapes the projection; `n_neighbors` and `min_dist`
/// are clamped and logged for parity with neighbor-graph reducers.
pub struct PcaReducer {
    config: ReducerConfig,
}

impl PcaReducer {
    pub fn new(config: ReducerConfig) -> Self {
        Self { config }
    }

    /// Project onto the first `n_components` principal components.
    /// `None` when the batch has no variance left to project.
    fn project(vectors: &[Vec<f32>], n_components: usize) -> TriageResult<Option<Vec<Vec<f32>>>> {
        let rows = vectors.len();
        let cols = vectors[0].len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != cols) {
            return Err(ClusteringError::ReductionFailed {
                reason: format!("ragged input: expected width {cols}, got {}", bad.len()),
            }
            .into());
        }

        let flat: Vec<f64> = vectors.iter().flatten().map(|&x| x as f64).collect();
        let records = Array2::from_shape_vec((rows, cols), flat).map_err(|e| {
            ClusteringError::ReductionFailed {
                reason: e.to_string(),
            }
        })?;
        let dataset = DatasetBase::from(records);

        let pca = Pca::params(n_components)
            .fit(&dataset)
            .map_err(|e| ClusteringError::ReductionFailed {
                reason: e.to_string(),
            })?;
        let projected: Array2<f64> = pca.predict(dataset.records());
        if projected.ncols() == 0 {
            return Ok(None);
        }

        Ok(Some(
            projected
                .outer_iter()
                .map(|row| row.iter().map(|&x| x as f32).collect())
                .collect(),
        ))
    }
}

impl IDimensionReducer for PcaReducer {
    fn reduce(&self, vectors: Vec<Vec<f32>>) -> TriageResult<Vec<Vec<f32>>> {
        if !self.config.enabled {
            debug!("reducer disabled, passing vectors through");
            return Ok(vectors);
        }
        let Some(params) = ReducerParams::for_samples(&self.config, vectors.len()) else {
            debug!(samples = vectors.len(), "degenerate batch, passing vectors through");
            return Ok(vectors);
        };

        let input_dims = vectors[0].len();
        if params.n_components >= input_dims {
            debug!(
                n_components = params.n_components,
                input_dims, "target width not below input width, passing vectors through"
            );
            return Ok(vectors);
        }

        if vectors.iter().all(|v| *v == vectors[0]) {
            debug!(samples = vectors.len(), "identical vectors, passing through");
            return Ok(vectors);
        }

        let Some(reduced) = Self::project(&vectors, params.n_components)? else {
            debug!(
                samples = vectors.len(),
                "projection has no components, passing vectors through"
            );
            return Ok(vectors);
        };
        info!(
            samples = reduced.len(),
            from = input_dims,
            to = reduced[0].len(),
            n_neighbors = params.n_neighbors,
            min_dist = params.min_dist,
            "embeddings reduced"
        );
        Ok(reduced)
    }

    fn name(&self) -> &str {
        "pca"
    }
}
