use crate::errors::TriageResult;
use crate::models::ClusterId;

/// Maps a batch of points to cluster ids, `-1` meaning noise.
pub trait IDensityClusterer {
    /// One id per point, in input order. Must not fail on zero or one point.
    fn assign(&self, points: &[Vec<f32>]) -> TriageResult<Vec<ClusterId>>;

    fn name(&self) -> &str;
}
