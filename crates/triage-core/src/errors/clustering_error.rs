/// Dimensionality reduction and density clustering errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("dimensionality reduction failed: {reason}")]
    ReductionFailed { reason: String },

    #[error("clustering failed: {reason}")]
    ClusteringFailed { reason: String },
}

impl super::TriageErrorCode for ClusteringError {
    fn error_code(&self) -> &'static str {
        super::error_code::CLUSTERING_ERROR
    }
}
