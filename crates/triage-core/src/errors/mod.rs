//! Error handling for the triage pipeline.
//! One error enum per subsystem, `thiserror` only, aggregated by `TriageError`.

pub mod clustering_error;
pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod input_error;
pub mod pipeline_error;
pub mod report_error;
pub mod triage_error;

pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::TriageErrorCode;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
pub use triage_error::{TriageError, TriageResult};
