//! # triage-pipeline
//!
//! Text stages of the ticket triage pipeline and the orchestrator that runs
//! them around the numeric capabilities.

pub mod aggregation;
pub mod algorithms;
pub mod dedup;
pub mod labeling;
pub mod normalizer;
pub mod pipeline;
pub mod stop_words;

pub use aggregation::{aggregate, cluster_stats, summarize, Aggregation};
pub use algorithms::YakeExtractor;
pub use dedup::deduplicate;
pub use labeling::label_clusters;
pub use normalizer::{normalize, Normalizer, NormalizerConfig};
pub use pipeline::{run_pipeline, PipelineContext, PipelineOutcome};
