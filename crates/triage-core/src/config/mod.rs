//! Configuration: one struct per YAML section, defaults in [`defaults`].

pub mod clusterer_config;
pub mod defaults;
pub mod embedding_config;
pub mod labeling_config;
pub mod output_config;
pub mod preprocessing_config;
pub mod reducer_config;
pub mod triage_config;

pub use clusterer_config::ClustererConfig;
pub use embedding_config::EmbeddingConfig;
pub use labeling_config::LabelingConfig;
pub use output_config::OutputConfig;
pub use preprocessing_config::{IgnoreMatch, PreprocessingConfig};
pub use reducer_config::ReducerConfig;
pub use triage_config::TriageConfig;
