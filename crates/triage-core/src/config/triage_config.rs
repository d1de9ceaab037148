//! Top-level triage configuration loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::defaults::KNOWN_PROVIDERS;
use super::{
    ClustererConfig, EmbeddingConfig, LabelingConfig, OutputConfig, PreprocessingConfig,
    ReducerConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
///
/// Unknown keys are ignored. A missing or empty (`labeling:`) section takes
/// its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub embedding: EmbeddingConfig,
    #[serde(rename = "umap", deserialize_with = "null_as_default")]
    pub reducer: ReducerConfig,
    #[serde(rename = "hdbscan", deserialize_with = "null_as_default")]
    pub clusterer: ClustererConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub labeling: LabelingConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub output: OutputConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub preprocessing: PreprocessingConfig,
}

impl TriageConfig {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&content, &path.display().to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(yaml, "<string>")?;
        config.validate()?;
        Ok(config)
    }

    fn parse(yaml: &str, path: &str) -> Result<Self, ConfigError> {
        if is_blank_document(yaml) {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Domain terms protected by the normalizer.
    pub fn domain_terms(&self) -> &[String] {
        self.preprocessing
            .domain_terms
            .as_deref()
            .unwrap_or(&self.labeling.keywords)
    }

    /// Validate value ranges that the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let embedding = &self.embedding;
        if !KNOWN_PROVIDERS.contains(&embedding.provider.as_str()) {
            return Err(invalid(
                "embedding.provider",
                format!("must be one of {}", KNOWN_PROVIDERS.join(", ")),
            ));
        }
        if embedding.batch_size == 0 {
            return Err(invalid("embedding.batch_size", "must be greater than 0"));
        }
        if embedding.n_jobs == 0 {
            return Err(invalid("embedding.n_jobs", "must be greater than 0"));
        }
        if embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }

        let reducer = &self.reducer;
        if reducer.n_neighbors < 2 {
            return Err(invalid("umap.n_neighbors", "must be at least 2"));
        }
        if reducer.n_components == 0 {
            return Err(invalid("umap.n_components", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&reducer.min_dist) {
            return Err(invalid("umap.min_dist", "must be between 0.0 and 1.0"));
        }

        let clusterer = &self.clusterer;
        if clusterer.min_cluster_size < 2 {
            return Err(invalid("hdbscan.min_cluster_size", "must be at least 2"));
        }
        if clusterer.min_samples == Some(0) {
            return Err(invalid("hdbscan.min_samples", "must be greater than 0"));
        }
        if !clusterer.cluster_selection_epsilon.is_finite()
            || clusterer.cluster_selection_epsilon < 0.0
        {
            return Err(invalid(
                "hdbscan.cluster_selection_epsilon",
                "must be a non-negative number",
            ));
        }

        let labeling = &self.labeling;
        if labeling.yake_max_ngram == 0 {
            return Err(invalid("labeling.yake_max_ngram", "must be greater than 0"));
        }
        if let Some(pos) = labeling.keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(invalid(
                "labeling.keywords",
                format!("entry {pos} is empty"),
            ));
        }
        Ok(())
    }

    /// Serialize the config back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}

/// True when the document holds nothing but whitespace and comments.
fn is_blank_document(yaml: &str) -> bool {
    yaml.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_documents_are_detected() {
        assert!(is_blank_document(""));
        assert!(is_blank_document("# only a comment\n\n---\n"));
        assert!(!is_blank_document("output:\n  top_n_clusters: 3\n"));
    }

    #[test]
    fn domain_terms_fall_back_to_keywords() {
        let mut config = TriageConfig::default();
        config.labeling.keywords = vec!["vpn".to_string()];
        assert_eq!(config.domain_terms(), ["vpn".to_string()]);

        config.preprocessing.domain_terms = Some(vec!["sap".to_string()]);
        assert_eq!(config.domain_terms(), ["sap".to_string()]);
    }
}
