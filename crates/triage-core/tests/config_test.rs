use std::io::Write;

use triage_core::config::*;
use triage_core::errors::{ConfigError, TriageErrorCode};

#[test]
fn config_loads_from_empty_yaml_with_all_defaults() {
    let config = TriageConfig::from_yaml("").unwrap();

    // Embedding defaults
    assert_eq!(config.embedding.provider, "hashing");
    assert_eq!(config.embedding.model_name, "paraphrase-multilingual-MiniLM-L12-v2");
    assert_eq!(config.embedding.batch_size, 256);
    assert_eq!(config.embedding.n_jobs, 8);

    // Reducer defaults
    assert!(config.reducer.enabled);
    assert_eq!(config.reducer.n_neighbors, 15);
    assert_eq!(config.reducer.n_components, 15);
    assert_eq!(config.reducer.min_dist, 0.0);

    // Clusterer defaults
    assert_eq!(config.clusterer.min_cluster_size, 25);
    assert_eq!(config.clusterer.min_samples, None);
    assert_eq!(config.clusterer.cluster_selection_epsilon, 0.0);

    // Labeling defaults
    assert!(config.labeling.keywords.is_empty());
    assert_eq!(config.labeling.yake_topk, 10);
    assert_eq!(config.labeling.yake_max_ngram, 3);
    assert!(config.labeling.noise_label.is_none());

    // Output defaults
    assert_eq!(config.output.top_n_clusters, 10);
    assert!(!config.output.include_noise);
    assert!(!config.output.include_assignments);

    // Preprocessing defaults
    assert!(config.preprocessing.ignore_words.is_empty());
    assert_eq!(config.preprocessing.ignore_match, IgnoreMatch::Substring);
}

#[test]
fn config_loads_partial_yaml_with_overrides() {
    let yaml = r#"
embedding:
  batch_size: 32
umap:
  enabled: false
hdbscan:
  min_cluster_size: 5
  min_samples: 2
labeling:
  keywords: ["password reset", "VPN"]
output:
  include_noise: true
"#;
    let config = TriageConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.embedding.batch_size, 32);
    assert_eq!(config.embedding.n_jobs, 8); // default
    assert!(!config.reducer.enabled);
    assert_eq!(config.clusterer.min_cluster_size, 5);
    assert_eq!(config.clusterer.min_samples, Some(2));
    assert_eq!(config.labeling.keywords.len(), 2);
    assert!(config.output.include_noise);
    assert_eq!(config.output.top_n_clusters, 10); // default
    assert_eq!(config.domain_terms().len(), 2);
}

#[test]
fn null_sections_and_null_min_samples_take_defaults() {
    let yaml = "labeling:\nhdbscan:\n  min_samples: null\n";
    let config = TriageConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.labeling.yake_topk, 10);
    assert_eq!(config.clusterer.min_samples, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let yaml = "something_else:\n  foo: 1\noutput:\n  top_n_clusters: 4\n  colour: red\n";
    let config = TriageConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.output.top_n_clusters, 4);
}

#[test]
fn invalid_types_are_parse_errors() {
    let err = TriageConfig::from_yaml("embedding:\n  batch_size: lots\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "{err}");
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err = TriageConfig::from_yaml("output:\n  include_noise: [1, 2]\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));

    let err = TriageConfig::from_yaml("hdbscan:\n  min_cluster_size: -3\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn out_of_range_values_fail_validation() {
    let cases = [
        ("embedding:\n  batch_size: 0\n", "embedding.batch_size"),
        ("embedding:\n  n_jobs: 0\n", "embedding.n_jobs"),
        ("embedding:\n  provider: magic\n", "embedding.provider"),
        ("umap:\n  min_dist: 1.5\n", "umap.min_dist"),
        ("umap:\n  n_neighbors: 1\n", "umap.n_neighbors"),
        ("hdbscan:\n  min_cluster_size: 1\n", "hdbscan.min_cluster_size"),
        ("hdbscan:\n  min_samples: 0\n", "hdbscan.min_samples"),
        ("hdbscan:\n  cluster_selection_epsilon: -0.5\n", "hdbscan.cluster_selection_epsilon"),
        ("labeling:\n  yake_max_ngram: 0\n", "labeling.yake_max_ngram"),
        ("labeling:\n  keywords: ['vpn', '  ']\n", "labeling.keywords"),
    ];
    for (yaml, expected_field) in cases {
        match TriageConfig::from_yaml(yaml) {
            Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation failure for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn whole_word_ignore_mode_parses() {
    let yaml = "preprocessing:\n  ignore_words: ['hallo']\n  ignore_match: whole_word\n  \
                domain_terms: ['sap']\n";
    let config = TriageConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.preprocessing.ignore_match, IgnoreMatch::WholeWord);
    assert_eq!(config.domain_terms(), ["sap".to_string()]);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TriageConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output:\n  top_n_clusters: 3").unwrap();
    let config = TriageConfig::load(file.path()).unwrap();
    assert_eq!(config.output.top_n_clusters, 3);
}

#[test]
fn config_yaml_roundtrip() {
    let mut config = TriageConfig::default();
    config.labeling.keywords = vec!["drucker".to_string()];
    let yaml = config.to_yaml().unwrap();
    let roundtripped = TriageConfig::from_yaml(&yaml).unwrap();
    assert_eq!(roundtripped.labeling.keywords, config.labeling.keywords);
    assert_eq!(roundtripped.clusterer.min_cluster_size, 25);
}
