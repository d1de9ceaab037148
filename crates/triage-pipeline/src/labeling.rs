//! Cluster labeling: configured keywords first, then keyword extraction,
//! then the synthetic `cluster_<id>` name.

use std::collections::BTreeMap;

use triage_core::constants::{synthetic_label, truncate_label};
use triage_core::errors::{TriageError, TriageResult};
use triage_core::models::{ClusterId, ClusterLabels};
use triage_core::traits::IKeywordExtractor;
use tracing::debug;

/// How a label was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    Keyword,
    Extracted,
    Synthetic,
}

/// Label every cluster id in `cluster_ids`, noise included.
///
/// `texts` are the representative (unnormalized) texts, index-aligned with
/// `cluster_ids`.
pub fn label_clusters(
    texts: &[String],
    cluster_ids: &[ClusterId],
    keywords: &[String],
    extractor: &dyn IKeywordExtractor,
    top_k: usize,
    max_ngram: usize,
) -> TriageResult<ClusterLabels> {
    if texts.len() != cluster_ids.len() {
        return Err(TriageError::shape_mismatch("label", texts.len(), cluster_ids.len()));
    }

    let mut groups: BTreeMap<ClusterId, Vec<&str>> = BTreeMap::new();
    for (text, &id) in texts.iter().zip(cluster_ids) {
        groups.entry(id).or_default().push(text.as_str());
    }

    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let mut labels = ClusterLabels::new();
    for (id, members) in groups {
        let block = members.join(" ");
        let (label, source) = label_block(id, &block, &keywords, extractor, top_k, max_ngram);
        debug!(cluster = id, members = members.len(), ?source, label = %label, "cluster labeled");
        labels.insert(id, label);
    }
    Ok(labels)
}

/// Label one cluster's text block. `keywords` must already be lowercased.
pub fn label_block(
    cluster_id: ClusterId,
    block: &str,
    keywords: &[String],
    extractor: &dyn IKeywordExtractor,
    top_k: usize,
    max_ngram: usize,
) -> (String, LabelSource) {
    let lowered = block.to_lowercase();
    if let Some(keyword) = keywords.iter().find(|k| lowered.contains(k.as_str())) {
        return (truncate_label(keyword), LabelSource::Keyword);
    }

    let best = extractor
        .extract(block, top_k, max_ngram)
        .into_iter()
        .map(|p| p.phrase)
        .find(|p| !p.trim().is_empty());
    match best {
        Some(phrase) => (truncate_label(&phrase), LabelSource::Extracted),
        None => (truncate_label(&synthetic_label(cluster_id)), LabelSource::Synthetic),
    }
}
