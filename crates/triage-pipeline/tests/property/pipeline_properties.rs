//! Property tests for the text stages: normalization, deduplication,
//! labeling, aggregation.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use triage_core::constants::{MAX_LABEL_CHARS, NOISE_CLUSTER_ID};
use triage_core::models::{ClusterLabels, RawRecord};
use triage_pipeline::{
    aggregate, deduplicate, label_clusters, normalize, Normalizer, NormalizerConfig, YakeExtractor,
};

fn ticket_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9äöüÄÖÜß!?.,:;/ -]{0,40}"
}

fn records() -> impl Strategy<Value = Vec<RawRecord>> {
    prop::collection::vec(
        (prop::sample::select(vec![
            "Login fails",
            "login   FAILS!!",
            "VPN drops",
            "vpn DROPS.",
            "Drucker druckt nicht",
            "Printer jam on floor 3",
        ]), 1u64..20),
        0..30,
    )
    .prop_map(|rows| rows.into_iter().map(|(t, n)| RawRecord::new(t, n)).collect())
}

fn normalizer() -> Normalizer {
    Normalizer::new(NormalizerConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn normalization_is_idempotent(text in ticket_text()) {
        let once = normalize(&text, &[], &[]).unwrap();
        let twice = normalize(&once, &[], &[]).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_keys_are_trimmed_single_spaced_lowercase(text in ticket_text()) {
        let key = normalize(&text, &[], &[]).unwrap();
        prop_assert_eq!(key.trim(), key.as_str());
        prop_assert!(!key.contains("  "));
        prop_assert_eq!(key.to_lowercase(), key);
    }

    #[test]
    fn dedup_preserves_volume(records in records()) {
        let entries = deduplicate(&records, &normalizer());
        let input: u64 = records.iter().map(|r| r.occurrences).sum();
        let output: u64 = entries.iter().map(|e| e.total_occurrences).sum();
        prop_assert_eq!(input, output);

        let keys: BTreeSet<&str> = entries.iter().map(|e| e.canonical_key.as_str()).collect();
        prop_assert_eq!(keys.len(), entries.len());
    }

    #[test]
    fn dedup_totals_ignore_input_order(records in records()) {
        let mut reversed = records.clone();
        reversed.reverse();
        let totals = |rs: &[RawRecord]| -> HashMap<String, u64> {
            deduplicate(rs, &normalizer())
                .into_iter()
                .map(|e| (e.canonical_key, e.total_occurrences))
                .collect()
        };
        prop_assert_eq!(totals(&records), totals(&reversed));
    }

    #[test]
    fn shares_sum_to_one_hundred(
        rows in prop::collection::vec((1u64..50, -1i32..4), 1..40)
    ) {
        let texts: Vec<String> = (0..rows.len()).map(|i| format!("t{i}")).collect();
        let occurrences: Vec<u64> = rows.iter().map(|r| r.0).collect();
        let ids: Vec<i32> = rows.iter().map(|r| r.1).collect();

        let (kpis, top) =
            aggregate(&texts, &occurrences, &ids, &ClusterLabels::new(), usize::MAX, true).unwrap();
        let total: f64 = top.iter().map(|r| r.share_percent).sum();
        prop_assert!((total - 100.0).abs() < 1e-6, "shares sum to {}", total);

        let clustered: u64 = top
            .iter()
            .filter(|r| r.cluster_id != NOISE_CLUSTER_ID)
            .map(|r| r.total_occurrences)
            .sum();
        prop_assert_eq!(clustered + kpis.noise_lines, kpis.input_rows_total);
    }

    #[test]
    fn top_rows_sorted_bounded_and_noise_filtered(
        rows in prop::collection::vec((1u64..50, -1i32..6), 0..40),
        top_n in 0usize..8,
        include_noise in any::<bool>(),
    ) {
        let texts: Vec<String> = (0..rows.len()).map(|i| format!("t{i}")).collect();
        let occurrences: Vec<u64> = rows.iter().map(|r| r.0).collect();
        let ids: Vec<i32> = rows.iter().map(|r| r.1).collect();

        let labels = ClusterLabels::new();
        let (_, top) =
            aggregate(&texts, &occurrences, &ids, &labels, top_n, include_noise).unwrap();
        prop_assert!(top.len() <= top_n);
        prop_assert!(top.windows(2).all(|w| w[0].total_occurrences >= w[1].total_occurrences));
        if !include_noise {
            prop_assert!(top.iter().all(|r| r.cluster_id != NOISE_CLUSTER_ID));
        }
    }

    #[test]
    fn every_cluster_gets_one_bounded_label(
        rows in prop::collection::vec((ticket_text(), -1i32..5), 0..25)
    ) {
        let texts: Vec<String> = rows.iter().map(|r| r.0.clone()).collect();
        let ids: Vec<i32> = rows.iter().map(|r| r.1).collect();
        let labels =
            label_clusters(&texts, &ids, &[], &YakeExtractor::default(), 10, 3).unwrap();

        let distinct: BTreeSet<i32> = ids.iter().copied().collect();
        prop_assert_eq!(labels.keys().copied().collect::<BTreeSet<_>>(), distinct);
        for label in labels.values() {
            prop_assert!(!label.is_empty());
            prop_assert!(label.chars().count() <= MAX_LABEL_CHARS);
        }
    }
}
