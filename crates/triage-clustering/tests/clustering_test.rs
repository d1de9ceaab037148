use std::collections::BTreeSet;

use proptest::prelude::*;

use triage_clustering::{HdbscanClusterer, PcaReducer};
use triage_core::config::{ClustererConfig, ReducerConfig};
use triage_core::constants::NOISE_CLUSTER_ID;
use triage_core::traits::{IDensityClusterer, IDimensionReducer};

/// `n` points on a small deterministic grid around `(cx, cy)`, padded to `dims`.
fn blob(cx: f32, cy: f32, n: usize, dims: usize) -> Vec<Vec<f32>> {
    (0..n)
        .map(|i| {
            let mut v = vec![0.0; dims];
            v[0] = cx + (i % 4) as f32 * 0.05;
            v[1] = cy + (i / 4) as f32 * 0.05;
            v
        })
        .collect()
}

fn clusterer(min_cluster_size: usize) -> HdbscanClusterer {
    HdbscanClusterer::new(ClustererConfig {
        min_cluster_size,
        min_samples: Some(3),
        cluster_selection_epsilon: 0.0,
    })
}

#[test]
fn separated_groups_get_distinct_clusters() {
    let mut points = blob(0.0, 0.0, 12, 2);
    points.extend(blob(50.0, 50.0, 12, 2));

    let labels = clusterer(4).assign(&points).unwrap();
    assert_eq!(labels.len(), 24);

    let first: BTreeSet<i32> = labels[..12]
        .iter()
        .copied()
        .filter(|&l| l != NOISE_CLUSTER_ID)
        .collect();
    let second: BTreeSet<i32> = labels[12..]
        .iter()
        .copied()
        .filter(|&l| l != NOISE_CLUSTER_ID)
        .collect();
    assert!(!first.is_empty());
    assert!(!second.is_empty());
    assert!(first.is_disjoint(&second), "groups share a cluster: {labels:?}");
}

#[test]
fn lone_point_is_noise() {
    let labels = clusterer(25).assign(&[vec![0.3, 0.7]]).unwrap();
    assert_eq!(labels, vec![NOISE_CLUSTER_ID]);
}

#[test]
fn reducer_projects_to_configured_width() {
    let mut points = blob(0.0, 0.0, 10, 8);
    points.extend(blob(5.0, -5.0, 10, 8));
    for (i, p) in points.iter_mut().enumerate() {
        p[2] = (i % 3) as f32;
        p[5] = (i % 5) as f32 * 0.5;
    }

    let reducer = PcaReducer::new(ReducerConfig {
        n_components: 3,
        ..ReducerConfig::default()
    });
    let reduced = reducer.reduce(points).unwrap();
    assert_eq!(reduced.len(), 20);
    assert!(reduced.iter().all(|v| v.len() == 3));
}

#[test]
fn ragged_vectors_fail_reduction() {
    let reducer = PcaReducer::new(ReducerConfig {
        n_components: 1,
        ..ReducerConfig::default()
    });
    let points = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0], vec![3.0, 2.0, 1.0]];
    assert!(reducer.reduce(points).is_err());
}

#[test]
fn reduced_groups_still_separate() {
    let mut points = blob(0.0, 0.0, 12, 6);
    points.extend(blob(40.0, -40.0, 12, 6));

    let reducer = PcaReducer::new(ReducerConfig {
        n_components: 2,
        ..ReducerConfig::default()
    });
    let reduced = reducer.reduce(points).unwrap();
    let labels = clusterer(4).assign(&reduced).unwrap();

    let clusters: BTreeSet<i32> = labels
        .iter()
        .copied()
        .filter(|&l| l != NOISE_CLUSTER_ID)
        .collect();
    assert!(clusters.len() >= 2, "expected two clusters, got {labels:?}");
}

#[test]
fn constant_batch_survives_reduce_then_cluster() {
    let points = vec![vec![0.0f32; 16]; 5];
    let reducer = PcaReducer::new(ReducerConfig {
        n_components: 2,
        ..ReducerConfig::default()
    });
    let reduced = reducer.reduce(points.clone()).unwrap();
    assert_eq!(reduced, points);

    let labels = HdbscanClusterer::new(ClustererConfig {
        min_cluster_size: 2,
        min_samples: None,
        cluster_selection_epsilon: 0.0,
    })
    .assign(&reduced)
    .unwrap();
    assert_eq!(labels, vec![NOISE_CLUSTER_ID; 5]);
}

#[test]
fn zero_width_batch_is_all_noise() {
    let labels = clusterer(2).assign(&vec![Vec::new(); 4]).unwrap();
    assert_eq!(labels, vec![NOISE_CLUSTER_ID; 4]);
}

proptest! {
    #[test]
    fn assignment_length_matches_input(n in 0usize..6) {
        let points = blob(1.0, 1.0, n, 3);
        let labels = clusterer(8).assign(&points).unwrap();
        prop_assert_eq!(labels.len(), n);
        prop_assert!(labels.iter().all(|&l| l == NOISE_CLUSTER_ID));
    }
}
