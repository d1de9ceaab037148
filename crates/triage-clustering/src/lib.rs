//! # triage-clustering
//!
//! Numeric capabilities behind the pipeline's reducer and clusterer seams:
//! PCA reduction with sample-count clamping, HDBSCAN with a `-1` noise id.

pub mod hdbscan_clusterer;
pub mod reduction;

pub use hdbscan_clusterer::HdbscanClusterer;
pub use reduction::{PcaReducer, ReducerParams};
