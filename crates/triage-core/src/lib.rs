//! # triage-core
//!
//! Foundation crate for the ticket triage pipeline.
//! Defines the data model, capability traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TriageConfig;
pub use errors::{TriageError, TriageResult};
pub use models::{ClusterId, ClusterLabels, DedupEntry, KpiSet, RawRecord, TopClusterRow};
