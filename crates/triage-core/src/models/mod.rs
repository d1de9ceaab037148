//! Data model shared by every pipeline stage.

pub mod cluster;
pub mod phrase;
pub mod record;
pub mod report;

pub use cluster::{ClusterId, ClusterLabels, ClusterStats};
pub use phrase::ScoredPhrase;
pub use record::{DedupEntry, RawRecord};
pub use report::{AssignmentRow, KpiSet, Report, TopClusterRow};
