//! Shared constants for the ticket triage pipeline.

/// Cluster id the density clusterer reserves for unassigned points.
pub const NOISE_CLUSTER_ID: i32 = -1;

/// Conventional label for the noise cluster when no label was computed.
pub const NOISE_LABEL: &str = "noise";

/// Maximum length of a cluster label, in characters.
pub const MAX_LABEL_CHARS: usize = 60;

/// Prefix of the synthetic label used when nothing better is available.
pub const SYNTHETIC_LABEL_PREFIX: &str = "cluster_";

/// Default occurrence count for rows that carry none.
pub const DEFAULT_OCCURRENCES: u64 = 1;

/// Name of the required input column.
pub const TEXT_COLUMN: &str = "text";

/// Name of the optional occurrence column.
pub const OCCURRENCES_COLUMN: &str = "occurrences";

/// Name of the report sheet holding KPIs and top clusters.
pub const OVERVIEW_SHEET: &str = "Overview";

/// Name of the optional drill-down sheet.
pub const ASSIGNMENTS_SHEET: &str = "Assignments";

/// Build the synthetic `cluster_<id>` label.
pub fn synthetic_label(cluster_id: i32) -> String {
    format!("{SYNTHETIC_LABEL_PREFIX}{cluster_id}")
}

/// Truncate a label to [`MAX_LABEL_CHARS`] characters.
pub fn truncate_label(label: &str) -> String {
    label.chars().take(MAX_LABEL_CHARS).collect()
}
