use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OCCURRENCES;

/// One input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub text: String,
    /// How often this ticket text was seen. Always at least 1.
    pub occurrences: u64,
}

impl RawRecord {
    pub fn new(text: impl Into<String>, occurrences: u64) -> Self {
        Self {
            text: text.into(),
            occurrences: occurrences.max(DEFAULT_OCCURRENCES),
        }
    }

    /// A record seen once.
    pub fn single(text: impl Into<String>) -> Self {
        Self::new(text, DEFAULT_OCCURRENCES)
    }
}

/// All raw records sharing one canonical key, folded together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupEntry {
    pub canonical_key: String,
    /// Sum of the folded records' occurrences.
    pub total_occurrences: u64,
    /// Text of the first record seen for this key.
    pub representative_text: String,
}
