//! Fold raw records sharing a canonical key into one entry.

use std::collections::HashMap;

use triage_core::models::{DedupEntry, RawRecord};
use tracing::info;

use crate::normalizer::Normalizer;

/// Deduplicate `records` in input order.
///
/// Entries come back ordered by the first occurrence of their key. The
/// first record seen for a key supplies the representative text; later
/// duplicates only add their occurrences.
pub fn deduplicate(records: &[RawRecord], normalizer: &Normalizer) -> Vec<DedupEntry> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut entries: Vec<DedupEntry> = Vec::new();

    for record in records {
        let key = normalizer.normalize(&record.text);
        match index.get(&key) {
            Some(&i) => entries[i].total_occurrences += record.occurrences,
            None => {
                index.insert(key.clone(), entries.len());
                entries.push(DedupEntry {
                    canonical_key: key,
                    total_occurrences: record.occurrences,
                    representative_text: record.text.clone(),
                });
            }
        }
    }

    info!(
        records = records.len(),
        unique = entries.len(),
        "deduplication complete"
    );
    entries
}
