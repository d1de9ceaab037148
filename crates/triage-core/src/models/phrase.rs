use serde::{Deserialize, Serialize};

/// A keyword-extraction candidate. Lower score means more relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPhrase {
    pub phrase: String,
    pub score: f64,
}
