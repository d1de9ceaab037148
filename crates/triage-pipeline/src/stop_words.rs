//! Stop-word lists.
//!
//! Negations (`not`, `nicht`, `kein`, ...) are absent from both lists so
//! that "does not start" and "starts" never collapse together.

/// Function words dropped from canonical keys.
pub const NORMALIZER_STOP_WORDS: &[&str] = &[
    "und", "oder", "aber", "the", "a", "an", "is", "ist", "im", "in", "am", "mit", "auf", "zu",
    "für", "von", "der", "die", "das", "den", "des",
];

/// Words that may not start or end an extracted key phrase.
pub const EXTRACTION_STOP_WORDS: &[&str] = &[
    // English
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as", "at",
    "be", "been", "before", "but", "by", "can", "could", "did", "do", "does", "for", "from",
    "had", "has", "have", "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "me", "my", "of", "on", "or", "our", "she", "so", "some", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "to", "too", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "why", "will", "with", "would", "you",
    "your",
    // German
    "aber", "alle", "als", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "da", "dann",
    "das", "dass", "dem", "den", "der", "des", "die", "doch", "du", "ein", "eine", "einem",
    "einen", "einer", "es", "für", "hat", "ich", "ihr", "im", "in", "ist", "ja", "mein", "mir",
    "mit", "nach", "noch", "nur", "oder", "schon", "sein", "sich", "sie", "sind", "so", "um",
    "und", "uns", "vom", "von", "vor", "war", "was", "wie", "wir", "wird", "zu", "zum", "zur",
];
