//! Split a cluster text block into sentences for keyword extraction.

/// Split text on `.`, `!`, `?` followed by whitespace or end of input.
/// Runs of terminators (`"fails!!"`) close one sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        while let Some(&next) = chars.peek() {
            if !matches!(next, '.' | '!' | '?') {
                break;
            }
            current.push(next);
            chars.next();
        }
        let boundary = chars.peek().map_or(true, |next| next.is_whitespace());
        if boundary {
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
    }
    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
