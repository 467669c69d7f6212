// Jaccard similarity over token sets.
//
//   |tokens(a) ∩ tokens(b)| / |tokens(a) ∪ tokens(b)|
//
// Duplicates inside one text collapse before comparison, so repetition does
// not change the score. The measure is symmetric.

use std::collections::HashSet;

use super::tokenize::token_set;

/// Jaccard similarity between two token sets. Returns 0.0 when both are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Similarity between two texts, from 0.0 (no shared words) to 1.0.
///
/// Returns 0.0 when either text is empty.
pub fn similarity(text1: &str, text2: &str) -> f64 {
    if text1.is_empty() || text2.is_empty() {
        return 0.0;
    }
    jaccard(&token_set(text1), &token_set(text2))
}
