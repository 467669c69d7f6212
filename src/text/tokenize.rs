// Word tokenizer shared by the sentiment, keyword, similarity and word-count
// functions.
//
// A token is a maximal run of word characters (Unicode letters, digits and
// `_`) taken from the lowercased input. Everything else is a boundary.

use std::collections::HashSet;

/// True for characters that can appear inside a token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase word tokens, in order of appearance.
///
/// The whole input is lowercased before splitting, so a case mapping that
/// expands into several characters is split on the lowercased form.
/// Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct tokens of a text. Duplicates collapse.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
