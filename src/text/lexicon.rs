// Fixed word lists used for sentiment scoring and stop-word filtering.
//
// The sets are built once on first access and never mutated. Keyword
// extraction and word counting use different stop-word lists: the
// word-count list is the smaller of the two.

use std::collections::HashSet;
use std::sync::LazyLock;

pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "perfect",
        "love", "like", "best", "brilliant", "outstanding", "superb", "magnificent", "terrific",
        "marvelous", "happy", "pleased", "satisfied", "delighted", "thrilled",
    ]
    .into_iter()
    .collect()
});

pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "disgusting", "hate", "dislike", "worst",
        "pathetic", "useless", "disappointing", "frustrated", "angry", "sad", "upset", "annoyed",
        "furious", "poor", "inferior", "defective", "broken", "failed",
    ]
    .into_iter()
    .collect()
});

/// Words that invert the polarity of the next scored token.
pub static NEGATION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "nothing", "nowhere", "nobody", "none", "neither", "nor", "cannot",
        "cant", "wont", "dont",
    ]
    .into_iter()
    .collect()
});

/// Stop words excluded from keyword extraction.
pub static KEYWORD_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they",
    ]
    .into_iter()
    .collect()
});

/// Stop words excluded from word counting.
pub static COUNT_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "are", "was", "were",
    ]
    .into_iter()
    .collect()
});

/// Borrowed view over the three sentiment word lists.
///
/// `Lexicon::default()` points at the built-in tables. Tests and callers
/// that want a different vocabulary can build one from their own sets.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon<'a> {
    pub positive: &'a HashSet<&'static str>,
    pub negative: &'a HashSet<&'static str>,
    pub negation: &'a HashSet<&'static str>,
}

impl Default for Lexicon<'static> {
    fn default() -> Self {
        Self {
            positive: &POSITIVE_WORDS,
            negative: &NEGATIVE_WORDS,
            negation: &NEGATION_WORDS,
        }
    }
}

impl Lexicon<'_> {
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negation.contains(word)
    }
}
