// Frequency-times-length keyword extraction for a single text.
//
// Surviving tokens (not stop words, longer than two characters) are counted
// in order of first occurrence, scored as `frequency * length`, and stably
// sorted by score. Ties therefore keep first-occurrence order.

use std::collections::HashMap;

use super::lexicon::KEYWORD_STOP_WORDS;
use super::tokenize::tokenize;

/// Number of keywords returned by the `text_keywords` function.
pub const DEFAULT_TOP_N: usize = 5;

/// Shortest token (in characters) that can become a keyword.
const MIN_KEYWORD_CHARS: usize = 3;

pub struct KeywordExtractor {
    /// How many top keywords to return
    pub top_n: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl KeywordExtractor {
    /// Every candidate keyword with its score, highest score first.
    pub fn ranked(&self, text: &str) -> Vec<(String, usize)> {
        let mut order: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for word in tokenize(text) {
            if KEYWORD_STOP_WORDS.contains(word.as_str()) {
                continue;
            }
            if word.chars().count() < MIN_KEYWORD_CHARS {
                continue;
            }

            match index.get(&word) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(word.clone(), order.len());
                    order.push((word, 1));
                }
            }
        }

        let mut scored: Vec<(String, usize)> = order
            .into_iter()
            .map(|(word, freq)| {
                let score = freq * word.chars().count();
                (word, score)
            })
            .collect();

        // sort_by is stable, which is what keeps ties in first-seen order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    /// The top keywords joined with commas. Empty when nothing survives.
    pub fn extract(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.ranked(text)
            .into_iter()
            .take(self.top_n)
            .map(|(word, _)| word)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Top five keywords of `text`, comma-joined.
pub fn keywords(text: &str) -> String {
    KeywordExtractor::default().extract(text)
}
