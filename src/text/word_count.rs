// Count of meaningful words: tokens longer than two characters that are not
// in the word-count stop list.

use super::lexicon::COUNT_STOP_WORDS;
use super::tokenize::tokenize;

pub fn word_count(text: &str) -> u64 {
    tokenize(text)
        .iter()
        .filter(|word| word.chars().count() > 2 && !COUNT_STOP_WORDS.contains(word.as_str()))
        .count() as u64
}
