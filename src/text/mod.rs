// Text heuristics: the per-row functions behind the `text_*` UDFs.
//
// Every function here is pure and total: absent or empty input produces a
// defined default instead of an error. Shared state is limited to the
// read-only lexicons and compiled regexes, built once on first use.

pub mod clean;
pub mod keywords;
pub mod language;
pub mod lexicon;
pub mod sentiment;
pub mod similarity;
pub mod strings;
pub mod tokenize;
pub mod word_count;
