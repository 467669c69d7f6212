// Unit tests for the text heuristics.
//
// Tests isolated pure functions through the public API: tokenizer edge
// cases, the sentiment negation window, keyword tie-breaking, Jaccard
// properties, word counting and script-share language detection.

use textkit::text::keywords::{keywords, KeywordExtractor};
use textkit::text::language::{detect_language, Language, ScriptCounts};
use textkit::text::lexicon::Lexicon;
use textkit::text::sentiment::{score_tokens, sentiment, Sentiment, SentimentTally};
use textkit::text::similarity::similarity;
use textkit::text::tokenize::tokenize;
use textkit::text::word_count::word_count;

const SAMPLES: &[&str] = &[
    "This product is amazing!",
    "The quick brown fox jumps over the lazy dog",
    "Terrible service, never again.",
    "hello world",
    "Hello, WORLD! hello?",
    "data_pipeline v2 ships 2024-01-01",
    "你好 world",
    "",
];

// ============================================================
// tokenize
// ============================================================

#[test]
fn tokens_are_lowercase_and_non_empty() {
    for text in SAMPLES {
        for token in tokenize(text) {
            assert!(!token.is_empty(), "empty token from {text:?}");
            assert_eq!(token, token.to_lowercase(), "token {token:?} not lowercase");
        }
    }
}

#[test]
fn underscores_and_digits_stay_inside_tokens() {
    assert_eq!(
        tokenize("data_pipeline v2 ships 2024-01-01"),
        vec!["data_pipeline", "v2", "ships", "2024", "01", "01"]
    );
}

// ============================================================
// sentiment
// ============================================================

#[test]
fn sentiment_examples() {
    assert_eq!(sentiment("good"), Sentiment::Positive);
    assert_eq!(sentiment("not good"), Sentiment::Negative);
    assert_eq!(sentiment("bad good"), Sentiment::Neutral);
    assert_eq!(sentiment("This product is amazing!"), Sentiment::Positive);
    assert_eq!(sentiment("Terrible service, never again."), Sentiment::Negative);
}

#[test]
fn negation_is_consumed_by_any_following_word() {
    // "very" consumes the flag, so "happy" counts as positive
    assert_eq!(sentiment("not very happy"), Sentiment::Positive);
}

#[test]
fn trailing_negation_changes_nothing() {
    let tally = score_tokens(&tokenize("great, not"), &Lexicon::default());
    assert_eq!(tally, SentimentTally { positive: 1, negative: 0 });
}

#[test]
fn negation_flips_negative_words_too() {
    let tally = score_tokens(&tokenize("dont hate, never sad, love"), &Lexicon::default());
    assert_eq!(tally, SentimentTally { positive: 3, negative: 0 });
    assert_eq!(tally.label(), Sentiment::Positive);
}

// ============================================================
// keywords
// ============================================================

#[test]
fn keywords_empty_cases() {
    assert_eq!(keywords(""), "");
    assert_eq!(keywords("the a an"), "");
    assert_eq!(keywords("is it ok?"), "");
}

#[test]
fn keywords_classic_sentence() {
    // quick(5) brown(5) jumps(5) over(4) lazy(4) fox(3) dog(3)
    assert_eq!(
        keywords("The quick brown fox jumps over the lazy dog"),
        "quick,brown,jumps,over,lazy"
    );
}

#[test]
fn repeated_short_word_beats_long_single_word() {
    // cat x4 = 12 beats elephant x1 = 8
    assert_eq!(keywords("elephant cat cat cat cat"), "cat,elephant");
}

#[test]
fn keyword_output_has_no_trailing_separator() {
    let out = keywords("alpha bravo charlie delta echoes foxtrot golfing");
    assert_eq!(out.split(',').count(), 5);
    assert!(!out.ends_with(','));
}

#[test]
fn ranked_keeps_every_candidate() {
    let ranked = KeywordExtractor::default().ranked("alpha bravo charlie delta echoes foxtrot");
    assert_eq!(ranked.len(), 6);
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
}

// ============================================================
// similarity
// ============================================================

#[test]
fn similarity_with_itself_is_one() {
    for text in SAMPLES.iter().filter(|t| !tokenize(t).is_empty()) {
        let score = similarity(text, text);
        assert!((score - 1.0).abs() < f64::EPSILON, "{text:?} scored {score}");
    }
}

#[test]
fn similarity_is_symmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn similarity_with_empty_is_zero() {
    for text in SAMPLES {
        assert_eq!(similarity(text, ""), 0.0);
    }
}

#[test]
fn similarity_stays_in_unit_range() {
    for a in SAMPLES {
        for b in SAMPLES {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?} vs {b:?} scored {score}");
        }
    }
}

// ============================================================
// word_count
// ============================================================

#[test]
fn word_count_examples() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("The quick brown fox jumps over the lazy dog"), 7);
    assert_eq!(word_count("I am ok"), 0);
}

// ============================================================
// detect_language
// ============================================================

#[test]
fn language_examples() {
    assert_eq!(detect_language(""), Language::Unknown);
    assert_eq!(detect_language("Hello World"), Language::English);
    assert_eq!(detect_language("Привет мир"), Language::Unknown);
}

#[test]
fn language_mixed_text_uses_full_length_denominator() {
    // 2 CJK chars out of 8 total is 0.25, below the 0.3 threshold
    let counts = ScriptCounts::of("你好 12345");
    assert_eq!(counts.cjk, 2);
    assert_eq!(counts.total, 8);
    assert_eq!(counts.classify(), Language::Unknown);
}

#[test]
fn language_labels() {
    assert_eq!(Language::Korean.to_string(), "korean");
    assert_eq!(Language::Unknown.as_str(), "unknown");
}
