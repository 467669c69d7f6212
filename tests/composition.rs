// Composition tests: verifying that the functions chain together the way
// an engine query would use them.
//
// These tests exercise the data flow between modules:
//   clean -> sentiment / keywords / word count / language
//   rows -> registry -> rendered output
// without touching the filesystem or the process environment.

use textkit::config::OutputFormat;
use textkit::output::render_value;
use textkit::text::clean::clean;
use textkit::text::keywords::keywords;
use textkit::text::language::{detect_language, Language};
use textkit::text::sentiment::{sentiment, Sentiment};
use textkit::text::similarity::similarity;
use textkit::text::word_count::word_count;
use textkit::udf::batch::{apply_rows, BatchOptions};
use textkit::udf::{invoke, lookup, Value};

const REVIEW_HTML: &str =
    "<div><p>Absolutely <b>amazing</b> blender &amp; not disappointing at all!</p>\
     <p>Questions? Email help@blendco.com or call +1 (800) 555-0199.</p>\
     <p>More at https://blendco.com/support?id=42</p></div>";

// ============================================================
// Chain: clean -> heuristics
// ============================================================

#[test]
fn cleaned_review_keeps_its_meaning() {
    let cleaned = clean(REVIEW_HTML, "all");

    assert!(!cleaned.contains('<'), "tags survived: {cleaned}");
    assert!(!cleaned.contains("help@"), "email survived: {cleaned}");
    assert!(!cleaned.contains("555"), "phone survived: {cleaned}");
    assert!(!cleaned.contains("https"), "url survived: {cleaned}");
    assert!(!cleaned.contains("  "), "whitespace not collapsed: {cleaned}");
    assert_eq!(cleaned, cleaned.trim());

    // amazing (+), "not disappointing" (+)
    assert_eq!(sentiment(&cleaned), Sentiment::Positive);
    assert_eq!(sentiment(REVIEW_HTML), Sentiment::Positive);
    assert_eq!(detect_language(&cleaned), Language::English);
}

#[test]
fn cleaning_does_not_change_word_level_results_for_plain_text() {
    let text = "Solid build quality, fast shipping, great price";
    let cleaned = clean(text, "all");

    assert_eq!(sentiment(text), sentiment(&cleaned));
    assert_eq!(keywords(text), keywords(&cleaned));
    assert_eq!(word_count(text), word_count(&cleaned));
    assert!((similarity(text, &cleaned) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn html_mode_then_whitespace_matches_manual_chain() {
    let step1 = clean("<p>  Fish   &amp;  chips </p>", "html");
    let step2 = clean(&step1, "whitespace");
    assert_eq!(step2, "Fish & chips");
}

// ============================================================
// Chain: rows -> registry -> output
// ============================================================

#[test]
fn feedback_table_through_every_text_function() {
    let rows = [
        "I love this, best purchase ever",
        "Broken on arrival. Worst support.",
        "It arrived on Tuesday",
    ];

    let expected_sentiment = ["positive", "negative", "neutral"];
    for (row, expected) in rows.iter().zip(expected_sentiment) {
        let value = invoke("text_sentiment", &[Some(*row)]).unwrap();
        assert_eq!(value.as_str(), Some(expected), "row: {row}");
    }

    for row in rows {
        let count = invoke("text_word_count", &[Some(row)]).unwrap();
        assert!(matches!(count, Value::Bigint(n) if n > 0), "row: {row}");

        let lang = invoke("text_language_detect", &[Some(row)]).unwrap();
        assert_eq!(lang.as_str(), Some("english"), "row: {row}");
    }
}

#[test]
fn similarity_pairs_from_rows() {
    let input = "the red fox\tthe red fox\nred fox\tblue whale\nsame words\twords same\n";
    let udf = lookup("text_similarity").unwrap();
    let mut out = Vec::new();
    apply_rows(udf, input.as_bytes(), &mut out, &BatchOptions::default(), None).unwrap();

    let lines: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
    assert_eq!(lines, vec!["1.0", "0.0", "1.0"]);
}

#[test]
fn rendered_values_round_trip_through_json() {
    let values = [
        invoke("text_keywords", &[Some("parsing parsing lexing")]).unwrap(),
        invoke("text_similarity", &[Some("a b"), Some("b c")]).unwrap(),
        invoke("text_clean", &[None, Some("all")]).unwrap(),
    ];

    let rendered: Vec<String> = values
        .iter()
        .map(|v| render_value(v, OutputFormat::Json).unwrap())
        .collect();

    assert_eq!(rendered[0], "\"parsing,lexing\"");
    let parsed: f64 = serde_json::from_str(&rendered[1]).unwrap();
    assert!((parsed - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(rendered[2], "null");
}
