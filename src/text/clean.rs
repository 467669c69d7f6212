// Regex-driven text cleaning.
//
// Each mode removes one kind of noise. `all` chains the tag, email, phone,
// URL, punctuation and whitespace steps, each running on the previous
// step's output. Note that `all` strips tags but does not decode entities.
// Unknown modes leave the text untouched. Patterns use the `regex` crate so
// `\d`, `\s` and `\S` follow Unicode, not just ASCII.

use std::sync::LazyLock;

use regex::Regex;

use super::tokenize::is_word_char;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("valid email pattern"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3})?[\s.-]?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
        .expect("valid phone pattern")
});

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9$-_@.&+!*\\(),]|%[0-9a-fA-F]{2})+")
        .expect("valid url pattern")
});

/// Entities decoded by the `html` mode, in replacement order. `&amp;` goes
/// first, so `&amp;lt;` ends up as `<`.
const HTML_ENTITIES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    Html,
    Email,
    Phone,
    Url,
    Punctuation,
    Numbers,
    Whitespace,
    All,
}

impl CleanMode {
    pub const ALL_MODES: [CleanMode; 8] = [
        CleanMode::Html,
        CleanMode::Email,
        CleanMode::Phone,
        CleanMode::Url,
        CleanMode::Punctuation,
        CleanMode::Numbers,
        CleanMode::Whitespace,
        CleanMode::All,
    ];

    /// Parse a mode name. Names are case-sensitive; anything unrecognized is None.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "html" => Some(CleanMode::Html),
            "email" => Some(CleanMode::Email),
            "phone" => Some(CleanMode::Phone),
            "url" => Some(CleanMode::Url),
            "punctuation" => Some(CleanMode::Punctuation),
            "numbers" => Some(CleanMode::Numbers),
            "whitespace" => Some(CleanMode::Whitespace),
            "all" => Some(CleanMode::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CleanMode::Html => "html",
            CleanMode::Email => "email",
            CleanMode::Phone => "phone",
            CleanMode::Url => "url",
            CleanMode::Punctuation => "punctuation",
            CleanMode::Numbers => "numbers",
            CleanMode::Whitespace => "whitespace",
            CleanMode::All => "all",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            CleanMode::Html => strip_html(text),
            CleanMode::Email => strip_emails(text),
            CleanMode::Phone => strip_phones(text),
            CleanMode::Url => strip_urls(text),
            CleanMode::Punctuation => strip_punctuation(text),
            CleanMode::Numbers => strip_numbers(text),
            CleanMode::Whitespace => collapse_whitespace(text),
            CleanMode::All => {
                let text = strip_tags(text);
                let text = strip_emails(&text);
                let text = strip_phones(&text);
                let text = strip_urls(&text);
                let text = strip_punctuation(&text);
                collapse_whitespace(&text)
            }
        }
    }
}

/// Clean `text` with the named mode. Unknown or empty modes return the input.
pub fn clean(text: &str, mode: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    match CleanMode::parse(mode) {
        Some(mode) => mode.apply(text),
        None => text.to_string(),
    }
}

fn strip_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Remove tags, then decode the five common entities.
pub fn strip_html(text: &str) -> String {
    HTML_ENTITIES
        .iter()
        .fold(strip_tags(text), |acc, &(entity, plain)| acc.replace(entity, plain))
}

pub fn strip_emails(text: &str) -> String {
    EMAIL.replace_all(text, "").into_owned()
}

pub fn strip_phones(text: &str) -> String {
    PHONE.replace_all(text, "").into_owned()
}

pub fn strip_urls(text: &str) -> String {
    URL.replace_all(text, "").into_owned()
}

/// Keep only word characters and whitespace.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect()
}

/// Remove decimal digit runs. Other numerals (`²`, `½`, `Ⅻ`) are kept.
pub fn strip_numbers(text: &str) -> String {
    DIGIT_RUN.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
