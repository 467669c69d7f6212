// Script-share language detection.
//
// Each character is bucketed by Unicode range, and each bucket's share is
// taken over the full character count (spaces and punctuation included).
// Thresholds are checked in a fixed priority order; the first match wins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Share of ASCII letters above which text is classified as English.
const LATIN_THRESHOLD: f64 = 0.7;
/// Share of a non-Latin script above which text is classified as that language.
const SCRIPT_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-script character counts for a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    /// ASCII letters `A-Z` / `a-z`
    pub latin: usize,
    /// CJK Unified Ideographs, U+4E00..=U+9FFF
    pub cjk: usize,
    /// Hiragana and Katakana, U+3040..=U+30FF
    pub kana: usize,
    /// Hangul syllables, U+AC00..=U+D7AF
    pub hangul: usize,
    /// Arabic block, U+0600..=U+06FF
    pub arabic: usize,
    /// Every character in the text
    pub total: usize,
}

impl ScriptCounts {
    pub fn of(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            counts.total += 1;
            match c {
                'a'..='z' | 'A'..='Z' => counts.latin += 1,
                '\u{4E00}'..='\u{9FFF}' => counts.cjk += 1,
                '\u{3040}'..='\u{30FF}' => counts.kana += 1,
                '\u{AC00}'..='\u{D7AF}' => counts.hangul += 1,
                '\u{0600}'..='\u{06FF}' => counts.arabic += 1,
                _ => {}
            }
        }
        counts
    }

    fn share(&self, count: usize) -> f64 {
        count as f64 / self.total as f64
    }

    pub fn classify(&self) -> Language {
        if self.total == 0 {
            return Language::Unknown;
        }

        if self.share(self.latin) > LATIN_THRESHOLD {
            Language::English
        } else if self.share(self.cjk) > SCRIPT_THRESHOLD {
            Language::Chinese
        } else if self.share(self.kana) > SCRIPT_THRESHOLD {
            Language::Japanese
        } else if self.share(self.hangul) > SCRIPT_THRESHOLD {
            Language::Korean
        } else if self.share(self.arabic) > SCRIPT_THRESHOLD {
            Language::Arabic
        } else {
            Language::Unknown
        }
    }
}

pub fn detect_language(text: &str) -> Language {
    ScriptCounts::of(text).classify()
}
