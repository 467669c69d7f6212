// Word-list sentiment scoring with a one-token negation window.
//
// Tokens are scanned left to right. A negation word arms a flag and is not
// scored itself; the next non-negation token consumes the flag whether or
// not it is a sentiment word. While the flag is armed, polarity is flipped.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;
use super::tokenize::tokenize;

/// Overall sentiment label for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive and negative hit counts after negation has been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: u32,
    pub negative: u32,
}

impl SentimentTally {
    pub fn label(&self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Count sentiment hits in an already tokenized text.
pub fn score_tokens(tokens: &[String], lexicon: &Lexicon<'_>) -> SentimentTally {
    let mut tally = SentimentTally::default();
    let mut negate = false;

    for word in tokens {
        let word = word.as_str();

        if lexicon.is_negation(word) {
            // A second negator keeps the flag armed rather than cancelling it
            negate = true;
            continue;
        }

        if lexicon.is_positive(word) {
            if negate {
                tally.negative += 1;
            } else {
                tally.positive += 1;
            }
        } else if lexicon.is_negative(word) {
            if negate {
                tally.positive += 1;
            } else {
                tally.negative += 1;
            }
        }

        negate = false;
    }

    tally
}

/// Classify text as positive, negative or neutral using the built-in lexicon.
///
/// Empty input is neutral.
pub fn sentiment(text: &str) -> Sentiment {
    if text.is_empty() {
        return Sentiment::Neutral;
    }
    score_tokens(&tokenize(text), &Lexicon::default()).label()
}
