// Function registry: one entry per row-level capability.
//
// Each entry maps an engine-visible name to a plain function pointer that
// takes the row's arguments (None for SQL NULL) and returns a typed value.
// The text functions never fail; the only errors here are an unknown name
// or a wrong number of arguments, which are mistakes at the call site.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::text::clean::clean;
use crate::text::keywords::keywords;
use crate::text::language::{detect_language, Language};
use crate::text::sentiment::{sentiment, Sentiment};
use crate::text::similarity::similarity;
use crate::text::strings::string_op;
use crate::text::word_count::word_count;

/// A single function result, typed the way the engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    String(String),
    Double(f64),
    Bigint(i64),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

pub type UdfFn = fn(&[Option<&str>]) -> Value;

/// A registered row function.
pub struct Udf {
    /// Name the engine calls the function by
    pub name: &'static str,
    /// Accepted argument/return type shapes, e.g. `string,string->double`
    pub signatures: &'static [&'static str],
    pub min_args: usize,
    pub max_args: usize,
    pub description: &'static str,
    pub func: UdfFn,
}

impl Udf {
    pub fn accepts(&self, arg_count: usize) -> bool {
        (self.min_args..=self.max_args).contains(&arg_count)
    }

    /// Call the function after checking the argument count.
    pub fn call(&self, args: &[Option<&str>]) -> Result<Value> {
        if !self.accepts(args.len()) {
            anyhow::bail!(
                "{} expects {} argument(s), got {} (signatures: {})",
                self.name,
                arity_label(self.min_args, self.max_args),
                args.len(),
                self.signatures.join(" | ")
            );
        }
        Ok((self.func)(args))
    }
}

fn arity_label(min: usize, max: usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    }
}

pub static REGISTRY: &[Udf] = &[
    Udf {
        name: "text_sentiment",
        signatures: &["string->string"],
        min_args: 1,
        max_args: 1,
        description: "Word-list sentiment: positive, negative or neutral",
        func: text_sentiment,
    },
    Udf {
        name: "text_keywords",
        signatures: &["string->string"],
        min_args: 1,
        max_args: 1,
        description: "Top five keywords by frequency x length, comma-joined",
        func: text_keywords,
    },
    Udf {
        name: "text_similarity",
        signatures: &["string,string->double"],
        min_args: 2,
        max_args: 2,
        description: "Jaccard similarity of the two texts' word sets",
        func: text_similarity,
    },
    Udf {
        name: "text_word_count",
        signatures: &["string->bigint"],
        min_args: 1,
        max_args: 1,
        description: "Count of words longer than two characters, minus stop words",
        func: text_word_count,
    },
    Udf {
        name: "text_language_detect",
        signatures: &["string->string"],
        min_args: 1,
        max_args: 1,
        description: "Script-share language guess",
        func: text_language_detect,
    },
    Udf {
        name: "text_clean",
        signatures: &["string,string->string"],
        min_args: 2,
        max_args: 2,
        description: "Remove html, email, phone, url, punctuation, numbers or whitespace noise",
        func: text_clean,
    },
    Udf {
        name: "string_utils",
        signatures: &["string->string", "string,string->string"],
        min_args: 1,
        max_args: 2,
        description: "Proper-casing, masking, validation, slugs and other string operations",
        func: string_utils,
    },
];

/// Find a registered function by name.
pub fn lookup(name: &str) -> Option<&'static Udf> {
    REGISTRY.iter().find(|udf| udf.name == name)
}

/// Look up and call a function in one step.
pub fn invoke(name: &str, args: &[Option<&str>]) -> Result<Value> {
    let Some(udf) = lookup(name) else {
        anyhow::bail!("Unknown function `{name}`. Run `textkit functions` to list them.");
    };
    debug!(function = name, args = args.len(), "Invoking row function");
    udf.call(args)
}

fn arg<'a>(args: &[Option<&'a str>], index: usize) -> Option<&'a str> {
    args.get(index).copied().flatten()
}

fn text_sentiment(args: &[Option<&str>]) -> Value {
    let label = match arg(args, 0) {
        Some(text) => sentiment(text),
        None => Sentiment::Neutral,
    };
    Value::String(label.to_string())
}

fn text_keywords(args: &[Option<&str>]) -> Value {
    Value::String(arg(args, 0).map(keywords).unwrap_or_default())
}

fn text_similarity(args: &[Option<&str>]) -> Value {
    let score = match (arg(args, 0), arg(args, 1)) {
        (Some(a), Some(b)) => similarity(a, b),
        _ => 0.0,
    };
    Value::Double(score)
}

fn text_word_count(args: &[Option<&str>]) -> Value {
    let count = arg(args, 0).map(word_count).unwrap_or(0);
    Value::Bigint(count as i64)
}

fn text_language_detect(args: &[Option<&str>]) -> Value {
    let language = arg(args, 0).map(detect_language).unwrap_or(Language::Unknown);
    Value::String(language.to_string())
}

fn text_clean(args: &[Option<&str>]) -> Value {
    match (arg(args, 0), arg(args, 1)) {
        (None, _) => Value::Null,
        (Some(text), None) => Value::String(text.to_string()),
        (Some(text), Some(mode)) => Value::String(clean(text, mode)),
    }
}

fn string_utils(args: &[Option<&str>]) -> Value {
    match string_op(arg(args, 0), arg(args, 1)) {
        Some(out) => Value::String(out),
        None => Value::Null,
    }
}
