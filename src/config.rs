use std::env;

use anyhow::{Context, Result};

use crate::text::keywords::DEFAULT_TOP_N;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one value per line; NULL is written as `\N`
    Text,
    /// One JSON value per line
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Runtime configuration loaded from environment variables.
///
/// A `.env` file in the working directory is loaded at startup via dotenvy,
/// so any of these can live there instead of the shell environment.
/// Command-line flags take precedence over everything here.
#[derive(Debug, Clone)]
pub struct Config {
    /// TEXTKIT_OUTPUT: `text` (default) or `json`
    pub output: OutputFormat,
    /// TEXTKIT_DELIMITER: field separator for batch rows (default TAB)
    pub delimiter: char,
    /// TEXTKIT_KEYWORD_LIMIT: keywords returned by the `keywords` command (default 5).
    /// The registered `text_keywords` function always returns five.
    pub keyword_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            delimiter: '\t',
            keyword_limit: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; a set-but-invalid value is an error rather
    /// than being silently ignored.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("TEXTKIT_OUTPUT") {
            config.output = OutputFormat::parse(&raw).with_context(|| {
                format!("TEXTKIT_OUTPUT must be `text` or `json`, got `{raw}`")
            })?;
        }

        if let Some(raw) = lookup("TEXTKIT_DELIMITER") {
            config.delimiter = parse_delimiter(&raw)
                .with_context(|| format!("Invalid TEXTKIT_DELIMITER `{raw}`"))?;
        }

        if let Some(raw) = lookup("TEXTKIT_KEYWORD_LIMIT") {
            let limit: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("TEXTKIT_KEYWORD_LIMIT must be a number, got `{raw}`"))?;
            if limit == 0 {
                anyhow::bail!("TEXTKIT_KEYWORD_LIMIT must be at least 1");
            }
            config.keyword_limit = limit;
        }

        Ok(config)
    }
}

/// Accepts a single character, or the escapes `\t` and `tab`.
pub fn parse_delimiter(raw: &str) -> Result<char> {
    if raw == "\\t" || raw.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("delimiter must be exactly one character"),
    }
}
