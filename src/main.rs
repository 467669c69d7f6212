use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use textkit::config::{parse_delimiter, Config, OutputFormat};
use textkit::output::{render_value, terminal};
use textkit::text::keywords::KeywordExtractor;
use textkit::udf::batch::{apply_rows, BatchOptions};
use textkit::udf::{self, Value};

/// textkit: text heuristics for row-at-a-time query engines.
///
/// Sentiment, keywords, similarity, word counts, language detection and
/// text cleaning, callable one value at a time or over delimited rows.
#[derive(Parser)]
#[command(name = "textkit", version, about)]
struct Cli {
    /// Print results as JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify text as positive, negative or neutral
    Sentiment { text: String },

    /// Extract the highest-scoring keywords
    Keywords {
        text: String,

        /// How many keywords to return (default: TEXTKIT_KEYWORD_LIMIT or 5)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Jaccard similarity between two texts
    Similarity { text1: String, text2: String },

    /// Count meaningful words
    WordCount { text: String },

    /// Guess the language from its script
    Language { text: String },

    /// Remove noise from text
    Clean {
        text: String,

        /// html, email, phone, url, punctuation, numbers, whitespace or all
        #[arg(long, default_value = "all")]
        mode: String,
    },

    /// Run a string utility operation (upper, slug, mask_email, ...)
    #[command(name = "string")]
    StringOp {
        text: String,

        /// Operation name; proper-cases the text when omitted
        #[arg(long)]
        op: Option<String>,
    },

    /// List the registered row functions
    Functions,

    /// Apply a registered function to delimited rows from stdin or a file
    Apply {
        /// Function name, e.g. text_sentiment
        function: String,

        /// Read rows from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Field delimiter (default: TEXTKIT_DELIMITER or tab)
        #[arg(long)]
        delimiter: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so result rows on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textkit=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match cli.command {
        Commands::Sentiment { text } => {
            show("text_sentiment", &text, &[Some(text.as_str())], format)?;
        }

        Commands::Keywords { text, limit } => {
            let top_n = limit.unwrap_or(config.keyword_limit);
            if top_n == 0 {
                anyhow::bail!("--limit must be at least 1");
            }
            let extractor = KeywordExtractor { top_n };
            let value = Value::String(extractor.extract(&text));
            print_value("text_keywords", &text, &value, format)?;
        }

        Commands::Similarity { text1, text2 } => {
            let label = format!("{text1} | {text2}");
            show("text_similarity", &label, &[Some(text1.as_str()), Some(text2.as_str())], format)?;
        }

        Commands::WordCount { text } => {
            show("text_word_count", &text, &[Some(text.as_str())], format)?;
        }

        Commands::Language { text } => {
            show("text_language_detect", &text, &[Some(text.as_str())], format)?;
        }

        Commands::Clean { text, mode } => {
            if textkit::text::clean::CleanMode::parse(&mode).is_none() {
                eprintln!(
                    "{}",
                    format!("Unknown mode `{mode}`: text is returned unchanged.").dimmed()
                );
            }
            show("text_clean", &text, &[Some(text.as_str()), Some(mode.as_str())], format)?;
        }

        Commands::StringOp { text, op } => {
            show("string_utils", &text, &[Some(text.as_str()), op.as_deref()], format)?;
        }

        Commands::Functions => {
            terminal::display_registry(udf::REGISTRY);
        }

        Commands::Apply {
            function,
            input,
            delimiter,
        } => {
            let udf = udf::lookup(&function).with_context(|| {
                format!("Unknown function `{function}`. Run `textkit functions` to list them.")
            })?;

            let delimiter = match delimiter {
                Some(raw) => parse_delimiter(&raw)?,
                None => config.delimiter,
            };
            let opts = BatchOptions { delimiter, format };
            let stdout = io::stdout().lock();

            let summary = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    let size = file.metadata().map(|m| m.len()).unwrap_or(0);

                    let pb = ProgressBar::new(size);
                    pb.set_style(
                        ProgressStyle::default_bar()
                            .template("  Rows [{bar:30}] {bytes}/{total_bytes} ({eta})")
                            .unwrap(),
                    );
                    let summary = apply_rows(udf, BufReader::new(file), stdout, &opts, Some(&pb))?;
                    pb.finish_and_clear();
                    summary
                }
                None => apply_rows(udf, io::stdin().lock(), stdout, &opts, None)?,
            };

            if summary.skipped > 0 {
                eprintln!(
                    "{}",
                    format!(
                        "{} row(s) skipped: {} takes {} field(s)",
                        summary.skipped,
                        udf.name,
                        udf.signatures.join(" or ")
                    )
                    .yellow()
                );
            }
            info!(rows = summary.processed, "Done");
        }
    }

    Ok(())
}

/// Invoke a registered function on a single set of arguments and print it.
fn show(function: &str, input: &str, args: &[Option<&str>], format: OutputFormat) -> Result<()> {
    let value = udf::invoke(function, args)?;
    print_value(function, input, &value, format)
}

fn print_value(function: &str, input: &str, value: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_value(value, format)?),
        OutputFormat::Text => terminal::display_result(function, input, value),
    }
    Ok(())
}
