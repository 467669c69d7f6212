// Row driver: feed delimited lines through one registered function.
//
// Each input line is one row. Fields are split on the delimiter; an empty
// field or `\N` is NULL. The function is invoked once per row and one
// output line is written per row, in input order. Rows with the wrong
// number of fields are skipped (and logged) rather than aborting the run.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::{info, warn};

use super::registry::Udf;
use crate::config::OutputFormat;
use crate::output::{render_value, NULL_MARKER};

pub struct BatchOptions {
    pub delimiter: char,
    pub format: OutputFormat,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows the function was applied to
    pub processed: usize,
    /// Rows skipped because their field count didn't fit the function
    pub skipped: usize,
    /// Processed rows whose result was NULL
    pub nulls: usize,
}

/// Split one line into fields, mapping empty fields and `\N` to None.
pub fn parse_row(line: &str, delimiter: char) -> Vec<Option<&str>> {
    line.split(delimiter)
        .map(|field| {
            if field.is_empty() || field == NULL_MARKER {
                None
            } else {
                Some(field)
            }
        })
        .collect()
}

/// Apply `udf` to every line of `reader`, writing results to `writer`.
///
/// When a progress bar is given it is advanced by the byte length of each
/// line, so it can be sized from the input file's length.
pub fn apply_rows<R: BufRead, W: Write>(
    udf: &Udf,
    reader: R,
    mut writer: W,
    opts: &BatchOptions,
    progress: Option<&ProgressBar>,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read input row {}", i + 1))?;
        if let Some(pb) = progress {
            pb.inc(line.len() as u64 + 1);
        }

        let row = line.strip_suffix('\r').unwrap_or(&line);
        let args = parse_row(row, opts.delimiter);

        if !udf.accepts(args.len()) {
            warn!(
                row = i + 1,
                fields = args.len(),
                function = udf.name,
                "Skipping row with wrong field count"
            );
            summary.skipped += 1;
            continue;
        }

        let value = udf.call(&args)?;
        if value.is_null() {
            summary.nulls += 1;
        }
        writeln!(writer, "{}", render_value(&value, opts.format)?)?;
        summary.processed += 1;
    }

    writer.flush()?;

    info!(
        function = udf.name,
        processed = summary.processed,
        skipped = summary.skipped,
        nulls = summary.nulls,
        "Batch complete"
    );

    Ok(summary)
}
