// Colored terminal output for interactive commands.
//
// Batch output never goes through here: rows are written plain so they can
// be piped back into an engine. These helpers are for humans at a shell.

use colored::Colorize;

use super::truncate_chars;
use crate::udf::{Udf, Value};

/// Display the function registry as a table.
pub fn display_registry(functions: &[Udf]) {
    println!(
        "\n{}",
        format!("=== Registered functions ({}) ===", functions.len()).bold()
    );
    println!();

    println!(
        "  {:<22} {:<40}  {}",
        "Name".dimmed(),
        "Signature".dimmed(),
        "Description".dimmed(),
    );
    println!("  {}", "-".repeat(100).dimmed());

    for udf in functions {
        println!(
            "  {:<22} {:<40}  {}",
            udf.name.cyan(),
            udf.signatures.join(" | "),
            udf.description,
        );
    }
    println!();
}

/// Display a single result with its input echoed back.
pub fn display_result(function: &str, input: &str, value: &Value) {
    let rendered = match value {
        Value::Null => "NULL".dimmed().to_string(),
        Value::String(s) if s.is_empty() => "(empty)".dimmed().to_string(),
        Value::String(s) => colorize_label(s).to_string(),
        Value::Double(d) => format!("{d:.4}").bold().to_string(),
        Value::Bigint(n) => n.to_string().bold().to_string(),
    };

    println!("  {} {}", "input:".dimmed(), truncate_chars(input, 80));
    println!("  {} {}", format!("{function}:").dimmed(), rendered);
}

/// Highlight known sentiment labels; everything else is printed bold.
fn colorize_label(label: &str) -> colored::ColoredString {
    match label {
        "positive" => label.green().bold(),
        "negative" => label.red().bold(),
        "neutral" | "unknown" => label.yellow(),
        _ => label.bold(),
    }
}
