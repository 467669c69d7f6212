// Output formatting: value rendering and colored terminal display.

pub mod terminal;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::udf::Value;

/// Marker written for NULL in text output, the usual convention for
/// delimited engine exports.
pub const NULL_MARKER: &str = "\\N";

/// Render a value as a single output line (without the newline).
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(match value {
            Value::Null => NULL_MARKER.to_string(),
            Value::String(s) => s.clone(),
            // Debug formatting keeps the decimal point on whole numbers (1.0, not 1)
            Value::Double(d) => format!("{d:?}"),
            Value::Bigint(n) => n.to_string(),
        }),
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_rendering() {
        assert_eq!(render_value(&Value::Null, OutputFormat::Text).unwrap(), "\\N");
        assert_eq!(render_value(&Value::Double(1.0), OutputFormat::Text).unwrap(), "1.0");
        assert_eq!(render_value(&Value::Bigint(7), OutputFormat::Text).unwrap(), "7");
    }

    #[test]
    fn test_json_rendering_escapes_strings() {
        let value = Value::String("say \"hi\"".to_string());
        assert_eq!(
            render_value(&value, OutputFormat::Json).unwrap(),
            "\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
