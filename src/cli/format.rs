//! Output formatting utilities for CLI operations

use std::io::{self, Write};
use std::str::FromStr;

use crate::client::ValidationReport;
use crate::normalize::NormalizedVariant;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text format (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use vvnorm::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert!(matches!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json));
    /// assert!(matches!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text));
    /// assert!(matches!(OutputFormat::from_str("yaml").unwrap(), OutputFormat::Text));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Write a normalization result
///
/// Text output is the canonical key alone, or `input -> key` when the two
/// differ. JSON output is the full [`NormalizedVariant`].
///
/// # Examples
///
/// ```
/// use vvnorm::cli::{output_normalized, OutputFormat};
/// use vvnorm::normalize::Normalizer;
/// use std::io::Cursor;
///
/// let normalized = Normalizer::default().normalize("17:50198002:C:A");
/// let mut buffer = Cursor::new(Vec::new());
/// output_normalized(&mut buffer, &normalized, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert_eq!(result, "17:50198002:C:A -> GRCh38-17-50198002-C-A\n");
/// ```
pub fn output_normalized<W: Write>(
    writer: &mut W,
    normalized: &NormalizedVariant,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(normalized).map_err(io::Error::other)?;
            writeln!(writer, "{}", json)
        }
        OutputFormat::Text => {
            if normalized.input == normalized.canonical {
                writeln!(writer, "{}", normalized.canonical)
            } else {
                writeln!(writer, "{} -> {}", normalized.input, normalized.canonical)
            }
        }
    }
}

/// Write a validation report
///
/// Text output is the rendered report. JSON output is the raw service record,
/// pretty-printed.
pub fn output_report<W: Write>(
    writer: &mut W,
    report: &ValidationReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.raw).map_err(io::Error::other)?;
            writeln!(writer, "{}", json)
        }
        OutputFormat::Text => writeln!(writer, "{}", report.formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalizer;
    use crate::report::ValidationResult;
    use std::io::Cursor;

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&mut Cursor<Vec<u8>>) -> io::Result<()>,
    {
        let mut buffer = Cursor::new(Vec::new());
        f(&mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_output_normalized_passthrough() {
        let normalized = Normalizer::default().normalize("ENST00000225964.10:c.589G>T");
        let out = written(|w| output_normalized(w, &normalized, OutputFormat::Text));
        assert_eq!(out, "ENST00000225964.10:c.589G>T\n");
    }

    #[test]
    fn test_output_normalized_json() {
        let normalized = Normalizer::default().normalize("chr17:50198002C>A");
        let out = written(|w| output_normalized(w, &normalized, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["canonical"], "GRCh38-17-50198002-C-A");
        assert_eq!(value["assembly"], "GRCh38");
        assert_eq!(value["notation"], "fused_allele_change");
    }

    #[test]
    fn test_output_report() {
        let report = ValidationReport {
            raw: ValidationResult::failure("not found", Some(404)),
            formatted: "Error: not found (Status: 404)".to_string(),
        };

        let text = written(|w| output_report(w, &report, OutputFormat::Text));
        assert_eq!(text, "Error: not found (Status: 404)\n");

        let json = written(|w| output_report(w, &report, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "not found");
        assert_eq!(value["status_code"], 404);
    }
}
