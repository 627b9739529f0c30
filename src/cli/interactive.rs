//! Prompt loop for validating variants one at a time

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::catalog::supported_formats_text;
use crate::client::{validate_and_format, VariantLookup};
use crate::error::VvError;

const BANNER_TITLE: &str = "Ensembl Variant Validator - Comprehensive Input Support";

const REPORT_FILE_PREFIX: &str = "ensembl_variant_report_";

/// Longest stem taken from the variant when naming a saved report
const MAX_STEM_CHARS: usize = 50;

/// Settings for one interactive session
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    pub assembly: String,
    pub transcript_set: String,
    /// Directory saved reports are written to
    pub output_dir: PathBuf,
}

/// Counters reported when the session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub validated: usize,
    pub saved: usize,
}

/// File name for a saved report
///
/// Every character outside `[A-Za-z0-9]` becomes `_`, and only the first 50
/// characters of the variant are used.
///
/// # Examples
///
/// ```
/// use vvnorm::cli::safe_report_filename;
///
/// assert_eq!(
///     safe_report_filename("chr17:50198002C>A"),
///     "ensembl_variant_report_chr17_50198002C_A.txt"
/// );
/// ```
pub fn safe_report_filename(variant: &str) -> String {
    let stem: String = variant
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_STEM_CHARS)
        .collect();
    format!("{}{}.txt", REPORT_FILE_PREFIX, stem)
}

/// Write `report` to `dir` under [`safe_report_filename`], returning the path
pub fn save_report(dir: &Path, variant: &str, report: &str) -> Result<PathBuf, VvError> {
    let path = dir.join(safe_report_filename(variant));
    std::fs::write(&path, report)?;
    tracing::info!("Saved report to {}", path.display());
    Ok(path)
}

/// Run the prompt loop until `quit`, `exit` or end of input
pub async fn run_interactive<R, W>(
    lookup: &dyn VariantLookup,
    input: &mut R,
    output: &mut W,
    options: &InteractiveOptions,
) -> Result<SessionSummary, VvError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    writeln!(output, "{}", BANNER_TITLE)?;
    writeln!(output, "{}", "=".repeat(80))?;
    writeln!(output, "{}", supported_formats_text())?;
    writeln!(output, "\nEnter 'quit' or 'exit' to end\n")?;

    loop {
        let Some(line) = prompt(input, output, "\nEnter variant: ")? else {
            break;
        };
        let variant = line.trim();
        if variant.is_empty() {
            continue;
        }
        if variant.eq_ignore_ascii_case("quit") || variant.eq_ignore_ascii_case("exit") {
            break;
        }

        let report = match validate_and_format(
            lookup,
            variant,
            &options.assembly,
            &options.transcript_set,
        )
        .await
        {
            Ok(report) => report.formatted,
            Err(e) => format!("Error: {}", e),
        };
        summary.validated += 1;
        writeln!(output, "\n{}", report)?;

        let Some(answer) = prompt(input, output, "\nSave report to file? (y/n): ")? else {
            break;
        };
        if answer.trim().eq_ignore_ascii_case("y") {
            let path = save_report(&options.output_dir, variant, &report)?;
            summary.saved += 1;
            writeln!(output, "Report saved to {}", path.display())?;
        }
    }

    Ok(summary)
}

/// Print `message` and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>, VvError> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
