//! CLI utilities for vvnorm
//!
//! The binary is a thin layer over these functions. Everything that touches
//! the terminal takes a reader or writer so it can be driven from tests.

pub mod format;
pub mod interactive;

pub use format::{output_normalized, output_report, OutputFormat};
pub use interactive::{
    run_interactive, safe_report_filename, save_report, InteractiveOptions, SessionSummary,
};

use std::io::{self, Write};

use crate::catalog::EXAMPLE_VARIANTS;

/// Write the example variants, one per line
///
/// # Examples
///
/// ```
/// use vvnorm::cli::output_examples;
///
/// let mut buffer = Vec::new();
/// output_examples(&mut buffer).unwrap();
/// let text = String::from_utf8(buffer).unwrap();
/// assert_eq!(text.lines().count(), 10);
/// assert_eq!(text.lines().next(), Some("ENST00000225964.10:c.589G>T"));
/// ```
pub fn output_examples<W: Write>(writer: &mut W) -> io::Result<()> {
    for example in EXAMPLE_VARIANTS {
        writeln!(writer, "{}", example)?;
    }
    Ok(())
}
