//! Validation results and their plain-text report
//!
//! [`ValidationResult`] models the JSON returned by the VariantValidator
//! Ensembl endpoint (or the error record produced when the lookup fails), and
//! [`format_report`] renders it for people.

pub mod format;
pub mod types;

pub use format::{format_failure, format_report, format_report_at, sort_transcripts};
pub use types::{
    AssemblyLocus, GeneIds, LookupFailure, TranscriptDescription, ValidationRecord,
    ValidationResult, NOT_AVAILABLE,
};
