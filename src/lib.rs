// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! vvnorm: variant notation normalizer for the VariantValidator Ensembl service
//!
//! Free-form variant strings (HGVS, pseudo-VCF and hybrid notations) are
//! rewritten into the single identifier the remote service accepts, looked
//! up, and rendered as a plain-text report.
//!
//! # Example
//!
//! ```
//! use vvnorm::{normalize_variant_input, Normalizer};
//!
//! // Hybrid notation with an embedded assembly
//! assert_eq!(
//!     normalize_variant_input("chr17(GRCh37):50198002C>A", "GRCh38"),
//!     "GRCh37-17-50198002-C-A"
//! );
//!
//! // HGVS passes through untouched
//! let normalizer = Normalizer::default();
//! assert_eq!(
//!     normalizer.canonicalize("ENST00000225964.10:c.589G>T"),
//!     "ENST00000225964.10:c.589G>T"
//! );
//! ```

pub mod assembly;
pub mod catalog;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod report;
#[cfg(feature = "web-service")]
pub mod service;

// Re-export commonly used types
pub use assembly::{Assembly, DEFAULT_ASSEMBLY};
pub use catalog::EXAMPLE_VARIANTS;
pub use client::{
    validate_and_format, validate_variant, ValidationReport, VariantLookup, VariantValidatorClient,
};
pub use config::{ServiceConfig, ValidatorConfig};
pub use error::VvError;
pub use normalize::{normalize_variant_input, NormalizedVariant, Normalizer, Notation};
pub use report::{format_report, ValidationResult};

/// Result type alias for vvnorm operations
pub type Result<T> = std::result::Result<T, VvError>;
