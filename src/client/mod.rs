//! Remote lookup against the VariantValidator Ensembl endpoint
//!
//! [`VariantLookup`] is the seam between the adapters (CLI and web routes)
//! and the network. [`VariantValidatorClient`] is the production
//! implementation; tests substitute their own.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::VvError;
use crate::normalize::normalize_variant_input;
use crate::report::{format_report, ValidationResult};

pub mod http;

pub use http::{lookup_url, VariantValidatorClient};

/// Something that can resolve a canonical variant key to a validation result
///
/// Network failures and non-success HTTP statuses are data, not errors: they
/// come back as [`ValidationResult::Failure`]. `Err` is for failures the
/// caller could not have caused.
#[async_trait]
pub trait VariantLookup: Send + Sync {
    async fn lookup(
        &self,
        assembly: &str,
        canonical_key: &str,
        transcript_set: &str,
    ) -> Result<ValidationResult, VvError>;
}

/// Raw service output paired with its rendered report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub raw: ValidationResult,
    pub formatted: String,
}

/// Normalize `variant` and look it up
///
/// `assembly` is the default for normalization and the assembly segment of
/// the lookup path. An assembly embedded in the input (`chr17(GRCh37):...`)
/// only affects the normalized key.
pub async fn validate_variant(
    lookup: &dyn VariantLookup,
    variant: &str,
    assembly: &str,
    transcript_set: &str,
) -> Result<ValidationResult, VvError> {
    let canonical = normalize_variant_input(variant, assembly);
    tracing::debug!("Normalized '{}' to '{}'", variant.trim(), canonical);

    let result = lookup.lookup(assembly, &canonical, transcript_set).await?;
    if let ValidationResult::Failure(failure) = &result {
        tracing::warn!("Lookup of '{}' failed: {}", canonical, failure.error);
    }
    Ok(result)
}

/// [`validate_variant`] followed by [`format_report`]
pub async fn validate_and_format(
    lookup: &dyn VariantLookup,
    variant: &str,
    assembly: &str,
    transcript_set: &str,
) -> Result<ValidationReport, VvError> {
    let raw = validate_variant(lookup, variant, assembly, transcript_set).await?;
    let formatted = format_report(&raw);
    Ok(ValidationReport { raw, formatted })
}
