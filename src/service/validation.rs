//! Input validation for web service requests

use serde::{Deserialize, Serialize};

use crate::assembly::Assembly;
use crate::config::validate_transcript_set;
use crate::service::types::ServiceError;

/// Maximum allowed length for a variant string
const MAX_VARIANT_LENGTH: usize = 1000;

/// Validation errors for user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Variant is missing or blank
    Empty,
    /// Variant is too long
    TooLong { max: usize, actual: usize },
    /// Variant contains non-ASCII characters
    NonAscii,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Variant input is required"),
            ValidationError::TooLong { max, actual } => {
                write!(f, "Input too long: {} characters (max: {})", actual, max)
            }
            ValidationError::NonAscii => write!(f, "Input must contain only ASCII characters"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        ServiceError::BadRequest(e.to_string())
    }
}

/// Check a submitted variant and return it trimmed
pub fn validate_variant_input(input: Option<&str>) -> Result<&str, ValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if trimmed.len() > MAX_VARIANT_LENGTH {
        return Err(ValidationError::TooLong {
            max: MAX_VARIANT_LENGTH,
            actual: trimmed.len(),
        });
    }

    if !trimmed.is_ascii() {
        return Err(ValidationError::NonAscii);
    }

    Ok(trimmed)
}

/// Resolve the requested assembly, falling back to `default`
pub fn resolve_assembly(requested: Option<&str>, default: &str) -> Result<Assembly, ServiceError> {
    Ok(requested.unwrap_or(default).parse::<Assembly>()?)
}

/// Resolve the requested transcript set, falling back to `default`
pub fn resolve_transcript_set<'a>(
    requested: Option<&'a str>,
    default: &'a str,
) -> Result<&'a str, ServiceError> {
    let transcript_set = requested.map(str::trim).unwrap_or(default);
    validate_transcript_set(transcript_set)?;
    Ok(transcript_set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_variant_input() {
        assert_eq!(
            validate_variant_input(Some("  17-50198002-C-A \n")),
            Ok("17-50198002-C-A")
        );
        assert_eq!(validate_variant_input(None), Err(ValidationError::Empty));
        assert_eq!(validate_variant_input(Some("   ")), Err(ValidationError::Empty));
        assert_eq!(
            validate_variant_input(Some("chr17:50198002C→A")),
            Err(ValidationError::NonAscii)
        );

        let long = "A".repeat(MAX_VARIANT_LENGTH + 1);
        assert!(matches!(
            validate_variant_input(Some(long.as_str())),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(ValidationError::Empty.to_string(), "Variant input is required");
    }

    #[test]
    fn test_resolve_assembly() {
        assert_eq!(resolve_assembly(None, "GRCh38").unwrap().as_str(), "GRCh38");
        assert_eq!(
            resolve_assembly(Some(" GRCh37 "), "GRCh38").unwrap().as_str(),
            "GRCh37"
        );
        assert!(matches!(
            resolve_assembly(Some("hg19"), "GRCh38"),
            Err(ServiceError::BadRequest(_))
        ));
    }

    #[test]
    fn test_resolve_transcript_set() {
        assert_eq!(resolve_transcript_set(None, "mane").unwrap(), "mane");
        assert_eq!(resolve_transcript_set(Some("all"), "mane").unwrap(), "all");
        assert!(resolve_transcript_set(Some("../etc"), "mane").is_err());
    }
}
