//! Error types for vvnorm
//!
//! Normalization and report rendering never fail; these errors cover the
//! surrounding plumbing: assembly tokens, configuration files, and the
//! outbound HTTP client.

use thiserror::Error;

/// Errors raised by the vvnorm library
#[derive(Debug, Error)]
pub enum VvError {
    /// Assembly token is not of the form `GRCh<digits>`
    #[error("invalid assembly '{0}': expected GRCh followed by digits (e.g. GRCh38)")]
    InvalidAssembly(String),

    /// Transcript set token is empty or contains characters unsafe for a URL path
    #[error("invalid transcript set '{0}'")]
    InvalidTranscriptSet(String),

    /// Configuration is inconsistent
    #[error("configuration error: {0}")]
    Config(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VvError {
    /// Whether this error was caused by the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            VvError::InvalidAssembly(_) | VvError::InvalidTranscriptSet(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_assembly_message() {
        let err = VvError::InvalidAssembly("hg19".to_string());
        assert!(err.to_string().contains("hg19"));
        assert!(err.to_string().contains("GRCh"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_io_error_is_not_input_error() {
        let err: VvError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(!err.is_input_error());
        assert!(err.to_string().starts_with("IO error"));
    }
}
