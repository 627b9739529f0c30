//! Configuration for the validation client and web service
//!
//! Both binaries read the same TOML file. Every field has a default, so an
//! empty file (or no file at all) gives a working setup that talks to the
//! public VariantValidator instance.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//!
//! [validator]
//! base_url = "https://rest.variantvalidator.org/VariantValidator/variantvalidator_ensembl"
//! timeout_seconds = 15
//! default_assembly = "GRCh38"
//! default_transcript_set = "mane"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assembly::{Assembly, DEFAULT_ASSEMBLY};
use crate::error::VvError;
use crate::Result;

/// Public VariantValidator Ensembl endpoint
pub const DEFAULT_BASE_URL: &str =
    "https://rest.variantvalidator.org/VariantValidator/variantvalidator_ensembl";

/// User agent sent with every lookup
pub const DEFAULT_USER_AGENT: &str = "EnsemblVariantValidator/1.0";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

pub const DEFAULT_TRANSCRIPT_SET: &str = "mane";

/// Main service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote validation service configuration
    #[serde(default)]
    pub validator: ValidatorConfig,
}

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    pub host: String,
    /// Port to listen on (default: 5000)
    pub port: u16,
    /// Maximum request size (default: "1MB")
    pub max_request_size: String,
    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
    /// Enable permissive CORS (default: true)
    pub enable_cors: bool,
    /// Enable per-request tracing spans (default: true)
    pub enable_tracing: bool,
}

/// Remote validation service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Base URL of the VariantValidator Ensembl endpoint
    pub base_url: String,
    /// Request timeout in seconds (default: 15)
    pub timeout_seconds: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// Assembly used when a request does not name one (default: GRCh38)
    pub default_assembly: String,
    /// Transcript set used when a request does not name one (default: mane)
    pub default_transcript_set: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_request_size: "1MB".to_string(),
            request_timeout_seconds: 30,
            enable_cors: true,
            enable_tracing: true,
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_assembly: DEFAULT_ASSEMBLY.to_string(),
            default_transcript_set: DEFAULT_TRANSCRIPT_SET.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::info!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            tracing::info!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(VvError::Config(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(VvError::Config(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.validator.timeout_seconds == 0 {
            return Err(VvError::Config(
                "Validator timeout must be greater than 0".to_string(),
            ));
        }

        let base_url = &self.validator.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(VvError::Config(format!(
                "Validator base_url must be an http(s) URL: {}",
                base_url
            )));
        }

        self.validator.default_assembly.parse::<Assembly>()?;
        validate_transcript_set(&self.validator.default_transcript_set)?;

        Ok(())
    }
}

/// Transcript sets are a single path segment: ASCII letters, digits, `_` or `-`
pub fn validate_transcript_set(transcript_set: &str) -> Result<()> {
    let valid = !transcript_set.is_empty()
        && transcript_set
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(VvError::InvalidTranscriptSet(transcript_set.to_string()))
    }
}
