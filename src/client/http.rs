//! reqwest-backed [`VariantLookup`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use super::VariantLookup;
use crate::config::ValidatorConfig;
use crate::error::VvError;
use crate::report::ValidationResult;

/// Build the lookup URL for a canonical key
///
/// Every path segment is percent-encoded, so `/` and `>` inside the key cannot
/// change the route. A trailing `/` on `base_url` is ignored.
pub fn lookup_url(
    base_url: &str,
    assembly: &str,
    canonical_key: &str,
    transcript_set: &str,
) -> String {
    format!(
        "{}/{}/{}/{}?content-type=application%2Fjson",
        base_url.trim_end_matches('/'),
        urlencoding::encode(assembly),
        urlencoding::encode(canonical_key),
        urlencoding::encode(transcript_set)
    )
}

/// Client for the VariantValidator Ensembl REST endpoint
#[derive(Debug, Clone)]
pub struct VariantValidatorClient {
    client: Client,
    base_url: String,
}

impl VariantValidatorClient {
    /// Create a client with the configured timeout, user agent and base URL
    pub fn new(config: &ValidatorConfig) -> Result<Self, VvError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl VariantLookup for VariantValidatorClient {
    async fn lookup(
        &self,
        assembly: &str,
        canonical_key: &str,
        transcript_set: &str,
    ) -> Result<ValidationResult, VvError> {
        let url = lookup_url(&self.base_url, assembly, canonical_key, transcript_set);
        tracing::debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request to VariantValidator failed: {}", e);
                return Ok(ValidationResult::failure(
                    e.to_string(),
                    e.status().map(|s| s.as_u16()),
                ));
            }
        };

        let status = response.status();
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("VariantValidator returned HTTP {}", status);
                return Ok(ValidationResult::failure(
                    e.to_string(),
                    Some(status.as_u16()),
                ));
            }
        };

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return Ok(ValidationResult::failure(
                    e.to_string(),
                    Some(status.as_u16()),
                ))
            }
        };

        // The endpoint always answers with a JSON object
        let parsed = serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| e.to_string())
            .and_then(|value| {
                if value.is_object() {
                    serde_json::from_value::<ValidationResult>(value).map_err(|e| e.to_string())
                } else {
                    Err("expected a JSON object".to_string())
                }
            });

        Ok(parsed.unwrap_or_else(|e| {
            ValidationResult::failure(
                format!("Invalid response from validation service: {}", e),
                Some(status.as_u16()),
            )
        }))
    }
}
