//! Request and response types for the validation web service

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::VvError;

pub use crate::client::ValidationReport as ValidateResponse;
pub use crate::normalize::NormalizedVariant as NormalizeResponse;

/// Body of `POST /api/validate`
///
/// Every field is optional at the JSON level; a missing `variant` is reported
/// as a 400 and the other two fall back to the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub assembly: Option<String>,
    #[serde(default)]
    pub transcript_set: Option<String>,
}

/// Body of `POST /api/normalize`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeRequest {
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub assembly: Option<String>,
}

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Service error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ServiceError {
    /// Convert to HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::PayloadTooLarge(_) => 413,
            ServiceError::InternalError(_) => 500,
            ServiceError::ConfigError(_) => 500,
        }
    }

    /// Message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            ServiceError::BadRequest(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::PayloadTooLarge(msg)
            | ServiceError::InternalError(msg)
            | ServiceError::ConfigError(msg) => msg,
        }
    }

    /// Convert to error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.message().to_string(),
        }
    }
}

impl From<VvError> for ServiceError {
    fn from(e: VvError) -> Self {
        if e.is_input_error() {
            ServiceError::BadRequest(e.to_string())
        } else {
            ServiceError::InternalError(e.to_string())
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServiceError::PayloadTooLarge(rejection.body_text())
        } else {
            ServiceError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), 404);
        assert_eq!(ServiceError::PayloadTooLarge("x".into()).status_code(), 413);
        assert_eq!(ServiceError::InternalError("x".into()).status_code(), 500);
        assert_eq!(ServiceError::ConfigError("x".into()).status_code(), 500);
    }

    #[test]
    fn test_error_response_has_bare_message() {
        let error = ServiceError::BadRequest("Variant input is required".to_string());
        let json = serde_json::to_value(error.to_response()).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Variant input is required"}));
    }

    #[test]
    fn test_from_vv_error() {
        let error: ServiceError = VvError::InvalidAssembly("hg19".to_string()).into();
        assert!(matches!(error, ServiceError::BadRequest(_)));

        let error: ServiceError = VvError::Config("broken".to_string()).into();
        assert!(matches!(error, ServiceError::InternalError(_)));
    }

    #[test]
    fn test_validate_request_defaults() {
        let request: ValidateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.variant.is_none());
        assert!(request.assembly.is_none());
        assert!(request.transcript_set.is_none());
    }
}
