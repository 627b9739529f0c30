//! Variant validation endpoint: normalize, look up, and render the report

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::client::validate_and_format;
use crate::service::{
    server::AppState,
    types::{ServiceError, ValidateRequest, ValidateResponse},
    validation::{resolve_assembly, resolve_transcript_set, validate_variant_input},
};

/// Validate a single variant against the remote service
///
/// Lookup failures reported by the remote service (unreachable host, non-2xx
/// status) are part of a 200 response: `raw` carries the error record and
/// `formatted` its `Error: ...` rendering.
pub async fn validate_single(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ServiceError> {
    let Json(request) = payload?;

    let defaults = &state.config.validator;
    let variant = validate_variant_input(request.variant.as_deref())?;
    let assembly = resolve_assembly(request.assembly.as_deref(), &defaults.default_assembly)?;
    let transcript_set = resolve_transcript_set(
        request.transcript_set.as_deref(),
        &defaults.default_transcript_set,
    )?;

    tracing::info!(
        "Validating '{}' ({}, {})",
        variant,
        assembly,
        transcript_set
    );

    let report = validate_and_format(
        state.lookup.as_ref(),
        variant,
        assembly.as_str(),
        transcript_set,
    )
    .await
    .map_err(|e| {
        tracing::error!("Validation of '{}' failed: {}", variant, e);
        ServiceError::InternalError(e.to_string())
    })?;

    Ok(Json(report))
}
