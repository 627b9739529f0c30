//! Offline normalization endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::normalize::Normalizer;
use crate::service::{
    server::AppState,
    types::{NormalizeRequest, NormalizeResponse, ServiceError},
    validation::{resolve_assembly, validate_variant_input},
};

/// Normalize a single variant without contacting the validation service
pub async fn normalize_single(
    State(state): State<AppState>,
    payload: Result<Json<NormalizeRequest>, JsonRejection>,
) -> Result<Json<NormalizeResponse>, ServiceError> {
    let Json(request) = payload?;

    let variant = validate_variant_input(request.variant.as_deref())?;
    let assembly = resolve_assembly(
        request.assembly.as_deref(),
        &state.config.validator.default_assembly,
    )?;

    Ok(Json(Normalizer::new(assembly).normalize(variant)))
}
