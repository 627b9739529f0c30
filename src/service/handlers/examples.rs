//! Example catalog endpoint

use axum::response::Json;

use crate::catalog::EXAMPLE_VARIANTS;

/// Example variant strings, one per supported notation
pub async fn list_examples() -> Json<Vec<&'static str>> {
    Json(EXAMPLE_VARIANTS.to_vec())
}
