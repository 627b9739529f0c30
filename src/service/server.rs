//! Web server setup using Axum framework

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::client::{VariantLookup, VariantValidatorClient};
use crate::config::ServiceConfig;
use crate::service::{handlers, types::ServiceError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolves canonical keys against the validation service
    pub lookup: Arc<dyn VariantLookup>,
    /// Service configuration
    pub config: Arc<ServiceConfig>,
}

/// Create the Axum application backed by the VariantValidator client
pub fn create_app(config: ServiceConfig) -> Result<(Router, AppState), ServiceError> {
    let client = VariantValidatorClient::new(&config.validator).map_err(|e| {
        ServiceError::ConfigError(format!("Failed to create HTTP client: {}", e))
    })?;
    tracing::info!("Using VariantValidator at {}", client.base_url());

    build_router(config, Arc::new(client))
}

/// Create the Axum application around any [`VariantLookup`]
pub fn build_router(
    config: ServiceConfig,
    lookup: Arc<dyn VariantLookup>,
) -> Result<(Router, AppState), ServiceError> {
    let max_size = parse_size(&config.server.max_request_size)
        .map_err(|e| ServiceError::ConfigError(format!("Invalid max_request_size: {}", e)))?;
    let request_timeout = Duration::from_secs(config.server.request_timeout_seconds);

    let state = AppState {
        lookup,
        config: Arc::new(config.clone()),
    };

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/validate", post(handlers::validate::validate_single))
        .route("/api/normalize", post(handlers::normalize::normalize_single))
        .route("/api/examples", get(handlers::examples::list_examples))
        .fallback(handle_404)
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(max_size))
        .layer(TimeoutLayer::new(request_timeout));

    if config.server.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }
    if config.server.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    Ok((app, state))
}

/// Handle 404 errors
async fn handle_404() -> ServiceError {
    ServiceError::NotFound("Endpoint not found".to_string())
}

/// Parse size strings like "10MB", "1GB", etc.
fn parse_size(size_str: &str) -> Result<usize, String> {
    let size_str = size_str.trim().to_uppercase();

    // Longer suffixes first so "MB" is not read as "B"
    for (suffix, multiplier) in [("GB", 1024 * 1024 * 1024), ("MB", 1024 * 1024), ("KB", 1024)] {
        if let Some(num_str) = size_str.strip_suffix(suffix) {
            let num: usize = num_str
                .trim()
                .parse()
                .map_err(|_| format!("Invalid size format: {}", size_str))?;
            return Ok(num * multiplier);
        }
    }

    size_str
        .strip_suffix('B')
        .unwrap_or(&size_str[..])
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid size format: {}", size_str))
}
