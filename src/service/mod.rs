//! Web service exposing validation, normalization and the example catalog
//!
//! Routes:
//! - `POST /api/validate`: normalize, look up, and return `{raw, formatted}`
//! - `POST /api/normalize`: normalize only, no network access
//! - `GET /api/examples`: the example variant strings
//! - `GET /health`: liveness

pub mod handlers;
pub mod server;
pub mod types;
pub mod validation;

pub use crate::config::ServiceConfig;
pub use server::{build_router, create_app, AppState};
pub use types::*;
