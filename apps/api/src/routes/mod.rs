pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// Fallback for known routes hit with the wrong verb, so callers get the
/// same `{error, details}` body shape as every other failure.
async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(handlers::handle_analyze).fallback(method_not_allowed),
        )
        .route(
            "/api/analyze/export",
            post(handlers::handle_export).fallback(method_not_allowed),
        )
        .with_state(state)
}
