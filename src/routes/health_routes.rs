//! Health check endpoints.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Returns 200 `OK` while a store is bound, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.store.is_enabled() {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "KV namespace is not bound")
    }
}
