//! HTTP route definitions and handlers.
//!
//! `/health` is served explicitly; every other path goes to the key lookup
//! handler, which interprets the path itself.

mod health_routes;
mod kv_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes::routes())
        .fallback(kv_routes::serve_key)
        .with_state(state)
}
