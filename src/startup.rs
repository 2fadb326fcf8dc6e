//! Application startup and server initialization.
//!
//! Builds the key-value store from the configuration, wires it into the
//! shared state and serves the router on the configured address.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ConfigV1;
use crate::routes;
use crate::state::AppState;
use crate::store::create_store;

/// Builds the shared state for `config`, creating its store backend.
pub async fn build_state(config: Arc<ConfigV1>) -> Result<AppState, String> {
    let store = create_store(&config.store).await?;

    if !store.is_enabled() {
        warn!("No key-value store is bound; every lookup will fail with 500.");
    }
    if config.uses_default_token() {
        warn!("No token configured, falling back to the default token. Set TOKEN before exposing this service.");
    }

    Ok(AppState { config, store })
}

/// Initializes and runs the application server.
///
/// # Errors
///
/// Returns an error if the store cannot be created, the server fails to bind
/// to the configured address, or the server stops with an I/O error.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(config.clone()).await?;
    info!(
        store = state.store.name(),
        "Starting server on {}", config.bind_address
    );

    let app = routes::create_router(state);
    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
