//! The lookup pipeline: parse the path, check the token, resolve the key.

pub mod error;
pub mod path;
pub mod retriever;
pub mod token;

pub use error::RequestError;
pub use path::{parse_path, ParsedPath};
pub use retriever::retrieve;
pub use token::authenticate;

use tracing::{debug, error};

use crate::response::ResponseEnvelope;
use crate::state::AppState;

/// Handles one lookup request end to end. Never fails: errors become responses.
pub async fn handle_request(state: &AppState, host: &str, path: &str) -> ResponseEnvelope {
    match resolve(state, host, path).await {
        Ok(envelope) => envelope,
        Err(e) => {
            if e.status().is_server_error() {
                error!(error = %e, path, "Request failed");
            } else {
                debug!(status = e.status().as_u16(), path, "Request rejected");
            }
            e.into()
        }
    }
}

/// Message returned for every request while no store is bound.
pub const UNBOUND_STORE_MESSAGE: &str = "KV namespace is not bound";

async fn resolve(state: &AppState, host: &str, path: &str) -> Result<ResponseEnvelope, RequestError> {
    if !state.store.is_enabled() {
        return Err(RequestError::Configuration(UNBOUND_STORE_MESSAGE.to_string()));
    }

    let parsed = parse_path(path)?;
    authenticate(&parsed.token, &state.config.token)?;
    let key = parsed.require_key()?;
    retrieve(state.store.as_ref(), key, host, &parsed.token).await
}
