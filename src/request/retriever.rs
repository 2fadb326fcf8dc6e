use std::time::Duration;

use tracing::debug;

use super::RequestError;
use crate::pages::render_config_page;
use crate::response::ResponseEnvelope;
use crate::store::{KvStore, LookupOptions};

/// Key answered with the configuration page instead of a store lookup.
pub const RESERVED_CONFIG_KEY: &str = "config";

/// Cache hint passed with every store lookup.
pub const STORE_CACHE_TTL: Duration = Duration::from_secs(60);

/// Resolves a normalized key to a response: the config page, or the stored value.
pub async fn retrieve(
    store: &dyn KvStore,
    key: &str,
    host: &str,
    token: &str,
) -> Result<ResponseEnvelope, RequestError> {
    if key == RESERVED_CONFIG_KEY {
        debug!(host, "Serving config page");
        return Ok(ResponseEnvelope::html(render_config_page(host, token)));
    }

    let value = store
        .get(key, LookupOptions::with_cache_ttl(STORE_CACHE_TTL))
        .await?;

    match value {
        Some(value) => {
            debug!(key, store = store.name(), bytes = value.len(), "Serving stored value");
            Ok(ResponseEnvelope::text(value))
        }
        None => {
            debug!(key, store = store.name(), "Key not found");
            Err(RequestError::NotFound)
        }
    }
}
