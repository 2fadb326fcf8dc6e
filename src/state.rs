//! Shared application state.
//!
//! Holds the configuration loaded at startup and the key-value store handle,
//! both read-only for the lifetime of the process.

use crate::config::ConfigV1;
use crate::store::KvStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup, including the shared token.
    pub config: Arc<ConfigV1>,
    /// Key-value store values are served from.
    pub store: Arc<dyn KvStore>,
}
