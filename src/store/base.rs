use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use super::{
    cloudflare_store::CloudflareKvStore, memory_store::MemoryStore, mongodb_store::MongoKvStore,
    no_store::NoStore,
};
use crate::config::{StoreBackend, StoreConfig};

/// Per-lookup hints passed to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// How long the backend may serve a cached copy of the value.
    pub cache_ttl: Option<Duration>,
}

impl LookupOptions {
    pub fn with_cache_ttl(ttl: Duration) -> Self {
        Self {
            cache_ttl: Some(ttl),
        }
    }
}

/// Failures a backend can report for a lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No key-value namespace is bound to the service.
    #[error("{0}")]
    Unbound(String),
    /// The backend was reachable in principle but the lookup failed.
    #[error("{0}")]
    Backend(String),
}

/// The KvStore trait abstracts read-only access to a key-value namespace.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key is absent.
    async fn get(&self, key: &str, options: LookupOptions) -> Result<Option<String>, StoreError>;

    /// Short backend name used in logs.
    fn name(&self) -> &str;

    /// Whether a namespace is bound. Only `NoStore` reports `false`.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Creates a concrete store implementation based on the StoreConfig.
/// If `store.enabled = false`, returns NoStore. Otherwise, picks the specified backend.
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn KvStore>, String> {
    if !config.enabled {
        info!("Key-value store is disabled. Using NoStore.");
        return Ok(Arc::new(NoStore::new()));
    }

    match &config.backend {
        Some(StoreBackend::Memory(memory_config)) => {
            info!(
                "Created in-memory store with {} entries.",
                memory_config.entries.len()
            );
            Ok(Arc::new(MemoryStore::new(memory_config)))
        }
        Some(StoreBackend::Cloudflare(cf_config)) => {
            let store = CloudflareKvStore::new(cf_config).map_err(|e| {
                error!("Failed to create Cloudflare KV store: {}", e);
                e
            })?;
            info!("Successfully created Cloudflare KV store.");
            Ok(Arc::new(store))
        }
        Some(StoreBackend::MongoDB(mongo_config)) => {
            let store = MongoKvStore::new(mongo_config).await.map_err(|e| {
                error!("Failed to create MongoDB store: {}", e);
                e
            })?;
            info!("Successfully created MongoDB store.");
            Ok(Arc::new(store))
        }
        None => {
            error!("Store is enabled, but no backend config is provided!");
            Err("store is enabled, but no backend config is provided".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_store::MemoryStoreConfig;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_disabled_store_is_no_store() {
        let config = StoreConfig {
            enabled: false,
            backend: None,
        };
        let store = create_store(&config).await.expect("disabled store should build");
        assert!(!store.is_enabled());
        assert_eq!(store.name(), "no-store");
    }

    #[tokio::test]
    async fn test_enabled_store_without_backend_fails() {
        let config = StoreConfig {
            enabled: true,
            backend: None,
        };
        assert!(create_store(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_memory_backend_is_created() {
        let mut entries = HashMap::new();
        entries.insert("hello".to_string(), "world".to_string());
        let config = StoreConfig {
            enabled: true,
            backend: Some(StoreBackend::Memory(MemoryStoreConfig { entries })),
        };
        let store = create_store(&config).await.expect("memory store should build");
        assert!(store.is_enabled());
        assert_eq!(
            store.get("hello", LookupOptions::default()).await,
            Ok(Some("world".to_string()))
        );
    }
}
