use std::collections::HashMap;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{KvStore, LookupOptions, StoreError};

/// Static key/value pairs declared directly in the configuration.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone, Default)]
pub struct MemoryStoreConfig {
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

/// A read-only store backed by the configured entries.
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new(config: &MemoryStoreConfig) -> Self {
        Self {
            entries: config.entries.clone(),
        }
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str, _options: LookupOptions) -> Result<Option<String>, StoreError> {
        let value = self.entries.get(key).cloned();
        debug!(key, found = value.is_some(), "memory store lookup");
        Ok(value)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> MemoryStore {
        let mut entries = HashMap::new();
        entries.insert("readme".to_string(), "# hello".to_string());
        entries.insert("empty".to_string(), String::new());
        MemoryStore::new(&MemoryStoreConfig { entries })
    }

    #[tokio::test]
    async fn test_memory_store_hit() {
        let store = create_test_store();
        let value = store.get("readme", LookupOptions::default()).await;
        assert_eq!(value, Ok(Some("# hello".to_string())));
    }

    #[tokio::test]
    async fn test_memory_store_miss() {
        let store = create_test_store();
        let value = store.get("missing", LookupOptions::default()).await;
        assert_eq!(value, Ok(None));
    }

    /// An empty value is still a stored value, not a miss.
    #[tokio::test]
    async fn test_memory_store_empty_value() {
        let store = create_test_store();
        let value = store.get("empty", LookupOptions::default()).await;
        assert_eq!(value, Ok(Some(String::new())));
    }

    /// Lookups are exact; normalization is the caller's job.
    #[tokio::test]
    async fn test_memory_store_is_case_sensitive() {
        let store = create_test_store();
        let value = store.get("README", LookupOptions::default()).await;
        assert_eq!(value, Ok(None));
    }
}
