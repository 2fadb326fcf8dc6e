use async_trait::async_trait;

use super::{KvStore, LookupOptions, StoreError};

/// A placeholder store used when no key-value namespace is bound.
/// Requests are rejected with a 500 before they reach it; `get` fails as well.
pub struct NoStore;

impl NoStore {
    pub fn new() -> Self {
        NoStore
    }
}

impl Default for NoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for NoStore {
    async fn get(&self, _key: &str, _options: LookupOptions) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unbound("KV namespace is not bound".into()))
    }

    fn name(&self) -> &str {
        "no-store"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
