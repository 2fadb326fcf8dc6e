use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use cached::{Cached, TimedCache};
use reqwest::{StatusCode, Url};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{KvStore, LookupOptions, StoreError};
use crate::utils::log_throttle::LogThrottle;

const CACHE_HIT_LOG_WINDOW: Duration = Duration::from_secs(30);

/// Connection details for a Cloudflare Workers KV namespace, read over the REST API.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct CloudflareKvConfig {
    pub account_id: String,
    pub namespace_id: String,
    pub api_token: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
}

fn default_api_base() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

fn default_timeout_in_ms() -> u64 {
    5000
}

/// A store that reads values from Cloudflare KV.
///
/// Found values are kept in a timed cache whose lifespan comes from the
/// lookup's cache hint, one cache per distinct lifespan. Misses are never cached.
pub struct CloudflareKvStore {
    config: CloudflareKvConfig,
    base: Url,
    client: reqwest::Client,
    caches: Mutex<HashMap<u64, TimedCache<String, String>>>,
    cache_hit_log: LogThrottle,
}

impl CloudflareKvStore {
    pub fn new(config: &CloudflareKvConfig) -> Result<Self, String> {
        info!(
            "Creating Cloudflare KV store for account '{}', namespace '{}'",
            config.account_id, config.namespace_id
        );
        let base = Url::parse(&config.api_base)
            .map_err(|e| format!("Invalid Cloudflare api_base '{}': {}", config.api_base, e))?;
        if base.cannot_be_a_base() {
            return Err(format!(
                "Invalid Cloudflare api_base '{}': not a base URL",
                config.api_base
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            config: config.clone(),
            base,
            client,
            caches: Mutex::new(HashMap::new()),
            cache_hit_log: LogThrottle::new(CACHE_HIT_LOG_WINDOW),
        })
    }

    fn value_url(&self, key: &str) -> Result<Url, StoreError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Backend("Cloudflare api_base is not a base URL".into()))?
            .pop_if_empty()
            .extend([
                "accounts",
                self.config.account_id.as_str(),
                "storage",
                "kv",
                "namespaces",
                self.config.namespace_id.as_str(),
                "values",
                key,
            ]);
        Ok(url)
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>, StoreError> {
        let url = self.value_url(key)?;
        debug!("Sending Cloudflare KV request to: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(|e| StoreError::Backend(format!("Error sending request: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Backend(format!(
                "Unexpected status code: {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Backend(format!("Error reading response body: {}", e)))?;
        Ok(Some(body))
    }

    async fn cached_value(&self, lifespan: u64, key: &str) -> Option<String> {
        let mut caches = self.caches.lock().await;
        caches
            .get_mut(&lifespan)
            .and_then(|cache| cache.cache_get(&key.to_string()).cloned())
    }

    /// Caches `value` and drops every expired entry of the same lifespan.
    async fn remember(&self, lifespan: u64, key: &str, value: &str) {
        let mut caches = self.caches.lock().await;
        let cache = caches
            .entry(lifespan)
            .or_insert_with(|| TimedCache::with_lifespan(lifespan));
        cache.flush();
        cache.cache_set(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KvStore for CloudflareKvStore {
    async fn get(&self, key: &str, options: LookupOptions) -> Result<Option<String>, StoreError> {
        let Some(lifespan) = options
            .cache_ttl
            .map(|ttl| ttl.as_secs())
            .filter(|secs| *secs > 0)
        else {
            return self.fetch(key).await;
        };

        if let Some(value) = self.cached_value(lifespan, key).await {
            if let Some(suppressed_count) = self.cache_hit_log.should_emit() {
                debug!(
                    event_name = "store.cloudflare.cache.hit",
                    event_domain = "store",
                    namespace = self.config.namespace_id.as_str(),
                    cache_ttl_seconds = lifespan,
                    suppressed_count,
                    "value served from cache"
                );
            }
            return Ok(Some(value));
        }

        let value = self.fetch(key).await?;
        if let Some(value) = &value {
            self.remember(lifespan, key, value).await;
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        "cloudflare"
    }
}
