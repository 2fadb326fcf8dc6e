use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::store::cloudflare_store::CloudflareKvConfig;
use crate::store::memory_store::MemoryStoreConfig;
use crate::store::mongodb_store::MongoKvConfig;

/// A wrapper for the store configuration:
/// - enabled: if false, the store is treated as unbound (NoStore).
/// - backend: the actual key-value backend (memory, Cloudflare KV, MongoDB).
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct StoreConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub backend: Option<StoreBackend>,
}

/// The key-value backends. We differentiate them via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
#[serde(tag = "type")]
pub enum StoreBackend {
    #[serde(rename = "memory")]
    Memory(MemoryStoreConfig),
    #[serde(rename = "cloudflare")]
    Cloudflare(CloudflareKvConfig),
    #[serde(rename = "mongo")]
    MongoDB(MongoKvConfig),
}
