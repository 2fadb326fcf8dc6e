use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{KvStore, LookupOptions, StoreError};

/// The config struct for MongoDB connections.
/// Contains the URI, database name and the collection holding the entries.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
pub struct MongoKvConfig {
    pub uri: String,
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    "entries".to_string()
}

/// Document shape for a stored entry.
#[derive(Serialize, Deserialize, Clone, Debug)]
struct EntryDocument {
    key: String,
    value: String,
}

/// A read-only `KvStore` over a MongoDB collection of `{ key, value }` documents.
pub struct MongoKvStore {
    collection: Collection<EntryDocument>,
}

impl MongoKvStore {
    /// Creates a new `MongoKvStore` from the given config.
    /// The driver connects lazily, so this only fails on an unusable URI.
    pub async fn new(config: &MongoKvConfig) -> Result<Self, String> {
        info!("Connecting to MongoDB at URI: {}", config.uri);

        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| format!("Failed to parse MongoDB URI: {}", e))?;
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| format!("Failed to create MongoDB client: {}", e))?;

        let collection = client
            .database(&config.database)
            .collection::<EntryDocument>(&config.collection);

        Ok(Self { collection })
    }
}

#[async_trait]
impl KvStore for MongoKvStore {
    async fn get(&self, key: &str, _options: LookupOptions) -> Result<Option<String>, StoreError> {
        debug!("Looking up key '{}' in MongoDB", key);
        let entry = self
            .collection
            .find_one(doc! { "key": key }, None)
            .await
            .map_err(|e| StoreError::Backend(format!("MongoDB lookup failed: {}", e)))?;
        Ok(entry.map(|entry| entry.value))
    }

    fn name(&self) -> &str {
        "mongo"
    }
}
