pub mod base;
pub mod cloudflare_store;
pub mod memory_store;
pub mod mongodb_store;
pub mod no_store;

// Re-export the primary Store items so code outside can do
// "use crate::store::{KvStore, create_store};"
pub use base::{create_store, KvStore, LookupOptions, StoreError};
