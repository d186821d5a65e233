pub mod keys;
pub mod memory;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use keys::{derive_cache_key, CACHE_NAMESPACE};
pub use memory::MemoryCacheStore;

/// A cache store operation failed.
#[derive(Error, Debug)]
#[error("cache store error: {0}")]
pub struct CacheError(pub String);

/// Key-value store used for cached geocoding responses.
///
/// The store is treated as an external, potentially shared resource: it may
/// evict or expire entries at any time, and the client tolerates entries
/// disappearing between a hit-check and a read (treated as a miss).
/// Implementations are expected to honor the per-entry TTL passed to `set`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a cached value. `Ok(None)` means a miss.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value under `key`, expiring it after `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Remove a single entry. Returns whether an entry was present.
    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// Remove every entry whose key starts with `prefix`, leaving all other
    /// entries in the store untouched. Returns whether the sweep ran.
    async fn delete_prefix(&self, prefix: &str) -> Result<bool, CacheError>;
}
