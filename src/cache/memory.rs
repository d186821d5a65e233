//! In-memory cache store implementation using Moka

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use tracing::debug;

use super::{CacheError, CacheStore};

/// A stored response body together with its own expiration.
#[derive(Clone)]
struct CachedValue {
    body: String,
    ttl: Duration,
}

/// Expiry policy that honors the TTL each entry was inserted with.
struct PerEntryTtl;

impl Expiry<String, CachedValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Bundled [`CacheStore`] backed by an in-process Moka cache.
#[derive(Clone)]
pub struct MemoryCacheStore {
    cache: Cache<String, CachedValue>,
}

impl MemoryCacheStore {
    pub fn new(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .expire_after(PerEntryTtl)
            .support_invalidation_closures()
            .build();

        Self { cache }
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.cache.get(key).await.map(|v| v.body))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.cache
            .insert(key.to_string(), CachedValue { body: value, ttl })
            .await;
        debug!("Stored cache entry {} with TTL {:?}", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<bool, CacheError> {
        let prefix = prefix.to_string();
        self.cache
            .invalidate_entries_if(move |k, _| k.starts_with(&prefix))
            .map_err(|e| CacheError(e.to_string()))?;

        // Flush the pending invalidation so deletions are observable
        // immediately after this call returns.
        self.cache.run_pending_tasks().await;
        Ok(true)
    }
}
