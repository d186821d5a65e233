//! Cache-aside orchestration for geocoding lookups.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{derive_cache_key, CacheStore, MemoryCacheStore, CACHE_NAMESPACE};
use crate::config::Config;
use crate::models::RawResponse;

use super::error::GeocodeError;
use super::response::GeocodeResponse;
use super::transport::{HttpTransport, ReqwestTransport};

/// Statuses the service uses to signal a well-formed, answerable query.
/// `ZERO_RESULTS` means "no matches", which is not a failure; callers
/// inspect result emptiness themselves.
const SUCCESS_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

/// Client for the geocoding service with cache-aside result caching.
///
/// Each lookup checks the cache first, hits the network on a miss, and
/// stores the raw response body on success. Concurrent identical lookups
/// under a miss each go to the network independently; there is no
/// single-flight coalescing.
pub struct Geocoder {
    config: Config,
    transport: Arc<dyn HttpTransport>,
    cache: Arc<dyn CacheStore>,
}

impl Geocoder {
    /// Create a geocoder with the bundled reqwest transport and in-memory
    /// cache store.
    pub fn new(config: Config) -> Result<Self, GeocodeError> {
        let transport = Arc::new(ReqwestTransport::new(config.request_timeout)?);
        let cache = Arc::new(MemoryCacheStore::new(config.cache_max_capacity));
        Ok(Self::with_parts(config, transport, cache))
    }

    /// Create a geocoder with an injected transport and cache store.
    pub fn with_parts(
        config: Config,
        transport: Arc<dyn HttpTransport>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            config,
            transport,
            cache,
        }
    }

    /// Forward geocoding: resolve a free-text address to coordinates.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResponse, GeocodeError> {
        let identifier = format!("geocode_{}", address);
        let params = [("address", address.to_string())];
        self.lookup(&identifier, &params).await
    }

    /// Reverse geocoding: resolve coordinates to a candidate address.
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<GeocodeResponse, GeocodeError> {
        let identifier = format!("reverse_{}_{}", lat, lng);
        let params = [("latlng", format!("{},{}", lat, lng))];
        self.lookup(&identifier, &params).await
    }

    /// Invalidate cached responses.
    ///
    /// With an identifier (the same string a lookup derives its key from,
    /// e.g. `geocode_<address>`), deletes that single entry. With `None`,
    /// deletes every entry under this crate's namespace prefix and nothing
    /// else.
    pub async fn clear_cache(&self, identifier: Option<&str>) -> Result<(), GeocodeError> {
        match identifier {
            Some(id) => {
                let key = derive_cache_key(id, &self.config.api_key);
                self.cache.delete(&key).await?;
                debug!("Invalidated cache entry for identifier: {}", id);
            }
            None => {
                self.cache.delete_prefix(CACHE_NAMESPACE).await?;
                info!("Invalidated all geocoding cache entries");
            }
        }
        Ok(())
    }

    /// Shared cache-aside path for both lookup directions.
    async fn lookup(
        &self,
        identifier: &str,
        params: &[(&str, String)],
    ) -> Result<GeocodeResponse, GeocodeError> {
        let key = derive_cache_key(identifier, &self.config.api_key);

        if self.config.caching_enabled {
            // Only successful responses are ever stored, so a hit needs no
            // status re-validation.
            if let Some(raw) = self.cached_response(&key).await {
                debug!("Cache hit for identifier: {}", identifier);
                return Ok(GeocodeResponse::new(raw));
            }
            debug!("Cache miss for identifier: {}", identifier);
        }

        let mut query: Vec<(&str, String)> = params.to_vec();
        query.push(("key", self.config.api_key.clone()));

        let body = self.transport.get(&self.config.endpoint, &query).await?;
        let raw: RawResponse = serde_json::from_str(&body)?;

        if !SUCCESS_STATUSES.contains(&raw.status.as_str()) {
            return Err(GeocodeError::ApiStatus(raw.status.clone()));
        }

        if self.config.caching_enabled {
            // The raw body is stored, never the normalized view, so the
            // cache format stays independent of the accessor surface.
            match self.cache.set(&key, body, self.config.cache_ttl).await {
                Ok(()) => info!("Cached response for identifier: {}", identifier),
                Err(e) => warn!("Failed to cache response for {}: {}", identifier, e),
            }
        }

        Ok(GeocodeResponse::new(raw))
    }

    /// Read a cached raw document. Store errors and undecodable entries
    /// degrade to a miss rather than failing the lookup; the store is a
    /// shared resource and entries may vanish or rot at any time.
    async fn cached_response(&self, key: &str) -> Option<RawResponse> {
        let body = match self.cache.get(key).await {
            Ok(value) => value?,
            Err(e) => {
                warn!("Cache read failed, treating as miss: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&body) {
            Ok(raw) => Some(raw),
            Err(e) => {
                warn!("Cached entry undecodable, treating as miss: {}", e);
                None
            }
        }
    }
}
