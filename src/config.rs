// Configuration for the geocoding client:
// - API credential and endpoint URL
// - Cache settings (enabled flag, TTL, capacity)
// - Request timeout

use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Default endpoint for the Google geocoding JSON API.
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub caching_enabled: bool,
    pub cache_ttl: Duration,
    pub cache_max_capacity: u64,
    pub request_timeout: Duration,
}

impl Config {
    /// Create a configuration with the given API credential and defaults
    /// for everything else (caching on, 24h TTL, 15s request timeout).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            caching_enabled: true,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_max_capacity: DEFAULT_CACHE_CAPACITY,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Self {
        dotenv().ok();

        let api_key = env::var("GEOCODING_API_KEY").unwrap_or_default();
        let endpoint = env::var("GEOCODING_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let caching_enabled = env::var("GEOCODING_CACHE_ENABLED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        let cache_ttl = env::var("GEOCODING_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS));
        let cache_max_capacity = env::var("GEOCODING_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CACHE_CAPACITY);
        let request_timeout = env::var("GEOCODING_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            api_key,
            endpoint,
            caching_enabled,
            cache_ttl,
            cache_max_capacity,
            request_timeout,
        }
    }

    /// Disable result caching; every lookup goes to the network.
    pub fn without_caching(mut self) -> Self {
        self.caching_enabled = false;
        self
    }

    /// Override the cache TTL applied to stored responses.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
