pub mod cache;
pub mod config;
pub mod geocoding;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use cache::{derive_cache_key, CacheError, CacheStore, MemoryCacheStore, CACHE_NAMESPACE};
pub use config::Config;
pub use geocoding::client::Geocoder;
pub use geocoding::error::GeocodeError;
pub use geocoding::response::{Coordinates, GeocodeResponse};
pub use geocoding::transport::{HttpTransport, ReqwestTransport};
pub use models::{GeocodeResult, RawResponse, StructuredAddress};
