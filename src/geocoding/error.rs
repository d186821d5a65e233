use thiserror::Error;

use crate::cache::CacheError;

/// Failure of a single geocoding operation, tagged by the stage that failed.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The network call itself failed (connection, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The service answered with a status other than `OK` or `ZERO_RESULTS`
    /// (e.g. OVER_QUERY_LIMIT, REQUEST_DENIED, INVALID_REQUEST).
    #[error("geocoding service returned status {0}")]
    ApiStatus(String),

    /// An explicit cache invalidation failed. Store failures on the lookup
    /// path never surface here; they degrade to cache misses instead.
    #[error("cache store error: {0}")]
    Cache(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Transport(err.to_string())
    }
}

impl From<CacheError> for GeocodeError {
    fn from(err: CacheError) -> Self {
        GeocodeError::Cache(err.0)
    }
}
