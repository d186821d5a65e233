use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

use super::error::GeocodeError;

/// Outbound HTTP boundary for the geocoding service.
///
/// Implementations issue a GET against the endpoint with the given query
/// pairs and return the raw response body; decoding happens in the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<String, GeocodeError>;
}

/// Production transport backed by a pooled reqwest client with a bounded
/// per-request timeout. Non-success HTTP statuses are reported as transport
/// failures rather than handed to the JSON decoder.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<String, GeocodeError> {
        debug!("GET {} with {} query parameters", url, params.len());

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(body)
    }
}
