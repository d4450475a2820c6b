use reqwest::Client;

use crate::catalog::error::FetchError;
use crate::catalog::record::{decode_catalog, Coffee};

/// HTTP client for the catalog collection endpoint.
///
/// One GET per fetch, no parameters, no body, no auth; the full collection
/// comes back in a single response. Cloning shares the underlying
/// connection pool, so overlapping fetches stay cheap.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the full collection.
    ///
    /// Decoding happens here so the UI only ever sees typed records.
    pub async fn fetch(&self) -> Result<Vec<Coffee>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "catalog endpoint returned an error");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let coffees = decode_catalog(&body)?;
        tracing::debug!(count = coffees.len(), "catalog fetched");
        Ok(coffees)
    }
}
