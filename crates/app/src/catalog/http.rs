//! HTTP catalog provider.

use async_trait::async_trait;
use reqwest::Client;
use storefront::catalog::Catalog;
use tracing::debug;

use super::{CatalogProvider, FetchError};

/// Mock API the storefront reads its products from.
pub const DEFAULT_CATALOG_URL: &str = "https://mocki.io/v1/51f98500-3824-43da-a172-fa2f2ec771e8";

/// Fetches the catalog as a JSON array over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogProvider {
    url: String,
    http: Client,
}

impl HttpCatalogProvider {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpCatalogProvider {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        let catalog = Catalog::from_json(&body)?;

        debug!(url = %self.url, products = catalog.len(), "catalog fetched");

        Ok(catalog)
    }
}
