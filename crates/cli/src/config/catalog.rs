//! Catalog Source Config

use std::path::PathBuf;

use async_trait::async_trait;
use clap::Args;
use storefront::catalog::Catalog;
use storefront_app::catalog::{
    CatalogProvider, DEFAULT_CATALOG_URL, FetchError, FileCatalogProvider, HttpCatalogProvider,
};

/// Where the product catalog is read from.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Catalog API URL
    #[arg(long, env = "CATALOG_URL", default_value = DEFAULT_CATALOG_URL, global = true)]
    pub catalog_url: String,

    /// Read the catalog from a JSON file instead of the API
    #[arg(long, env = "CATALOG_FILE", global = true)]
    pub catalog_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Build the provider for the configured source. A file takes precedence over the URL.
    pub fn provider(&self) -> CatalogSource {
        match &self.catalog_file {
            Some(path) => CatalogSource::File(FileCatalogProvider::new(path.clone())),
            None => CatalogSource::Http(HttpCatalogProvider::new(self.catalog_url.clone())),
        }
    }
}

/// The configured catalog provider.
#[derive(Debug)]
pub enum CatalogSource {
    Http(HttpCatalogProvider),
    File(FileCatalogProvider),
}

#[async_trait]
impl CatalogProvider for CatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        match self {
            Self::Http(provider) => provider.fetch_catalog().await,
            Self::File(provider) => provider.fetch_catalog().await,
        }
    }
}
