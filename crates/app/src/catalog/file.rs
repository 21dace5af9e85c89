//! File catalog provider.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use storefront::catalog::Catalog;
use tracing::debug;

use super::{CatalogProvider, FetchError};

/// Reads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for FileCatalogProvider {
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let payload = tokio::fs::read_to_string(&self.path).await?;
        let catalog = Catalog::from_json(&payload)?;

        debug!(path = %self.path.display(), products = catalog.len(), "catalog loaded");

        Ok(catalog)
    }
}
