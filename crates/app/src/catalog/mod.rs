//! Catalog providers

use async_trait::async_trait;
use mockall::automock;
use storefront::catalog::Catalog;

mod errors;
mod file;
mod http;

pub use errors::FetchError;
pub use file::FileCatalogProvider;
pub use http::{DEFAULT_CATALOG_URL, HttpCatalogProvider};

/// Source of the authoritative product list.
#[automock]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full product list.
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError>;
}
