//! Catalog fetch errors.

use std::io;

use reqwest::StatusCode;
use storefront::catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("catalog request failed")]
    Http(#[from] reqwest::Error),

    #[error("catalog request returned {0}")]
    Status(StatusCode),

    #[error("catalog file could not be read")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
