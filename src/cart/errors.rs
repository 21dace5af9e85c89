//! Cart errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id was empty.
    #[error("productId is not available")]
    MissingProductId,

    /// The quantity was zero.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// The updated cart could not be persisted.
    #[error("failed to persist cart")]
    Storage(#[from] StorageError),
}

impl CartError {
    /// Whether the caller supplied unusable input, as opposed to a storage failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MissingProductId | Self::InvalidQuantity)
    }
}
