//! Storefront service errors.

use storefront::{cart::CartError, pricing::PricingError};
use thiserror::Error;

use crate::catalog::FetchError;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("failed to add product to cart")]
    AddToCart(#[source] CartError),

    #[error("failed to remove product from cart")]
    RemoveFromCart(#[source] CartError),

    #[error("failed to fetch the catalog")]
    Fetch(#[from] FetchError),

    #[error("failed to total the cart")]
    Pricing(#[from] PricingError),

    #[error("product {0} not found")]
    ProductNotFound(String),

    #[error("product {0} is out of stock")]
    OutOfStock(String),
}

impl StorefrontError {
    /// Notice shown to the shopper when the operation fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "Failed to add product to cart. Please try again later.",
            Self::RemoveFromCart(_) => {
                "Failed to remove product from cart. Please try again later."
            }
            Self::Fetch(_) | Self::Pricing(_) => "Something went wrong. Please try again later.",
            Self::ProductNotFound(_) => "Product not found.",
            Self::OutOfStock(_) => "Out of stock",
        }
    }
}
