//! Storefront service.

use jiff::Timestamp;
use storefront::{
    cart::{CartLineItem, CartObserver, CartStore, CartUpdate, QuantitySelector},
    catalog::{Catalog, Shelf},
    pricing::CartSummary,
    products::Product,
    storage::CartStorage,
};
use tracing::{info, instrument};

use crate::{catalog::CatalogProvider, errors::StorefrontError};

/// Notice shown after a new line item is added.
pub const ITEM_ADDED_NOTICE: &str = "Item added to cart";

/// Logs the cart badge count whenever it changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeLogger;

impl CartObserver for BadgeLogger {
    fn on_count_changed(&mut self, count: usize) {
        info!(count, "cart badge count changed");
    }
}

/// A product together with its quantity selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,

    /// `None` when the product is out of stock
    pub quantity: Option<QuantitySelector>,
}

impl ProductDetail {
    #[must_use]
    pub fn new(product: Product) -> Self {
        let quantity = QuantitySelector::for_product(&product);

        Self { product, quantity }
    }
}

/// Catalog browsing and cart operations over a catalog provider and cart storage.
///
/// The catalog is fetched from the provider on every call and never cached,
/// so totals always reflect current prices.
#[derive(Debug)]
pub struct Storefront<P, S> {
    provider: P,
    cart: CartStore<S, BadgeLogger>,
}

impl<P: CatalogProvider, S: CartStorage> Storefront<P, S> {
    pub fn new(provider: P, storage: S) -> Self {
        Self {
            provider,
            cart: CartStore::with_observer(storage, BadgeLogger),
        }
    }

    /// Fetch the current catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Fetch`] if the provider fails.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<Catalog, StorefrontError> {
        Ok(self.provider.fetch_catalog().await?)
    }

    /// Products on a shelf, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Fetch`] if the provider fails.
    #[instrument(skip(self))]
    pub async fn shelf(
        &self,
        shelf: &Shelf,
        reference: Timestamp,
    ) -> Result<Vec<Product>, StorefrontError> {
        let catalog = self.catalog().await?;

        Ok(catalog.shelf(shelf, reference).into_iter().cloned().collect())
    }

    /// A single product with its quantity selector.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Fetch`]: the provider failed.
    /// - [`StorefrontError::ProductNotFound`]: no product has this id.
    #[instrument(skip(self))]
    pub async fn product(&self, product_id: &str) -> Result<ProductDetail, StorefrontError> {
        let catalog = self.catalog().await?;

        catalog
            .get(product_id)
            .cloned()
            .map(ProductDetail::new)
            .ok_or_else(|| StorefrontError::ProductNotFound(product_id.to_string()))
    }

    /// Add a line item or replace its quantity. The product is not checked
    /// against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::AddToCart`] for invalid input or a storage failure.
    pub fn add_to_cart(
        &mut self,
        product_id: &str,
        selected_size: &str,
        quantity: u32,
    ) -> Result<CartUpdate, StorefrontError> {
        self.cart
            .add_or_update(product_id, selected_size, quantity)
            .map_err(StorefrontError::AddToCart)
    }

    /// Add a product the way the detail view does: the size defaults to the
    /// first listed size and the quantity is clamped to the available stock.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Fetch`]: the provider failed.
    /// - [`StorefrontError::ProductNotFound`]: no product has this id.
    /// - [`StorefrontError::OutOfStock`]: the product has no stock.
    /// - [`StorefrontError::AddToCart`]: the cart rejected or failed to save the item.
    #[instrument(skip(self))]
    pub async fn add_product_to_cart(
        &mut self,
        product_id: &str,
        selected_size: Option<&str>,
        quantity: u32,
    ) -> Result<CartUpdate, StorefrontError> {
        let detail = self.product(product_id).await?;

        let Some(mut selector) = detail.quantity else {
            return Err(StorefrontError::OutOfStock(product_id.to_string()));
        };

        let quantity = selector.set(quantity);
        let size = selected_size
            .or_else(|| detail.product.default_size())
            .unwrap_or_default()
            .to_string();

        self.add_to_cart(product_id, &size, quantity)
    }

    /// Remove every size of a product from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::RemoveFromCart`] for invalid input or a storage failure.
    pub fn remove_from_cart(&mut self, product_id: &str) -> Result<usize, StorefrontError> {
        self.cart
            .remove(product_id)
            .map_err(StorefrontError::RemoveFromCart)
    }

    /// Number of line items, as shown on the cart badge.
    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    /// Line items in the cart.
    pub fn cart_items(&self) -> &[CartLineItem] {
        self.cart.list()
    }

    /// Cart entries and totals against a freshly fetched catalog.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Fetch`]: the provider failed.
    /// - [`StorefrontError::Pricing`]: an amount was out of range.
    #[instrument(skip(self))]
    pub async fn cart_summary(&self) -> Result<CartSummary, StorefrontError> {
        let catalog = self.catalog().await?;

        Ok(CartSummary::new(self.cart.list(), &catalog)?)
    }
}
