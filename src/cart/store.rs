//! Cart Store

use tracing::{debug, warn};

use crate::{
    cart::{
        errors::CartError,
        items::{CartLineItem, decode, encode},
        observer::{CartObserver, NoopObserver},
    },
    storage::{CartStorage, STORAGE_KEY, StorageError},
};

/// Outcome of [`CartStore::add_or_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartUpdate {
    /// A new line item was appended.
    Added,

    /// An existing line item had its quantity replaced.
    Updated,
}

/// Cart line items backed by a [`CartStorage`].
///
/// Holds at most one line item per product and size. Every mutation writes the
/// whole list back to storage before it is applied in memory, so a failed
/// write leaves the store unchanged.
#[derive(Debug)]
pub struct CartStore<S, O = NoopObserver> {
    storage: S,
    observer: O,
    items: Vec<CartLineItem>,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the cart from storage.
    ///
    /// Missing, unreadable or malformed data loads as an empty cart.
    pub fn load(storage: S) -> Self {
        Self::with_observer(storage, NoopObserver)
    }
}

impl<S: CartStorage, O: CartObserver> CartStore<S, O> {
    /// Load the cart from storage, reporting count changes to `observer`.
    pub fn with_observer(storage: S, observer: O) -> Self {
        let items = read_line_items(&storage);

        Self {
            storage,
            observer,
            items,
        }
    }

    /// Add a line item, or replace the quantity of the one with the same product and size.
    ///
    /// # Errors
    ///
    /// - [`CartError::MissingProductId`]: `product_id` is empty.
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::Storage`]: the updated cart could not be persisted.
    pub fn add_or_update(
        &mut self,
        product_id: &str,
        selected_size: &str,
        quantity: u32,
    ) -> Result<CartUpdate, CartError> {
        ensure_product_id(product_id)?;

        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut items = self.items.clone();

        let update = if let Some(existing) = items
            .iter_mut()
            .find(|item| item.matches(product_id, selected_size))
        {
            existing.quantity = quantity;
            CartUpdate::Updated
        } else {
            items.push(CartLineItem::new(product_id, selected_size, quantity));
            CartUpdate::Added
        };

        self.commit(items)?;

        debug!(product_id, selected_size, quantity, ?update, "cart line item saved");

        Ok(update)
    }

    /// Remove every line item for `product_id`, whatever its size.
    ///
    /// Returns how many line items were removed.
    ///
    /// # Errors
    ///
    /// - [`CartError::MissingProductId`]: `product_id` is empty.
    /// - [`CartError::Storage`]: the updated cart could not be persisted.
    pub fn remove(&mut self, product_id: &str) -> Result<usize, CartError> {
        ensure_product_id(product_id)?;

        let items: Vec<CartLineItem> = self
            .items
            .iter()
            .filter(|item| item.product_id != product_id)
            .cloned()
            .collect();

        let removed = self.items.len() - items.len();

        self.commit(items)?;

        debug!(product_id, removed, "cart line items removed");

        Ok(removed)
    }

    /// Line items in the order they were first added.
    pub fn list(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of line items, not the sum of their quantities.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the backing storage and observer.
    pub fn into_parts(self) -> (S, O) {
        (self.storage, self.observer)
    }

    fn commit(&mut self, items: Vec<CartLineItem>) -> Result<(), CartError> {
        let encoded = encode(&items)?;

        self.storage.set_item(STORAGE_KEY, encoded)?;

        let previous = self.items.len();

        self.items = items;

        if self.items.len() != previous {
            self.observer.on_count_changed(self.items.len());
        }

        Ok(())
    }
}

fn ensure_product_id(product_id: &str) -> Result<(), CartError> {
    if product_id.trim().is_empty() {
        return Err(CartError::MissingProductId);
    }

    Ok(())
}

fn read_line_items<S: CartStorage>(storage: &S) -> Vec<CartLineItem> {
    let stored = storage
        .get_item(STORAGE_KEY)
        .and_then(|raw| raw.as_deref().map_or_else(|| Ok(Vec::new()), decode));

    match stored {
        Ok(items) => items,
        Err(error @ StorageError::Malformed(_)) => {
            warn!(%error, "stored cart is malformed; starting with an empty cart");
            Vec::new()
        }
        Err(error) => {
            warn!(%error, "stored cart could not be read; starting with an empty cart");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use testresult::TestResult;

    use crate::storage::MemoryStorage;

    use super::*;

    #[derive(Debug, Default)]
    struct CountRecorder {
        counts: Vec<usize>,
    }

    impl CartObserver for CountRecorder {
        fn on_count_changed(&mut self, count: usize) {
            self.counts.push(count);
        }
    }

    #[derive(Debug, Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl CartStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, _key: &str, _value: String) -> Result<(), StorageError> {
            Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "quota exceeded",
            )))
        }
    }

    #[test]
    fn add_then_update_keeps_one_line_item() -> TestResult {
        let mut cart = CartStore::load(MemoryStorage::new());

        assert_eq!(cart.add_or_update("p-1", "M", 2)?, CartUpdate::Added);
        assert_eq!(cart.add_or_update("p-1", "M", 5)?, CartUpdate::Updated);

        assert_eq!(cart.list(), [CartLineItem::new("p-1", "M", 5)]);

        Ok(())
    }

    #[test]
    fn different_sizes_are_separate_line_items() -> TestResult {
        let mut cart = CartStore::load(MemoryStorage::new());

        cart.add_or_update("p-1", "M", 1)?;
        cart.add_or_update("p-1", "L", 1)?;
        cart.add_or_update("p-2", "M", 3)?;

        assert_eq!(cart.count(), 3);

        Ok(())
    }

    #[test]
    fn remove_drops_every_size() -> TestResult {
        let mut cart = CartStore::load(MemoryStorage::new());

        cart.add_or_update("p-1", "M", 1)?;
        cart.add_or_update("p-2", "S", 1)?;
        cart.add_or_update("p-1", "L", 2)?;

        assert_eq!(cart.remove("p-1")?, 2);
        assert_eq!(cart.list(), [CartLineItem::new("p-2", "S", 1)]);
        assert_eq!(cart.remove("p-1")?, 0);

        Ok(())
    }

    #[test]
    fn empty_product_id_is_invalid_input() -> TestResult {
        let mut cart = CartStore::load(MemoryStorage::new());

        cart.add_or_update("p-1", "M", 1)?;

        let added = cart.add_or_update("", "M", 1);
        let removed = cart.remove("  ");

        assert!(matches!(added, Err(CartError::MissingProductId)));
        assert!(matches!(removed, Err(CartError::MissingProductId)));
        assert_eq!(cart.count(), 1);

        Ok(())
    }

    #[test]
    fn zero_quantity_is_invalid_input() {
        let mut cart = CartStore::load(MemoryStorage::new());

        let result = cart.add_or_update("p-1", "M", 0);

        assert!(
            matches!(&result, Err(error) if error.is_invalid_input()),
            "expected invalid input, got {result:?}"
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn mutations_are_persisted() -> TestResult {
        let mut cart = CartStore::load(MemoryStorage::new());

        cart.add_or_update("p-1", "M", 2)?;
        cart.add_or_update("p-2", "S", 1)?;
        cart.remove("p-2")?;

        let (storage, _) = cart.into_parts();

        assert_eq!(
            storage.get_item(STORAGE_KEY)?.as_deref(),
            Some(r#"[{"productId":"p-1","selectedSize":"M","quantity":2}]"#)
        );

        Ok(())
    }

    #[test]
    fn malformed_storage_loads_empty() {
        let storage = MemoryStorage::new().with_item(STORAGE_KEY, "not json");

        let cart = CartStore::load(storage);

        assert!(cart.is_empty());
    }

    #[test]
    fn failed_write_leaves_cart_unchanged() -> TestResult {
        let stored = r#"[{"productId":"p-1","selectedSize":"M","quantity":2}]"#;
        let storage = ReadOnlyStorage {
            inner: MemoryStorage::new().with_item(STORAGE_KEY, stored),
        };
        let mut cart = CartStore::load(storage);

        let result = cart.add_or_update("p-1", "M", 7);

        assert!(matches!(result, Err(CartError::Storage(_))));
        assert_eq!(cart.list(), [CartLineItem::new("p-1", "M", 2)]);
        assert_eq!(cart.storage().get_item(STORAGE_KEY)?.as_deref(), Some(stored));

        Ok(())
    }

    #[test]
    fn observer_hears_count_changes_only() -> TestResult {
        let mut recorder = CountRecorder::default();

        {
            let mut cart = CartStore::with_observer(MemoryStorage::new(), &mut recorder);

            cart.add_or_update("p-1", "M", 1)?;
            cart.add_or_update("p-1", "M", 4)?;
            cart.add_or_update("p-2", "M", 1)?;
            cart.remove("p-1")?;
            cart.remove("missing")?;
        }

        assert_eq!(recorder.counts, [1, 2, 1]);

        Ok(())
    }
}
