//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        CartError, CartLineItem, CartObserver, CartStore, CartUpdate, NoopObserver,
        QuantitySelector,
    },
    catalog::{Catalog, CatalogError, Shelf},
    discounts::discount_percent,
    money::{format_amount, format_money, store_currency},
    pricing::{CartEntry, CartSummary, PricingError, Totals, TotalsDisplay},
    products::Product,
    storage::{CartStorage, MemoryStorage, STORAGE_KEY, StorageError},
};
