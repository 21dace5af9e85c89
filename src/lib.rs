//! Storefront
//!
//! Catalog, cart and pricing core for a small clothing storefront: typed
//! product records, a persisted cart of line items, and the totals shown on
//! the cart page.

pub mod cart;
pub mod catalog;
pub mod discounts;
pub mod money;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod storage;
