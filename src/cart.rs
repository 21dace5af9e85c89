//! Cart

pub mod errors;
pub mod items;
pub mod observer;
pub mod quantity;
pub mod store;

pub use errors::CartError;
pub use items::CartLineItem;
pub use observer::{CartObserver, NoopObserver};
pub use quantity::QuantitySelector;
pub use store::{CartStore, CartUpdate};
