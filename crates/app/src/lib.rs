//! Storefront application layer: catalog providers, file-backed cart storage
//! and the service the front ends drive.

pub mod catalog;
pub mod errors;
pub mod service;
pub mod storage;

pub use errors::StorefrontError;
pub use service::{ProductDetail, Storefront};
