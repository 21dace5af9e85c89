//! Cart Storage
//!
//! The cart is persisted as a single JSON array under a fixed key in a
//! string key-value store, in the same shape a browser's local storage holds it.

use std::io;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Key under which the cart line items are stored.
pub const STORAGE_KEY: &str = "orderItems";

/// Errors raised by a cart storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("storage I/O failed")]
    Io(#[from] io::Error),

    /// The stored value is not a valid cart.
    #[error("stored cart is malformed")]
    Malformed(#[source] serde_json::Error),

    /// The cart could not be serialised.
    #[error("failed to encode cart")]
    Encode(#[source] serde_json::Error),
}

/// String key-value store backing the cart.
pub trait CartStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// In-memory storage, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    #[must_use]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl CartStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);

        Ok(())
    }
}
