//! Cart Line Items

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::storage::StorageError;

/// One cart entry: a product in a chosen size and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Id of the product in the catalog
    pub product_id: String,

    /// Size chosen on the detail view
    #[serde(default)]
    pub selected_size: String,

    /// Number of units
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a new line item.
    pub fn new(product_id: impl Into<String>, selected_size: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            selected_size: selected_size.into(),
            quantity,
        }
    }

    /// Whether this line item holds the given product in the given size.
    pub fn matches(&self, product_id: &str, selected_size: &str) -> bool {
        self.product_id == product_id && self.selected_size == selected_size
    }
}

/// Older carts may hold the quantity as the raw text of the quantity input.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(u32),
    Text(String),
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match RawQuantity::deserialize(deserializer)? {
        RawQuantity::Number(quantity) => Ok(quantity),
        RawQuantity::Text(text) => text.trim().parse().map_err(D::Error::custom),
    }
}

/// Decode a stored cart. A stored `null` is an empty cart.
pub(crate) fn decode(raw: &str) -> Result<Vec<CartLineItem>, StorageError> {
    let items: Option<Vec<CartLineItem>> =
        serde_json::from_str(raw).map_err(StorageError::Malformed)?;

    Ok(items.unwrap_or_default())
}

/// Encode a cart for storage.
pub(crate) fn encode(items: &[CartLineItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(StorageError::Encode)
}
