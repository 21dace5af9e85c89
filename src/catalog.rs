//! Catalog

use std::{fmt, slice, str::FromStr};

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::products::Product;

/// Shelf name used for the new arrivals section.
pub const NEW_ARRIVALS_SHELF: &str = "newArrival";

/// Errors raised while reading a catalog payload.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload was not a JSON array of products.
    #[error("malformed catalog payload")]
    Malformed(#[from] serde_json::Error),
}

/// Authoritative list of products, in the order the provider returned them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from the given products.
    ///
    /// When two products share an id, lookups resolve to the first.
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            index.entry(product.product_id.clone()).or_insert(position);
        }

        Self { products, index }
    }

    /// Parse a catalog from the provider's JSON payload.
    ///
    /// A `null` payload is an empty catalog. Records that cannot be read as a
    /// product (for example, because they lack a `productId`) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the payload is not valid JSON or
    /// not an array.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let records: Option<Vec<Value>> = serde_json::from_str(payload)?;

        let products = records
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| match serde_json::from_value(record) {
                Ok(product) => Some(product),
                Err(error) => {
                    warn!(position, %error, "skipping unreadable catalog record");
                    None
                }
            })
            .collect::<Vec<Product>>();

        Ok(Self::new(products))
    }

    /// Look up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.index
            .get(product_id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products, in provider order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over the products in provider order.
    pub fn iter(&self) -> slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in the given category.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.iter().filter(move |product| product.category == category)
    }

    /// Products created recently relative to `reference`.
    pub fn new_arrivals(&self, reference: Timestamp) -> impl Iterator<Item = &Product> {
        self.iter()
            .filter(move |product| product.is_new_arrival(reference))
    }

    /// Products on the given shelf.
    pub fn shelf(&self, shelf: &Shelf, reference: Timestamp) -> Vec<&Product> {
        match shelf {
            Shelf::NewArrivals => self.new_arrivals(reference).collect(),
            Shelf::Category(category) => self
                .iter()
                .filter(|product| product.category == *category)
                .collect(),
        }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A filtered view of the catalog shown as one section of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shelf {
    /// Recently created products
    NewArrivals,

    /// Products of a single category
    Category(String),
}

impl Shelf {
    /// Shelves shown on the home page, in order.
    pub fn home() -> [Shelf; 3] {
        [
            Shelf::NewArrivals,
            Shelf::Category("men".to_string()),
            Shelf::Category("women".to_string()),
        ]
    }
}

impl FromStr for Shelf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == NEW_ARRIVALS_SHELF {
            Shelf::NewArrivals
        } else {
            Shelf::Category(s.to_string())
        })
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shelf::NewArrivals => f.write_str(NEW_ARRIVALS_SHELF),
            Shelf::Category(category) => f.write_str(category),
        }
    }
}
