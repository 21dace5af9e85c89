//! Products

use jiff::{SignedDuration, Timestamp, civil, tz::TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::discounts::discount_percent;

/// How long after creation a product is shown as a new arrival.
pub const NEW_ARRIVAL_WINDOW: SignedDuration = SignedDuration::from_hours(5 * 24);

/// Product record as supplied by the catalog provider.
///
/// Missing descriptive fields fall back to placeholder values and missing
/// numeric fields to zero, so the rest of the crate never has to re-check
/// the shape of a product. Only `productId` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub product_id: String,

    /// Display name
    #[serde(default = "unknown_name")]
    pub name: String,

    /// Category used for shelf filtering (e.g. `men`, `women`)
    #[serde(default = "unknown_category")]
    pub category: String,

    /// Long-form description shown on the detail view
    #[serde(default = "no_description")]
    pub description: String,

    /// Image URL, if any
    #[serde(default)]
    pub image: Option<String>,

    /// Regular unit price
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,

    /// Whether the sale price applies
    #[serde(default, deserialize_with = "null_as_default")]
    pub on_sale: bool,

    /// Discounted unit price, only meaningful when `on_sale` is set
    #[serde(default, deserialize_with = "null_as_default")]
    pub sale_price: Decimal,

    /// Available size labels, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub sizes: Vec<String>,

    /// Units available
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: u32,

    /// Creation time, used for new arrival classification
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: Option<Timestamp>,
}

impl Product {
    /// Creates a product with the given id and regular price and every other field defaulted.
    pub fn new(product_id: impl Into<String>, price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            name: unknown_name(),
            category: unknown_category(),
            description: no_description(),
            image: None,
            price,
            on_sale: false,
            sale_price: Decimal::ZERO,
            sizes: Vec::new(),
            stock: 0,
            created_at: None,
        }
    }

    /// Puts the product on sale at the given price.
    #[must_use]
    pub fn with_sale_price(mut self, sale_price: Decimal) -> Self {
        self.on_sale = true;
        self.sale_price = sale_price;
        self
    }

    /// Sets the product category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the available sizes.
    #[must_use]
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the available stock.
    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Sets the creation time.
    #[must_use]
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Price charged per unit, taking the sale flag into account.
    pub fn effective_price(&self) -> Decimal {
        if self.on_sale {
            self.sale_price
        } else {
            self.price
        }
    }

    /// Amount saved per unit; zero when the product is not on sale.
    ///
    /// `None` if the difference does not fit in a [`Decimal`].
    pub fn unit_discount(&self) -> Option<Decimal> {
        if self.on_sale {
            self.price.checked_sub(self.sale_price)
        } else {
            Some(Decimal::ZERO)
        }
    }

    /// Whole-number discount percentage shown on the product badge.
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.price, self.sale_price)
    }

    /// Whether at least one unit can be added to the cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock >= 1
    }

    /// The size preselected on the detail view.
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Whether the product was created within [`NEW_ARRIVAL_WINDOW`] of `reference`.
    ///
    /// Products dated after `reference` also count as new.
    pub fn is_new_arrival(&self, reference: Timestamp) -> bool {
        self.created_at
            .is_some_and(|created_at| reference.duration_since(created_at) <= NEW_ARRIVAL_WINDOW)
    }
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

fn unknown_category() -> String {
    "unknown".to_string()
}

fn no_description() -> String {
    "No description".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Milliseconds(i64),
    Text(String),
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;

    Ok(raw.and_then(|raw| match raw {
        RawTimestamp::Milliseconds(ms) => Timestamp::from_millisecond(ms).ok(),
        RawTimestamp::Text(text) => parse_timestamp(&text),
    }))
}

/// Parses a creation timestamp.
///
/// Accepts RFC 3339 timestamps, civil date-times and plain dates. Values
/// without an offset are read as UTC.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = value.parse::<civil::DateTime>() {
        return datetime
            .to_zoned(TimeZone::UTC)
            .ok()
            .map(|zoned| zoned.timestamp());
    }

    value
        .parse::<civil::Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_full_record() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{
                "productId": "p-1",
                "name": "Linen Shirt",
                "category": "men",
                "description": "Breathable",
                "image": "https://example.com/shirt.png",
                "price": 100,
                "onSale": true,
                "salePrice": 79.99,
                "sizes": ["S", "M", "L"],
                "stock": 4,
                "createdAt": "2025-01-12T09:30:00Z"
            }"#,
        )?;

        assert_eq!(product.product_id, "p-1");
        assert_eq!(product.category, "men");
        assert_eq!(product.price, Decimal::from(100));
        assert_eq!(product.sale_price, Decimal::new(7999, 2));
        assert_eq!(product.sizes, ["S", "M", "L"]);
        assert_eq!(product.stock, 4);
        assert_eq!(
            product.created_at,
            Some("2025-01-12T09:30:00Z".parse::<Timestamp>()?)
        );

        Ok(())
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() -> TestResult {
        let product: Product =
            serde_json::from_str(r#"{"productId": "p-2", "price": null, "sizes": null}"#)?;

        assert_eq!(product.name, "Unknown");
        assert_eq!(product.category, "unknown");
        assert_eq!(product.description, "No description");
        assert_eq!(product.price, Decimal::ZERO);
        assert!(!product.on_sale);
        assert!(product.sizes.is_empty());
        assert_eq!(product.stock, 0);
        assert_eq!(product.created_at, None);

        Ok(())
    }

    #[test]
    fn missing_product_id_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"name": "Nameless", "price": 10}"#);

        assert!(result.is_err(), "productId must be required");
    }

    #[test]
    fn created_at_accepts_dates_and_epoch_millis() -> TestResult {
        let from_date: Product =
            serde_json::from_str(r#"{"productId": "a", "createdAt": "2025-01-10"}"#)?;
        let from_millis: Product =
            serde_json::from_str(r#"{"productId": "b", "createdAt": 1736467200000}"#)?;
        let unparseable: Product =
            serde_json::from_str(r#"{"productId": "c", "createdAt": "last tuesday"}"#)?;

        let expected = "2025-01-10T00:00:00Z".parse::<Timestamp>()?;

        assert_eq!(from_date.created_at, Some(expected));
        assert_eq!(from_millis.created_at, Some(expected));
        assert_eq!(unparseable.created_at, None);

        Ok(())
    }

    #[test]
    fn effective_price_and_unit_discount_follow_sale_flag() {
        let regular = Product::new("a", Decimal::from(50));
        let on_sale = Product::new("b", Decimal::from(100)).with_sale_price(Decimal::from(80));

        assert_eq!(regular.effective_price(), Decimal::from(50));
        assert_eq!(regular.unit_discount(), Some(Decimal::ZERO));
        assert_eq!(on_sale.effective_price(), Decimal::from(80));
        assert_eq!(on_sale.unit_discount(), Some(Decimal::from(20)));
        assert_eq!(on_sale.discount_percent(), 20);
    }

    #[test]
    fn new_arrival_window_is_inclusive() -> TestResult {
        let reference = "2025-01-15T00:00:00Z".parse::<Timestamp>()?;
        let product = |created: &str| -> TestResult<Product> {
            Ok(Product::new("p", Decimal::from(1)).with_created_at(created.parse()?))
        };

        assert!(product("2025-01-10T00:00:00Z")?.is_new_arrival(reference));
        assert!(!product("2025-01-09T23:59:59Z")?.is_new_arrival(reference));
        assert!(product("2025-02-01T00:00:00Z")?.is_new_arrival(reference));
        assert!(!Product::new("undated", Decimal::from(1)).is_new_arrival(reference));

        Ok(())
    }

    #[test]
    fn default_size_is_the_first_listed() {
        let product = Product::new("p", Decimal::from(1)).with_sizes(["M", "L"]);

        assert_eq!(product.default_size(), Some("M"));
        assert_eq!(Product::new("q", Decimal::from(1)).default_size(), None);
    }
}
