//! Pricing
//!
//! Cart totals are derived from the cart line items and a catalog snapshot.
//! Line items whose product is not in the catalog are left out of every sum,
//! so a retired product never breaks the totals.

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::CartLineItem,
    catalog::Catalog,
    money::{format_amount, format_money},
    products::Product,
};

/// Delivery fee charged on the gross (pre-discount) total: 2%.
pub const DELIVERY_FEE_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Errors raised while totalling a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// An amount grew beyond what a [`Decimal`] can hold.
    #[error("amount for product {product_id} is out of range")]
    LineOutOfRange {
        /// Product whose line could not be priced
        product_id: String,
    },

    /// The cart totals grew beyond what a [`Decimal`] can hold.
    #[error("cart totals are out of range")]
    TotalsOutOfRange,
}

/// A cart line item joined with its catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// The stored line item
    pub item: CartLineItem,

    /// The product it refers to
    pub product: Product,

    line_total: Decimal,
    line_discount: Decimal,
}

impl CartEntry {
    /// Join `item` with `product`, pricing the line.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::LineOutOfRange`] if the line amounts overflow.
    pub fn new(item: CartLineItem, product: Product) -> Result<Self, PricingError> {
        let quantity = Decimal::from(item.quantity);

        let line_total = product.effective_price().checked_mul(quantity);
        let line_discount = product
            .unit_discount()
            .and_then(|discount| discount.checked_mul(quantity));

        let (Some(line_total), Some(line_discount)) = (line_total, line_discount) else {
            return Err(PricingError::LineOutOfRange {
                product_id: item.product_id,
            });
        };

        Ok(Self {
            item,
            product,
            line_total,
            line_discount,
        })
    }

    /// Effective unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    /// Unit discount times quantity.
    pub fn line_discount(&self) -> Decimal {
        self.line_discount
    }
}

/// Pair each line item with its product, in line item order.
///
/// # Errors
///
/// Returns [`PricingError::LineOutOfRange`] if a line cannot be priced.
pub fn reconcile(items: &[CartLineItem], catalog: &Catalog) -> Result<Vec<CartEntry>, PricingError> {
    items
        .iter()
        .filter_map(|item| {
            let product = catalog.get(&item.product_id);

            if product.is_none() {
                debug!(product_id = %item.product_id, "cart product is not in the catalog");
            }

            product.map(|product| CartEntry::new(item.clone(), product.clone()))
        })
        .collect()
}

/// Cart totals at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    subtotal: Decimal,
    total_discount: Decimal,
    delivery_fee: Decimal,
    grand_total: Decimal,
}

impl Totals {
    /// Compute the totals for `items` against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any amount overflows.
    pub fn compute(items: &[CartLineItem], catalog: &Catalog) -> Result<Self, PricingError> {
        Self::from_entries(&reconcile(items, catalog)?)
    }

    /// Compute the totals for already reconciled entries.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::TotalsOutOfRange`] if a sum overflows.
    pub fn from_entries(entries: &[CartEntry]) -> Result<Self, PricingError> {
        let (subtotal, total_discount) = entries.iter().try_fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(subtotal, discount), entry| {
                Some((
                    subtotal.checked_add(entry.line_total())?,
                    discount.checked_add(entry.line_discount())?,
                ))
            },
        )
        .ok_or(PricingError::TotalsOutOfRange)?;

        Self::from_sums(subtotal, total_discount).ok_or(PricingError::TotalsOutOfRange)
    }

    fn from_sums(subtotal: Decimal, total_discount: Decimal) -> Option<Self> {
        let delivery_fee = subtotal
            .checked_add(total_discount)?
            .checked_mul(DELIVERY_FEE_RATE)?;

        Some(Self {
            subtotal,
            total_discount,
            delivery_fee,
            grand_total: subtotal.checked_add(delivery_fee)?,
        })
    }

    /// Sum of effective prices times quantities.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Amount saved through sale prices.
    pub fn total_discount(&self) -> Decimal {
        self.total_discount
    }

    /// Delivery fee on the gross total.
    pub fn delivery_fee(&self) -> Decimal {
        self.delivery_fee
    }

    /// Amount payable.
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// The totals as plain two-decimal amounts.
    pub fn display(&self) -> TotalsDisplay {
        self.display_with(format_amount)
    }

    /// The totals as currency labels.
    pub fn display_in(&self, currency: &'static Currency) -> TotalsDisplay {
        self.display_with(|amount| format_money(amount, currency))
    }

    fn display_with(&self, format: impl Fn(Decimal) -> String) -> TotalsDisplay {
        TotalsDisplay {
            subtotal: format(self.subtotal),
            total_discount: format(self.total_discount),
            delivery_fee: format(self.delivery_fee),
            grand_total: format(self.grand_total),
        }
    }
}

/// Totals formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsDisplay {
    /// Formatted subtotal
    pub subtotal: String,

    /// Formatted discount
    pub total_discount: String,

    /// Formatted delivery fee
    pub delivery_fee: String,

    /// Formatted grand total
    pub grand_total: String,
}

/// Reconciled cart entries together with their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// Line items that matched a catalog product
    pub entries: Vec<CartEntry>,

    /// Totals over `entries`
    pub totals: Totals,
}

impl CartSummary {
    /// Reconcile `items` with `catalog` and total them.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any amount overflows.
    pub fn new(items: &[CartLineItem], catalog: &Catalog) -> Result<Self, PricingError> {
        let entries = reconcile(items, catalog)?;
        let totals = Totals::from_entries(&entries)?;

        Ok(Self { entries, totals })
    }

    /// Whether no line item matched the catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
