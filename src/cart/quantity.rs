//! Quantity Selection

use crate::products::Product;

/// Quantity chosen on the product detail view, kept within `1..=stock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: u32,
    max: u32,
}

impl QuantitySelector {
    /// A selector starting at one unit, or `None` if `max` is zero.
    pub fn new(max: u32) -> Option<Self> {
        (max >= 1).then_some(Self { value: 1, max })
    }

    /// A selector bounded by the product's stock, or `None` when it is out of stock.
    pub fn for_product(product: &Product) -> Option<Self> {
        Self::new(product.stock)
    }

    /// The selected quantity.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The largest selectable quantity.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Select one more unit, stopping at the maximum.
    pub fn increase(&mut self) -> u32 {
        self.value = self.value.saturating_add(1).min(self.max);
        self.value
    }

    /// Select one fewer unit, stopping at one.
    pub fn decrease(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1).max(1);
        self.value
    }

    /// Select `value`, clamped into range.
    pub fn set(&mut self, value: u32) -> u32 {
        self.value = value.clamp(1, self.max);
        self.value
    }

    /// Whether [`increase`](Self::increase) would change the value.
    pub fn can_increase(&self) -> bool {
        self.value < self.max
    }

    /// Whether [`decrease`](Self::decrease) would change the value.
    pub fn can_decrease(&self) -> bool {
        self.value > 1
    }
}
