//! Discounts

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Percentage saved when paying `sale_price` instead of `price`, rounded to a
/// whole number with halves rounded up.
///
/// A zero `price` has no meaningful percentage and yields `0`.
pub fn discount_percent(price: Decimal, sale_price: Decimal) -> i64 {
    if price.is_zero() {
        return 0;
    }

    let fraction = price
        .checked_sub(sale_price)
        .and_then(|saved| saved.checked_div(price))
        .and_then(|fraction| fraction.checked_mul(Decimal::ONE_HUNDRED));

    fraction
        .and_then(|percent| percent.checked_add(Decimal::new(5, 1)))
        .map(|percent| percent.floor())
        .and_then(|percent| percent.to_i64())
        .unwrap_or(0)
}
