//! Money formatting
//!
//! Amounts are carried as exact decimals and only rounded to cents here, at
//! the point they are shown.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Currency the storefront quotes prices in.
pub fn store_currency() -> &'static Currency {
    iso::USD
}

/// Round an amount to cents, halves away from zero.
pub fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }

    rounded.rescale(2);
    rounded
}

/// Format an amount with exactly two decimal places, e.g. `210.00`.
pub fn format_amount(amount: Decimal) -> String {
    round_amount(amount).to_string()
}

/// Convert an amount to whole cents, or `None` if it does not fit in an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    round_amount(amount)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_i64())
}

/// Format an amount as a currency label, e.g. `$210.00`.
pub fn format_money(amount: Decimal, currency: &'static Currency) -> String {
    to_minor_units(amount).map_or_else(
        || format!("{} {}", format_amount(amount), currency.iso_alpha_code),
        |minor| format!("{}", Money::from_minor(minor, currency)),
    )
}
