use storefront::{
    money::{format_money, store_currency},
    pricing::CartSummary,
};
use storefront_app::StorefrontError;

use super::App;

#[expect(clippy::print_stdout, reason = "command output goes to stdout")]
pub(crate) async fn run(storefront: &App) -> Result<(), StorefrontError> {
    let summary = storefront.cart_summary().await?;

    for line in render(&summary) {
        println!("{line}");
    }

    Ok(())
}

fn render(summary: &CartSummary) -> Vec<String> {
    let currency = store_currency();
    let mut lines = Vec::new();

    if summary.is_empty() {
        lines.push("Your cart is empty".to_string());
    }

    for entry in &summary.entries {
        lines.push(format!(
            "{}  {}  size {}  x{}  {}",
            entry.product.product_id,
            entry.product.name,
            entry.item.selected_size,
            entry.item.quantity,
            format_money(entry.line_total(), currency)
        ));
    }

    let totals = summary.totals.display_in(currency);

    lines.extend([
        format!("subtotal: {}", totals.subtotal),
        format!("discount: {}", totals.total_discount),
        format!("delivery: {}", totals.delivery_fee),
        format!("total: {}", totals.grand_total),
    ]);

    lines
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront::{cart::CartLineItem, catalog::Catalog, products::Product};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn renders_lines_and_totals() -> TestResult {
        let catalog = Catalog::new(vec![
            Product::new("A", Decimal::from(100)).with_sale_price(Decimal::from(80)),
            Product::new("B", Decimal::from(50)),
        ]);
        let items = [
            CartLineItem::new("A", "M", 2),
            CartLineItem::new("B", "S", 1),
        ];

        let lines = render(&CartSummary::new(&items, &catalog)?);

        assert_eq!(
            lines,
            [
                "A  Unknown  size M  x2  $160.00",
                "B  Unknown  size S  x1  $50.00",
                "subtotal: $210.00",
                "discount: $40.00",
                "delivery: $5.00",
                "total: $215.00",
            ]
        );

        Ok(())
    }

    #[test]
    fn empty_cart_still_shows_zero_totals() -> TestResult {
        let lines = render(&CartSummary::new(&[], &Catalog::default())?);

        assert_eq!(lines.first().map(String::as_str), Some("Your cart is empty"));
        assert_eq!(lines.last().map(String::as_str), Some("total: $0.00"));

        Ok(())
    }
}
