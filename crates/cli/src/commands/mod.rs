use std::error::Error;

use clap::Subcommand;
use storefront::{
    money::{format_money, store_currency},
    products::Product,
};
use storefront_app::{Storefront, StorefrontError};
use tracing::error;

use crate::config::{CliConfig, catalog::CatalogSource};

mod add;
mod browse;
mod cart;
mod count;
mod remove;
mod show;

type App = Storefront<CatalogSource, storefront_app::storage::FileStorage>;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the products on a shelf, or every home shelf
    Browse(browse::BrowseArgs),

    /// Show a single product
    Show(show::ShowArgs),

    /// Add a product to the cart, or change its quantity
    Add(add::AddArgs),

    /// Remove a product from the cart, in every size
    Remove(remove::RemoveArgs),

    /// Show the cart with its totals
    Cart,

    /// Print the number of line items in the cart
    Count,
}

pub(crate) async fn run(config: CliConfig) -> Result<(), String> {
    let reference = config
        .reference_time()
        .map_err(|error| format!("invalid reference date: {error}"))?;

    let mut storefront = Storefront::new(config.catalog.provider(), config.storage.storage());

    let result = match config.command {
        Command::Browse(args) => browse::run(&storefront, args, reference).await,
        Command::Show(args) => show::run(&storefront, args).await,
        Command::Add(args) => add::run(&mut storefront, args).await,
        Command::Remove(args) => remove::run(&mut storefront, &args),
        Command::Cart => cart::run(&storefront).await,
        Command::Count => {
            count::run(&storefront);
            Ok(())
        }
    };

    result.map_err(|error| report(&error))
}

/// Log the full error chain and hand back the shopper-facing notice.
fn report(error: &StorefrontError) -> String {
    error!(error = error as &dyn Error, "storefront operation failed");

    error.user_message().to_string()
}

fn price_label(product: &Product) -> String {
    let currency = store_currency();

    if product.on_sale {
        format!(
            "{} (was {}, -{}%)",
            format_money(product.sale_price, currency),
            format_money(product.price, currency),
            product.discount_percent()
        )
    } else {
        format_money(product.price, currency)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn sale_prices_show_the_badge() {
        let product = Product::new("p-1", Decimal::from(100)).with_sale_price(Decimal::from(80));

        assert_eq!(price_label(&product), "$80.00 (was $100.00, -20%)");
    }

    #[test]
    fn regular_prices_show_the_price_only() {
        let product = Product::new("p-1", Decimal::new(4_950, 2));

        assert_eq!(price_label(&product), "$49.50");
    }
}
