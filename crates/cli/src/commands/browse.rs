use clap::Args;
use jiff::Timestamp;
use storefront::catalog::Shelf;
use storefront_app::StorefrontError;

use super::{App, price_label};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Shelf to list: `newArrival` or a category such as `men`
    #[arg(long)]
    shelf: Option<Shelf>,
}

#[expect(clippy::print_stdout, reason = "command output goes to stdout")]
pub(crate) async fn run(
    storefront: &App,
    args: BrowseArgs,
    reference: Timestamp,
) -> Result<(), StorefrontError> {
    let shelves = args
        .shelf
        .map_or_else(|| Shelf::home().to_vec(), |shelf| vec![shelf]);

    for shelf in &shelves {
        let products = storefront.shelf(shelf, reference).await?;

        println!("== {shelf} ==");

        if products.is_empty() {
            println!("(no products)");
        }

        for product in &products {
            let stock = if product.is_in_stock() {
                ""
            } else {
                "  [out of stock]"
            };

            println!(
                "{}  {}  {}{stock}",
                product.product_id,
                product.name,
                price_label(product)
            );
        }

        println!();
    }

    Ok(())
}
