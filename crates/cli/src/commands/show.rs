use clap::Args;
use storefront_app::StorefrontError;

use super::{App, price_label};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Product id
    product_id: String,
}

#[expect(clippy::print_stdout, reason = "command output goes to stdout")]
pub(crate) async fn run(storefront: &App, args: ShowArgs) -> Result<(), StorefrontError> {
    let detail = storefront.product(&args.product_id).await?;
    let product = &detail.product;

    println!("{} ({})", product.name, product.product_id);
    println!("category: {}", product.category);
    println!("price: {}", price_label(product));
    println!("sizes: {}", product.sizes.join(", "));
    println!("{}", product.description);

    match detail.quantity {
        Some(selector) => println!("in stock: up to {} per order", selector.max()),
        None => println!("Out of stock"),
    }

    Ok(())
}
