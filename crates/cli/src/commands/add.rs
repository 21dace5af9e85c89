use clap::Args;
use storefront::cart::CartUpdate;
use storefront_app::{StorefrontError, service::ITEM_ADDED_NOTICE};

use super::App;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product id
    pub product_id: String,

    /// Size to add; defaults to the product's first size
    #[arg(long)]
    pub size: Option<String>,

    /// Number of units, capped at the available stock
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,
}

#[expect(clippy::print_stdout, reason = "command output goes to stdout")]
pub(crate) async fn run(storefront: &mut App, args: AddArgs) -> Result<(), StorefrontError> {
    let update = storefront
        .add_product_to_cart(&args.product_id, args.size.as_deref(), args.quantity)
        .await?;

    match update {
        CartUpdate::Added => println!("{ITEM_ADDED_NOTICE}"),
        CartUpdate::Updated => println!("Cart updated"),
    }

    println!("cart: {}", storefront.cart_count());

    Ok(())
}
