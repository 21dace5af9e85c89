use clap::Args;
use storefront_app::StorefrontError;

use super::App;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Product id
    product_id: String,
}

#[expect(clippy::print_stdout, reason = "command output goes to stdout")]
pub(crate) fn run(storefront: &mut App, args: &RemoveArgs) -> Result<(), StorefrontError> {
    let removed = storefront.remove_from_cart(&args.product_id)?;

    println!("removed {removed} line item(s)");
    println!("cart: {}", storefront.cart_count());

    Ok(())
}
