use super::App;

#[expect(clippy::print_stdout, reason = "command output goes to stdout")]
pub(crate) fn run(storefront: &App) {
    println!("{}", storefront.cart_count());
}
