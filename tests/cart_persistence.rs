//! Integration tests for persisting the cart through a storage backend.

use testresult::TestResult;

use storefront::prelude::*;

#[test]
fn reloading_a_persisted_cart_preserves_order() -> TestResult {
    let mut cart = CartStore::load(MemoryStorage::new());

    cart.add_or_update("p-3", "L", 1)?;
    cart.add_or_update("p-1", "M", 2)?;
    cart.add_or_update("p-2", "S", 4)?;
    cart.add_or_update("p-1", "M", 3)?;

    let saved = cart.list().to_vec();
    let (storage, _) = cart.into_parts();

    let reloaded = CartStore::load(storage);

    assert_eq!(reloaded.list(), saved.as_slice());
    assert_eq!(reloaded.count(), 3);

    Ok(())
}

#[test]
fn legacy_text_quantities_are_rewritten_as_numbers() -> TestResult {
    let storage = MemoryStorage::new().with_item(
        STORAGE_KEY,
        r#"[{"productId":"p-1","selectedSize":"M","quantity":"2"}]"#,
    );
    let mut cart = CartStore::load(storage);

    assert_eq!(cart.list(), [CartLineItem::new("p-1", "M", 2)]);

    cart.add_or_update("p-2", "S", 1)?;

    assert_eq!(
        cart.storage().get_item(STORAGE_KEY)?.as_deref(),
        Some(
            r#"[{"productId":"p-1","selectedSize":"M","quantity":2},{"productId":"p-2","selectedSize":"S","quantity":1}]"#
        )
    );

    Ok(())
}

#[test]
fn malformed_cart_is_replaced_on_next_write() -> TestResult {
    let storage = MemoryStorage::new().with_item(STORAGE_KEY, r#"{"not": "a cart"}"#);
    let mut cart = CartStore::load(storage);

    assert!(cart.is_empty());

    cart.add_or_update("p-1", "M", 1)?;

    let reloaded = CartStore::load(cart.into_parts().0);

    assert_eq!(reloaded.list(), [CartLineItem::new("p-1", "M", 1)]);

    Ok(())
}
