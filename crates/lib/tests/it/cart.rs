use std::sync::Arc;
use std::thread;

use crate::helpers::*;

#[test]
fn test_add_merges_quantities_by_id() {
    let (store, _) = memory_store();
    store.add_to_cart(cart_item(1, "Onions", 30, 2));
    store.add_to_cart(cart_item(1, "Onions", 30, 3));

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, pid(1));
    assert_eq!(cart[0].quantity.get(), 5);
}

#[test]
fn test_remove_missing_id_leaves_cart_unchanged() {
    let (store, _) = memory_store();
    store.add_to_cart(cart_item(1, "Onions", 30, 2));
    store.add_to_cart(cart_item(2, "Garlic", 120, 1));
    let before = store.cart();

    store.remove_from_cart(pid(99));

    assert_eq!(*store.cart(), *before);
}

#[test]
fn test_clear_empties_cart() {
    let (store, _) = memory_store();
    for id in 1..=4 {
        store.add_to_cart(cart_item(id, "Produce", 10, 1));
    }
    store.add_to_favorites(favorite(1, "Produce", 10));

    store.clear_cart();

    assert!(store.cart().is_empty());
    assert_eq!(store.favorites().len(), 1);

    store.clear_cart();
    assert!(store.cart().is_empty());
}

#[test]
fn test_update_quantity_of_missing_id_is_noop() {
    let (store, _) = memory_store();
    store.add_to_cart(cart_item(1, "Onions", 30, 2));

    store.update_cart_item_quantity(pid(2), qty(9));

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity.get(), 2);
}

#[test]
fn test_tomato_scenario() {
    let (store, _) = memory_store();
    assert!(store.cart().is_empty());

    store.add_to_cart(
        kisan::CartItem::new(7, "Tomatoes", rust_decimal::Decimal::from(40), qty(3))
            .with_unit("kg")
            .with_farmer("A")
            .with_image("x"),
    );
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, pid(7));
    assert_eq!(cart[0].quantity.get(), 3);

    store.update_cart_item_quantity(pid(7), qty(5));
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity.get(), 5);
    assert_eq!(cart[0].unit, "kg");

    store.remove_from_cart(pid(7));
    assert!(store.cart().is_empty());
}

#[test]
fn test_concurrent_adds_lose_no_update() {
    let (store, _) = memory_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..25 {
                    store.add_to_cart(cart_item(1, "Wheat", 25, 1));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity.get(), 200);
}

#[test]
fn test_old_snapshots_are_not_mutated() {
    let (store, _) = memory_store();
    store.add_to_cart(cart_item(1, "Onions", 30, 2));
    let held = store.snapshot();

    store.update_cart_item_quantity(pid(1), qty(8));
    store.add_to_cart(cart_item(2, "Garlic", 120, 1));

    assert_eq!(held.cart.len(), 1);
    assert_eq!(held.cart[0].quantity.get(), 2);
    assert_eq!(store.snapshot().cart.len(), 2);
}
