use crate::helpers::*;

#[test]
fn test_add_favorite_twice_keeps_one_entry() {
    let (store, _) = memory_store();
    let item = favorite(3, "Basmati Rice", 90);

    store.add_to_favorites(item.clone());
    store.add_to_favorites(item);

    let favorites = store.favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, pid(3));
}

#[test]
fn test_add_favorite_does_not_overwrite_existing() {
    let (store, _) = memory_store();
    store.add_to_favorites(favorite(3, "Basmati Rice", 90));
    store.add_to_favorites(favorite(3, "Brown Rice", 70).with_location("Elsewhere"));

    let favorites = store.favorites();
    assert_eq!(favorites[0].name, "Basmati Rice");
    assert_eq!(favorites[0].location, "Nashik");
}

#[test]
fn test_is_favorite_tracks_add_and_remove() {
    let (store, _) = memory_store();
    assert!(!store.is_favorite(pid(5)));

    store.add_to_favorites(favorite(5, "Mangoes", 150));
    assert!(store.is_favorite(pid(5)));

    store.remove_from_favorites(pid(5));
    assert!(!store.is_favorite(pid(5)));
}

#[test]
fn test_remove_missing_favorite_is_noop() {
    let (store, _) = memory_store();
    store.add_to_favorites(favorite(1, "Milk", 30));

    store.remove_from_favorites(pid(2));

    assert_eq!(store.favorites().len(), 1);
}

#[test]
fn test_favorites_and_cart_share_ids_independently() {
    let (store, _) = memory_store();
    store.add_to_favorites(favorite(1, "Milk", 30));
    store.add_to_cart(cart_item(1, "Milk", 30, 1));

    store.remove_from_cart(pid(1));
    assert!(store.is_favorite(pid(1)));

    store.add_to_cart(cart_item(1, "Milk", 30, 1));
    store.remove_from_favorites(pid(1));
    assert_eq!(store.cart().len(), 1);
}

#[test]
fn test_move_favorite_to_cart() {
    let (store, _) = memory_store();
    let mango = favorite(5, "Mangoes", 150);
    store.add_to_favorites(mango.clone());

    store.add_to_cart(mango.to_cart_item(kisan::Quantity::ONE));
    store.add_to_cart(mango.to_cart_item(kisan::Quantity::ONE));

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity.get(), 2);
    assert_eq!(cart[0].farmer, "farmer-5");
    assert!(store.is_favorite(pid(5)));
}
