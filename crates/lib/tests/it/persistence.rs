use std::fs;

use kisan::{
    Snapshot, Store,
    persist::{self, FileSlot, MemorySlot, PERSISTENCE_VERSION, SnapshotSlot},
};
use rust_decimal::Decimal;

use crate::helpers::*;

fn populate(store: &Store) {
    store.add_to_cart(cart_item(2, "Potatoes", 25, 4));
    store.add_to_cart(cart_item(1, "Onions", 30, 2));
    store.add_to_cart(
        kisan::CartItem::new(3, "Paneer", Decimal::new(32050, 2), qty(1)).with_unit("pack"),
    );
    store.add_to_favorites(favorite(9, "Jaggery", 80));
    store.add_to_favorites(favorite(4, "Turmeric", 200));
}

#[test]
fn test_snapshot_round_trip_preserves_order_and_fields() {
    let (store, slot) = memory_store();
    populate(&store);

    let reopened = Store::open(slot).unwrap();

    assert_eq!(*reopened.snapshot(), *store.snapshot());
    let ids: Vec<i64> = reopened.cart().iter().map(|l| l.id.get()).collect();
    assert_eq!(ids, vec![2, 1, 3]);
    assert_eq!(reopened.cart()[2].price, Decimal::new(32050, 2));
    assert_eq!(reopened.favorites()[0].location, "Nashik");
}

#[test]
fn test_fractional_prices_survive_reopen() {
    let (slot, _dir) = file_slot();
    let prices = ["19.99", "0.05", "1234.75", "0.1", "999999.99", "40.5"];
    {
        let store = Store::open(slot.clone()).unwrap();
        for (id, price) in (1..).zip(prices) {
            let line = kisan::CartItem::new(id, "Produce", price.parse().unwrap(), qty(3));
            line.validate().unwrap();
            store.add_to_cart(line);
        }
        store.add_to_favorites(
            kisan::FavoriteItem::new(50, "Saffron", "2499.95".parse().unwrap()).with_unit("g"),
        );
        assert!(store.last_persist_error().is_none());

        let reopened = Store::open(slot.clone()).unwrap();
        assert_eq!(*reopened.snapshot(), *store.snapshot());
    }

    let store = Store::open(slot).unwrap();
    let stored: Vec<String> = store.cart().iter().map(|l| l.price.to_string()).collect();
    assert_eq!(stored, prices);
    assert_eq!(store.favorites()[0].price, Decimal::new(249995, 2));
}

#[test]
fn test_prices_that_cannot_be_stored_exactly_are_rejected() {
    let precise: Decimal = "1234567890.123456789".parse().unwrap();
    let line = kisan::CartItem::new(1, "Produce", precise, qty(1));
    let err = line.validate().unwrap_err();
    assert!(err.is_price_error());

    let favorite = kisan::FavoriteItem::new(2, "Produce", "0.1234567890123456789".parse().unwrap());
    assert!(favorite.validate().is_err());
}

#[test]
fn test_file_slot_round_trip() {
    let (slot, _dir) = file_slot();
    {
        let store = Store::open(slot.clone()).unwrap();
        populate(&store);
        store.update_cart_item_quantity(pid(2), qty(6));
        assert!(store.last_persist_error().is_none());
    }
    assert!(slot.path().exists());

    let store = Store::open(slot).unwrap();
    assert_eq!(store.cart().len(), 3);
    assert_eq!(store.cart()[0].quantity.get(), 6);
    assert!(store.is_favorite(pid(4)));
}

#[test]
fn test_open_missing_file_starts_empty() {
    let (slot, _dir) = file_slot();
    assert!(!slot.path().exists());

    let store = Store::open(slot).unwrap();
    assert_eq!(*store.snapshot(), Snapshot::default());
}

#[test]
fn test_open_invalid_file_is_error() {
    let (slot, _dir) = file_slot();
    fs::write(slot.path(), "{invalid json").unwrap();

    let err = Store::open(slot).unwrap_err();
    assert!(err.is_corrupt_snapshot());
    assert_eq!(err.module(), "persist");
}

#[test]
fn test_open_unknown_version_is_error() {
    let slot = MemorySlot::with_contents(
        TEST_NAMESPACE,
        format!(
            r#"{{"state":{{"cart":[],"favorites":[]}},"version":{}}}"#,
            PERSISTENCE_VERSION + 1
        ),
    );

    let err = Store::open(slot).unwrap_err();
    assert!(err.is_corrupt_snapshot());
}

#[test]
fn test_empty_store_overwrites_corrupt_slot() {
    let slot = MemorySlot::with_contents(TEST_NAMESPACE, "not json");
    assert!(Store::open(slot.clone()).is_err());

    let store = Store::empty(slot.clone());
    store.add_to_cart(cart_item(1, "Onions", 30, 1));

    let reopened = Store::open(slot).unwrap();
    assert_eq!(reopened.cart().len(), 1);
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let slot = FileSlot::new(&missing, TEST_NAMESPACE).unwrap();
    let store = Store::open(slot).unwrap();

    store.add_to_cart(cart_item(1, "Onions", 30, 2));
    store.add_to_cart(cart_item(1, "Onions", 30, 1));

    assert_eq!(store.cart()[0].quantity.get(), 3);
    assert!(store.last_persist_error().is_some());
    let err = store.flush().unwrap_err();
    assert!(err.is_io_error());

    fs::create_dir_all(&missing).unwrap();
    store.flush().unwrap();
    assert!(store.last_persist_error().is_none());
}

#[test]
fn test_file_contents_are_versioned_envelope() {
    let (slot, _dir) = file_slot();
    let store = Store::open(slot.clone()).unwrap();
    store.add_to_cart(cart_item(7, "Tomatoes", 40, 3));

    let text = slot.read().unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["version"], PERSISTENCE_VERSION);
    assert_eq!(value["state"]["cart"][0]["quantity"], 3);
    assert_eq!(persist::decode(slot.namespace(), &text).unwrap().cart.len(), 1);
}
