//! The cart and favorites store.
//!
//! [`Store`] is the single shared owner of the user's cart and favorites. It is
//! constructed once at startup from a [`SnapshotSlot`] and handed to every view
//! that needs it (typically behind an `Arc`).
//!
//! Every mutation builds a new [`Snapshot`] from the current one and publishes
//! it whole; nothing is edited in place. Collections a mutation does not touch
//! keep their previous allocation, so observers can detect changes with
//! [`Arc::ptr_eq`]. After publishing, the full snapshot is written back to the
//! slot. A failed write is logged and remembered but never rolls back the
//! in-memory state.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    Result,
    item::{CartItem, FavoriteItem, ProductId, Quantity},
    persist::{self, SnapshotSlot},
};


/// An immutable view of the full store state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cart lines in insertion order, at most one per product id.
    #[serde(default)]
    pub cart: Arc<[CartItem]>,
    /// Favorites in insertion order, at most one per product id.
    #[serde(default)]
    pub favorites: Arc<[FavoriteItem]>,
}

impl Snapshot {
    pub fn new(cart: Vec<CartItem>, favorites: Vec<FavoriteItem>) -> Self {
        Self {
            cart: cart.into(),
            favorites: favorites.into(),
        }
    }

    /// Look up the cart line for `id`.
    pub fn cart_item(&self, id: ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|line| line.id == id)
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.iter().any(|fav| fav.id == id)
    }

    fn with_cart(&self, cart: Arc<[CartItem]>) -> Snapshot {
        Snapshot {
            cart,
            favorites: Arc::clone(&self.favorites),
        }
    }

    fn with_favorites(&self, favorites: Arc<[FavoriteItem]>) -> Snapshot {
        Snapshot {
            cart: Arc::clone(&self.cart),
            favorites,
        }
    }
}

/// Shared, persisted cart and favorites state.
///
/// All mutations are serialized: each one runs to completion under the
/// store's write lock, including the snapshot write, so concurrent callers
/// never lose an update and the slot always ends up holding the latest state.
#[derive(Debug)]
pub struct Store {
    slot: Box<dyn SnapshotSlot>,
    state: watch::Sender<Arc<Snapshot>>,
    last_persist_error: Mutex<Option<String>>,
}

impl Store {
    /// Open the store, rehydrating from `slot` if it holds a snapshot.
    ///
    /// An empty slot yields an empty store. A slot holding text that cannot be
    /// decoded is an error; the caller decides whether to fall back to
    /// [`Store::empty`].
    pub fn open(slot: impl SnapshotSlot + 'static) -> Result<Self> {
        let snapshot = match persist::load(&slot)? {
            Some(snapshot) => {
                info!(
                    namespace = slot.namespace(),
                    cart = snapshot.cart.len(),
                    favorites = snapshot.favorites.len(),
                    "Rehydrated store snapshot"
                );
                snapshot
            }
            None => {
                debug!(namespace = slot.namespace(), "No stored snapshot; starting empty");
                Snapshot::default()
            }
        };
        Ok(Self::with_snapshot(slot, snapshot))
    }

    /// Create an empty store over `slot` without reading it.
    ///
    /// The first mutation overwrites whatever the slot held.
    pub fn empty(slot: impl SnapshotSlot + 'static) -> Self {
        Self::with_snapshot(slot, Snapshot::default())
    }

    fn with_snapshot(slot: impl SnapshotSlot + 'static, snapshot: Snapshot) -> Self {
        let (state, _) = watch::channel(Arc::new(snapshot));
        Self {
            slot: Box::new(slot),
            state,
            last_persist_error: Mutex::new(None),
        }
    }

    /// The namespace of the slot backing this store.
    pub fn namespace(&self) -> &str {
        self.slot.namespace()
    }

    /// The current full state.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.borrow())
    }

    pub fn cart(&self) -> Arc<[CartItem]> {
        Arc::clone(&self.state.borrow().cart)
    }

    pub fn favorites(&self) -> Arc<[FavoriteItem]> {
        Arc::clone(&self.state.borrow().favorites)
    }

    /// Receive every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.state.subscribe()
    }

    /// Add a line to the cart, merging by product id.
    ///
    /// If the product is already in the cart its quantity grows by
    /// `item.quantity` and every other field of the existing line is kept.
    pub fn add_to_cart(&self, item: CartItem) {
        let id = item.id;
        self.apply("add_to_cart", id, move |current| {
            let cart: Arc<[CartItem]> = if current.cart_item(id).is_some() {
                current
                    .cart
                    .iter()
                    .map(|line| {
                        if line.id == id {
                            CartItem {
                                quantity: line.quantity.saturating_add(item.quantity),
                                ..line.clone()
                            }
                        } else {
                            line.clone()
                        }
                    })
                    .collect()
            } else {
                current
                    .cart
                    .iter()
                    .cloned()
                    .chain(std::iter::once(item))
                    .collect()
            };
            Some(current.with_cart(cart))
        });
    }

    /// Remove the cart line for `id`; a missing id leaves the contents unchanged.
    pub fn remove_from_cart(&self, id: ProductId) {
        self.apply("remove_from_cart", id, |current| {
            let cart = current
                .cart
                .iter()
                .filter(|line| line.id != id)
                .cloned()
                .collect();
            Some(current.with_cart(cart))
        });
    }

    /// Replace the quantity of the cart line for `id`; a missing id leaves the
    /// contents unchanged.
    pub fn update_cart_item_quantity(&self, id: ProductId, quantity: Quantity) {
        self.apply("update_cart_item_quantity", id, |current| {
            let cart = current
                .cart
                .iter()
                .map(|line| {
                    if line.id == id {
                        CartItem {
                            quantity,
                            ..line.clone()
                        }
                    } else {
                        line.clone()
                    }
                })
                .collect();
            Some(current.with_cart(cart))
        });
    }

    pub fn clear_cart(&self) {
        debug!(operation = "clear_cart", "Store mutation");
        self.apply_all("clear_cart", |current| {
            Some(current.with_cart(Vec::new().into()))
        });
    }

    /// Add a favorite unless one with the same id already exists.
    ///
    /// An existing favorite is left untouched, and nothing is published or
    /// written in that case.
    pub fn add_to_favorites(&self, item: FavoriteItem) {
        let id = item.id;
        self.apply("add_to_favorites", id, move |current| {
            if current.is_favorite(id) {
                return None;
            }
            let favorites = current
                .favorites
                .iter()
                .cloned()
                .chain(std::iter::once(item))
                .collect();
            Some(current.with_favorites(favorites))
        });
    }

    pub fn remove_from_favorites(&self, id: ProductId) {
        self.apply("remove_from_favorites", id, |current| {
            Some(current.with_favorites(without_favorite(&current.favorites, id)))
        });
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.state.borrow().is_favorite(id)
    }

    /// Flip the favorite state of `item`, returning whether it is now a favorite.
    pub fn toggle_favorite(&self, item: FavoriteItem) -> bool {
        let id = item.id;
        let mut now_favorite = false;
        self.apply("toggle_favorite", id, |current| {
            let favorites = if current.is_favorite(id) {
                without_favorite(&current.favorites, id)
            } else {
                now_favorite = true;
                current
                    .favorites
                    .iter()
                    .cloned()
                    .chain(std::iter::once(item))
                    .collect()
            };
            Some(current.with_favorites(favorites))
        });
        now_favorite
    }

    /// Write the current snapshot to the slot, reporting any failure.
    pub fn flush(&self) -> Result<()> {
        let snapshot = self.state.borrow();
        let outcome = persist::save(self.slot.as_ref(), &snapshot);
        let message = outcome.as_ref().err().map(ToString::to_string);
        *self.lock_last_error() = message;
        outcome
    }

    /// The most recent snapshot write failure, cleared by the next success.
    pub fn last_persist_error(&self) -> Option<String> {
        self.lock_last_error().clone()
    }

    fn apply<F>(&self, operation: &'static str, id: ProductId, next: F)
    where
        F: FnOnce(&Snapshot) -> Option<Snapshot>,
    {
        debug!(operation, id = id.get(), "Store mutation");
        self.apply_all(operation, next);
    }

    /// Compute the next snapshot under the write lock, publish it, persist it
    /// and record the write outcome before the lock is released. `next`
    /// returning `None` means nothing changed.
    fn apply_all<F>(&self, operation: &'static str, next: F)
    where
        F: FnOnce(&Snapshot) -> Option<Snapshot>,
    {
        let modified = self.state.send_if_modified(|current| match next(current) {
            Some(updated) => {
                let updated = Arc::new(updated);
                let outcome = persist::save(self.slot.as_ref(), &updated);
                *current = updated;
                self.record_persist_outcome(operation, outcome);
                true
            }
            None => false,
        });

        if !modified {
            debug!(operation, "Store mutation was a no-op");
        }
    }

    fn record_persist_outcome(&self, operation: &'static str, outcome: Result<()>) {
        let mut last = self.lock_last_error();
        match outcome {
            Ok(()) => *last = None,
            Err(e) => {
                warn!(
                    operation,
                    namespace = self.slot.namespace(),
                    error = %e,
                    "Failed to persist store snapshot; in-memory state kept"
                );
                *last = Some(e.to_string());
            }
        }
    }

    fn lock_last_error(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.last_persist_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn without_favorite(favorites: &[FavoriteItem], id: ProductId) -> Arc<[FavoriteItem]> {
    favorites.iter().filter(|fav| fav.id != id).cloned().collect()
}
