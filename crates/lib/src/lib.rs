//!
//! Kisan: the shopper-side cart and favorites store of the Kisan Direct
//! marketplace.
//!
//! ## Core Concepts
//!
//! * **Items (`item::CartItem`, `item::FavoriteItem`)**: product listings as the
//!   shopper holds them, keyed by `item::ProductId`. Cart quantities are
//!   `item::Quantity` values, which are never zero.
//! * **Store (`store::Store`)**: the single shared owner of the cart and the
//!   favorites. Adding to the cart merges by product id; adding a favorite is
//!   idempotent. Every mutation publishes a new immutable `store::Snapshot`.
//! * **Slots (`persist::SnapshotSlot`)**: durable text cells addressed by a
//!   namespace. The store writes its whole snapshot to its slot after every
//!   mutation and rehydrates from it on open.
//! * **Summaries (`summary::CartSummary`)**: caller-side totals with the flat
//!   delivery fee.

pub mod constants;
pub mod item;
pub mod persist;
pub mod store;
pub mod summary;

pub use item::{CartItem, FavoriteItem, ProductId, Quantity};
pub use store::{Snapshot, Store};
pub use summary::CartSummary;

/// Result type used throughout the Kisan library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Kisan library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured item construction errors from the item module
    #[error(transparent)]
    Item(item::ItemError),

    /// Structured persistence errors from the persist module
    #[error(transparent)]
    Persist(persist::PersistError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Item(_) => "item",
            Error::Persist(_) => "persist",
        }
    }

    /// Check if this error is caused by invalid caller input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Item(_) => true,
            Error::Persist(persist_err) => {
                matches!(persist_err, persist::PersistError::InvalidNamespace { .. })
            }
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Persist(persist_err) => persist_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error means a stored snapshot could not be used.
    pub fn is_corrupt_snapshot(&self) -> bool {
        match self {
            Error::Persist(persist_err) => persist_err.is_corrupt_snapshot(),
            _ => false,
        }
    }
}
