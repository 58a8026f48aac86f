//! Constants used throughout the Kisan store.

/// Storage key the store snapshot lives under.
///
/// Shared with the browser storefront, so both read and write the same slot.
pub const DEFAULT_NAMESPACE: &str = "kisan-direct-storage";

/// Extension appended to the namespace by file-backed slots.
pub const SNAPSHOT_FILE_EXTENSION: &str = "json";

/// Flat delivery fee added to every order, in rupees.
pub const DEFAULT_DELIVERY_FEE: i64 = 50;

/// Largest unit price an item may carry, in rupees.
///
/// Keeps `price × quantity` summed over any realistic cart far inside the
/// `Decimal` range.
pub const MAX_PRICE: i64 = 1_000_000_000;
