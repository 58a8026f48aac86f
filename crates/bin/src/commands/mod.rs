//! Subcommand implementations. Each mutating command maps onto exactly one
//! store operation.

pub mod cart;
pub mod favorites;

use kisan::Store;

/// Turn a failed snapshot write into a command failure.
///
/// The store keeps its in-memory state when a write fails, but a CLI process
/// exits right after, so the change would be lost silently.
pub fn ensure_saved(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    match store.last_persist_error() {
        Some(e) => Err(format!("change was not saved to '{}': {e}", store.namespace()).into()),
        None => Ok(()),
    }
}
