//! In-memory snapshot slot.

use std::sync::{Arc, Mutex, PoisonError};

use super::SnapshotSlot;
use crate::Result;

/// A slot that keeps the snapshot text in memory.
///
/// Clones share the same cell, so a second store opened on a clone sees what
/// the first one wrote. Useful for tests and for embedding the store where
/// durability is handled elsewhere.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    namespace: String,
    contents: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            contents: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a slot pre-filled with `contents`.
    pub fn with_contents(namespace: impl Into<String>, contents: impl Into<String>) -> Self {
        let slot = Self::new(namespace);
        *slot.lock() = Some(contents.into());
        slot
    }

    /// The text currently stored, if any.
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.contents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotSlot for MemorySlot {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<()> {
        *self.lock() = Some(contents.to_string());
        Ok(())
    }
}
