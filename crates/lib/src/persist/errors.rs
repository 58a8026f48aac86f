//! Persistence error types for snapshot slots.

use thiserror::Error;

/// Errors that can occur while reading or writing a store snapshot.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PersistError {
    /// Snapshot could not be encoded.
    #[error("Snapshot serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Stored text is not a valid snapshot.
    #[error("Snapshot in slot '{namespace}' could not be decoded")]
    DeserializationFailed {
        /// Slot the text came from
        namespace: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot was written by an incompatible store version.
    #[error("Unsupported snapshot version {found} in slot '{namespace}'; expected {expected}")]
    UnsupportedVersion {
        /// Slot the snapshot came from
        namespace: String,
        /// Version found in the snapshot
        found: u32,
        /// Version this build reads and writes
        expected: u32,
    },

    /// Reading or writing the backing file failed.
    #[error("Snapshot file I/O error on {path}")]
    FileIo {
        /// File that was being accessed
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Namespace is not usable as a storage key.
    #[error("Invalid storage namespace '{namespace}': {reason}")]
    InvalidNamespace {
        /// The rejected namespace
        namespace: String,
        /// Why it was rejected
        reason: String,
    },
}

impl PersistError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(self, PersistError::FileIo { .. })
    }

    /// Check if the stored snapshot itself is unusable.
    pub fn is_corrupt_snapshot(&self) -> bool {
        matches!(
            self,
            PersistError::DeserializationFailed { .. } | PersistError::UnsupportedVersion { .. }
        )
    }

    /// Check if this error is a serialization or deserialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            PersistError::SerializationFailed { .. } | PersistError::DeserializationFailed { .. }
        )
    }

    /// Get the namespace if this error is about a specific slot.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            PersistError::DeserializationFailed { namespace, .. }
            | PersistError::UnsupportedVersion { namespace, .. }
            | PersistError::InvalidNamespace { namespace, .. } => Some(namespace),
            _ => None,
        }
    }
}

impl From<PersistError> for crate::Error {
    fn from(err: PersistError) -> Self {
        crate::Error::Persist(err)
    }
}
