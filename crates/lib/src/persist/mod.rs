//! Durable key-value slots for store snapshots.
//!
//! The store writes its entire state, not a diff, to a single slot after
//! every mutation and reads it back once at startup. A slot is an opaque
//! text cell addressed by a namespace, the same model as browser local
//! storage, so this module is split in two:
//!
//! * [`SnapshotSlot`] implementations move raw text ([`FileSlot`],
//!   [`MemorySlot`]).
//! * [`encode`] / [`decode`] translate between a [`Snapshot`] and the
//!   versioned JSON envelope kept in the slot.

mod errors;
mod file;
mod memory;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub use errors::PersistError;
pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::{Result, store::Snapshot};

/// The snapshot envelope version this build reads and writes.
pub const PERSISTENCE_VERSION: u32 = 0;

/// A single durable text cell addressed by a namespace.
///
/// Implementations must be `Send` and `Sync` so a store can be shared across
/// threads. Writes replace the previous contents entirely.
pub trait SnapshotSlot: Send + Sync + Debug {
    /// The namespace key this slot is addressed by.
    fn namespace(&self) -> &str;

    /// Read the stored text, or `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored text.
    fn write(&self, contents: &str) -> Result<()>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a Snapshot,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: Snapshot,
}

/// Only the version field, so an incompatible state shape is reported as a
/// version mismatch rather than a decode failure.
#[derive(Deserialize)]
struct VersionProbe {
    #[serde(default)]
    version: u32,
}

/// Encode a snapshot as the versioned JSON envelope.
pub fn encode(snapshot: &Snapshot) -> Result<String> {
    let envelope = EnvelopeRef {
        state: snapshot,
        version: PERSISTENCE_VERSION,
    };
    serde_json::to_string(&envelope)
        .map_err(|source| PersistError::SerializationFailed { source }.into())
}

/// Decode the versioned JSON envelope read from `namespace`.
pub fn decode(namespace: &str, contents: &str) -> Result<Snapshot> {
    let probe: VersionProbe =
        serde_json::from_str(contents).map_err(|source| PersistError::DeserializationFailed {
            namespace: namespace.to_string(),
            source,
        })?;
    if probe.version != PERSISTENCE_VERSION {
        return Err(PersistError::UnsupportedVersion {
            namespace: namespace.to_string(),
            found: probe.version,
            expected: PERSISTENCE_VERSION,
        }
        .into());
    }

    let envelope: Envelope =
        serde_json::from_str(contents).map_err(|source| PersistError::DeserializationFailed {
            namespace: namespace.to_string(),
            source,
        })?;
    Ok(envelope.state)
}

/// Read and decode the snapshot held by `slot`, if any.
pub fn load(slot: &dyn SnapshotSlot) -> Result<Option<Snapshot>> {
    match slot.read()? {
        Some(contents) => decode(slot.namespace(), &contents).map(Some),
        None => Ok(None),
    }
}

/// Encode `snapshot` and write it to `slot`.
pub fn save(slot: &dyn SnapshotSlot, snapshot: &Snapshot) -> Result<()> {
    let contents = encode(snapshot)?;
    slot.write(&contents)
}
