//! File-backed snapshot slot.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PersistError, SnapshotSlot};
use crate::{Result, constants::SNAPSHOT_FILE_EXTENSION};

/// Stores the snapshot as `<dir>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    namespace: String,
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot for `namespace` inside `dir`.
    ///
    /// The directory is not created here; writes fail if it is missing.
    pub fn new(dir: impl AsRef<Path>, namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        validate_namespace(&namespace)?;
        let path = dir
            .as_ref()
            .join(format!("{namespace}.{SNAPSHOT_FILE_EXTENSION}"));
        Ok(Self { namespace, path })
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> crate::Error {
        PersistError::FileIo {
            path: self.path.display().to_string(),
            source,
        }
        .into()
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    let reason = if namespace.is_empty() {
        Some("namespace is empty")
    } else if namespace == "." || namespace == ".." {
        Some("namespace is a relative path component")
    } else if namespace.contains(['/', '\\']) {
        Some("namespace contains a path separator")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PersistError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

impl SnapshotSlot for FileSlot {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        std::fs::write(&self.path, contents).map_err(|e| self.io_error(e))
    }
}
