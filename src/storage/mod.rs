//! Durable key-value layer underneath the catalog.
//!
//! Values are opaque strings (the catalog stores JSON text). `FileStorage`
//! keeps one file per key under a data directory; `MemoryStorage` is the
//! in-process fake used by tests and embedders that do not need durability.
//! Nothing here is transactional across keys.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key '{0}': keys must match ^[A-Za-z0-9_.-]+$")]
    InvalidKey(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String-valued key-value persistence.
///
/// `read` returns `Ok(None)` for a key that was never written. Writes replace
/// the whole value.
pub trait Storage {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}

/// Keys double as file names, so they are restricted to a portable set.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
