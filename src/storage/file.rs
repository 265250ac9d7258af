//! Directory-backed storage: key `k` lives in `<root>/k.json`.
//!
//! Writes land in a temp file inside `root` and are renamed over the target,
//! so a reader never observes a half-written value.

use crate::storage::{Storage, StorageError, StorageResult, validate_key};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const VALUE_EXTENSION: &str = "json";

#[derive(Clone, Debug)]
/// Durable storage rooted at a data directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open `root`, creating it (and its parents) when missing.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            path: root.clone(),
            source,
        })?;
        debug!(root = %root.display(), "opened file storage");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds `key`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let io_err = |source| StorageError::Io {
            path: path.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.root).map_err(io_err)?;
        staged.write_all(value.as_bytes()).map_err(io_err)?;
        staged.as_file().sync_all().map_err(io_err)?;
        staged.persist(&path).map_err(|err| io_err(err.error))?;
        debug!(key, path = %path.display(), bytes = value.len(), "wrote storage value");
        Ok(())
    }
}
