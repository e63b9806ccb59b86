//! Local key-value persistence.
//!
//! Each key maps to one JSON file under the data directory (`<dir>/<key>.json`)
//! holding a JSON array of records. Two fixed keys exist, one per collection.
//! I/O is synchronous and blocking; writes replace the whole file.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::errors::{Error, Result};

/// Storage key for the transaction collection.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Storage key for the lending collection.
pub const LENDINGS_KEY: &str = "lendings";

/// Handle to the on-disk key-value store.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Opens the store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns `Error::Storage` if the directory cannot be created.
    #[instrument]
    pub fn open<P: AsRef<Path> + std::fmt::Debug>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::Storage(format!("Failed to create data directory {dir:?}: {e}"))
        })?;
        debug!("Opened storage at {:?}", dir);
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads the collection stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written. An unreadable
    /// or unparseable file is an error; the caller decides how to recover.
    ///
    /// # Errors
    /// Returns `Error::Storage` on read failure and `Error::Json` when the
    /// file contents are not a valid JSON array of `T`.
    #[instrument(skip(self))]
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No persisted data for key '{}'", key);
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .map_err(|e| Error::Storage(format!("Failed to read {path:?}: {e}")))?;
        let records: Vec<T> = serde_json::from_str(&contents)?;
        debug!("Read {} records for key '{}'", records.len(), key);
        Ok(Some(records))
    }

    /// Serializes `records` and writes them under `key`, replacing any
    /// previous contents.
    ///
    /// # Errors
    /// Returns `Error::Json` if serialization fails and `Error::Storage` if
    /// the file cannot be written.
    #[instrument(skip(self, records))]
    pub fn write<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let path = self.path_for(key);
        let contents = serde_json::to_string(records)?;
        fs::write(&path, contents)
            .map_err(|e| Error::Storage(format!("Failed to write {path:?}: {e}")))?;
        debug!("Wrote {} records for key '{}'", records.len(), key);
        Ok(())
    }

    /// Whether a file exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}
