//! # JSON File Storage
//!
//! Durable key-value storage in a single JSON object file. Writes go to a
//! sibling temp file first and are then renamed over the original, so a
//! crash mid-write leaves the previous contents intact.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::StorageError;
use crate::ports::DurableStorage;

/// File name used inside a data directory.
pub const STORAGE_FILE_NAME: &str = "session.json";

/// JSON-file backed [`DurableStorage`].
///
/// Reads and writes use blocking `std::fs` calls on the caller's thread.
/// The session only touches storage once at construction and once per
/// token fetch, and the file holds a single short value.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Storage at an explicit file path. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Storage in `dir`, creating the directory if needed.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        fs::create_dir_all(dir.as_ref())?;
        Ok(Self::new(dir.as_ref().join(STORAGE_FILE_NAME)))
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt(e.to_string()))
    }
}

impl DurableStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();

        // Corrupt contents are discarded on write.
        let mut values = self.load().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        let json = serde_json::to_vec_pretty(&values)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!("[sf-02] Stored {} in {}", key, self.path.display());
        Ok(())
    }
}
