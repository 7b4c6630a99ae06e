//! File-backed key-value store with atomic writes
//!
//! Each key maps to one JSON file in the data directory. Writes go to a
//! temp file first and are renamed into place, so a crash mid-write leaves
//! the previous value intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use crate::config::DataPaths;
use crate::error::{LedgerError, LedgerResult};

use super::KeyValueStore;

/// Key-value store backed by one file per key
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the configured data directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(paths: &DataPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            data_dir: paths.data_dir(),
        })
    }

    /// Path of the file backing `key`
    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.path_for(key);

        // Temp file in the same directory, so the rename stays atomic
        let temp_path = path.with_extension("json.tmp");

        let mut file = File::create(&temp_path)
            .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

        file.write_all(value.as_bytes())
            .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;

        file.sync_all()
            .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up the temp file if the rename fails
            let _ = fs::remove_file(&temp_path);
            LedgerError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).map_err(|e| {
            LedgerError::Storage(format!("Failed to remove {}: {}", path.display(), e))
        })
    }
}
