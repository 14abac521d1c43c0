use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Default capacity for the persistent area, mirroring the usual
/// per-origin browser storage budget.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage quota exceeded: {needed} bytes needed, {limit} available")]
    QuotaExceeded { needed: u64, limit: u64 },

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable key/value area: one JSON document per logical key, written
/// atomically, with a finite total capacity that writes can exceed.
#[derive(Clone)]
pub struct KvStore {
    base_path: PathBuf,
    max_bytes: u64,
}

impl KvStore {
    /// Open (and create if needed) a store rooted at `base_path`.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path)?;
        Ok(Self {
            base_path,
            max_bytes: DEFAULT_QUOTA_BYTES,
        })
    }

    /// Override the capacity limit. Tests shrink this to force quota
    /// failures deterministically.
    pub fn with_quota(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Get the default data directory for the app.
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("odonto-future"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// File path backing a logical key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Read the raw value for a key. Missing key is `None`, not an error.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Write a value using atomic write (write to .tmp then rename).
    ///
    /// Fails with `QuotaExceeded` when the resulting total usage would go
    /// over the capacity limit; the previous value stays intact.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let needed = self.usage_excluding(key)? + value.len() as u64;
        if needed > self.max_bytes {
            return Err(StorageError::QuotaExceeded {
                needed,
                limit: self.max_bytes,
            });
        }

        let path = self.key_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Remove a key entirely. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Total bytes used by all keys except `key` (the one about to be
    /// overwritten).
    fn usage_excluding(&self, key: &str) -> Result<u64> {
        let excluded = self.key_path(key);
        let mut total = 0;

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let path = entry.path();
            if path == excluded {
                continue;
            }
            if path.extension().map_or(false, |ext| ext == "json") {
                total += entry.metadata()?.len();
            }
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (KvStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let (store, _temp) = create_test_store();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let (store, _temp) = create_test_store();
        store.set("greeting", "\"ola\"").unwrap();
        assert_eq!(store.get("greeting").unwrap().unwrap(), "\"ola\"");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (store, _temp) = create_test_store();
        store.set("k", "1").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_value() {
        let (store, _temp) = create_test_store();
        let store = store.with_quota(16);

        store.set("k", "small").unwrap();

        let err = store.set("k", &"x".repeat(64)).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));

        // Failed write must not clobber the durable value
        assert_eq!(store.get("k").unwrap().unwrap(), "small");
    }

    #[test]
    fn test_quota_counts_other_keys() {
        let (store, _temp) = create_test_store();
        let store = store.with_quota(16);

        store.set("a", &"x".repeat(12)).unwrap();
        let err = store.set("b", &"y".repeat(12)).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));

        // Overwriting the existing key does not double-count it
        store.set("a", &"z".repeat(14)).unwrap();
    }
}
