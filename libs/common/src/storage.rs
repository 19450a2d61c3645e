//! File-backed local storage for the StudySync client
//!
//! The browser front end this client replaces kept its session state in
//! localStorage. This module provides the same string key/value surface,
//! persisted as one file per key under a configurable directory.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Local key/value store, one file per key
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(LocalStore { dir })
    }

    /// Get the value stored under `key`, or `None` if the key is absent
    pub fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// Set `key` to `value`, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        debug!("Stored local key: {}", key);
        Ok(())
    }

    /// Remove `key`; removing an absent key is not an error
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed local key: {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// Resolve the file path for `key`, rejecting keys that are unsafe as
    /// file names
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_set_get_roundtrip() {
        let (_dir, store) = temp_store();

        store.set("token", "abc123").unwrap();
        assert_eq!(store.get("token").unwrap(), Some("abc123".to_string()));

        store.set("token", "def456").unwrap();
        assert_eq!(store.get("token").unwrap(), Some("def456".to_string()));
    }

    #[test]
    fn test_get_missing_key() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = temp_store();

        store.set("user", "{}").unwrap();
        store.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);

        // Removing an absent key is fine
        store.remove("user").unwrap();
    }

    #[test]
    fn test_invalid_key_rejected() {
        let (_dir, store) = temp_store();

        assert!(matches!(
            store.get("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.set("", "x"), Err(StorageError::InvalidKey(_))));
    }
}
