//! JSON file store.
//!
//! All keys live in one JSON object on disk. Every write rewrites the whole
//! file atomically, which is fine for a store holding a session flag and one
//! note per identity.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{NotepadError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::KeyValueStore;

/// File-backed store holding a flat `{"key": "value"}` object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(NotepadError::Storage(format!(
                    "Failed to read store {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            NotepadError::Storage(format!(
                "Store {} is not a JSON object of strings: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let contents = serde_json::to_vec_pretty(values)?;
        write_atomic(&self.path, &contents).map_err(|e| {
            NotepadError::Storage(format!(
                "Failed to write store {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        let mut values = self.read_all()?;
        let removed = values.remove(key).is_some();
        if removed {
            self.write_all(&values)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notepad.json");

        let mut store = JsonFileStore::open(&path);
        store.set("walletConnected", "0xabc").unwrap();
        store.set("savedNote:0xabc", "{}").unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("walletConnected").unwrap().as_deref(),
            Some("0xabc")
        );
        assert!(reopened.contains("savedNote:0xabc").unwrap());
    }

    #[test]
    fn test_delete_absent_does_not_create_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notepad.json");
        let mut store = JsonFileStore::open(&path);

        assert!(!store.delete("slot").unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notepad.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(matches!(store.get("slot"), Err(NotepadError::Storage(_))));
    }
}
