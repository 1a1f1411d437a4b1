//! Key-value store trait definition.
//!
//! The `KeyValueStore` trait is the injected storage seam. The notepad only
//! ever needs get/set/delete by string key, so any backend that can do that
//! (memory, a JSON file, SQLite) can hold the saved note and the session.

use crate::error::Result;

/// String key-value storage.
///
/// All implementations must ensure:
/// - A missing key reads as `Ok(None)`, never as an error
/// - `set` fully replaces any previous value (last write wins)
/// - Writes are durable once `set`/`delete` return `Ok`
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `NotepadError::Storage` (or a backend-specific variant) if the
    /// write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`.
    ///
    /// # Returns
    ///
    /// Returns `true` if a value was removed, `false` if the key was absent.
    fn delete(&mut self, key: &str) -> Result<bool>;

    /// Whether a value exists under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        (**self).delete(key)
    }
}
