//! Durable key/value storage used to persist client-side state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// An error raised by a [`KeyValueStorage`] backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be reached at all (no `localStorage`, no data dir).
    #[error("durable storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// The stored value exists but cannot be decoded.
    #[error("stored value for `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

/// A string key/value store that survives page reloads.
///
/// Browser builds back this with `localStorage`, desktop builds with files in
/// the user's data directory.
pub trait KeyValueStorage {
    /// Reads a value. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct MemoryStorageInner {
    entries: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// An in-memory [`KeyValueStorage`].
///
/// Clones share the same entries, so a test can hand one clone to a store and
/// keep another to inspect what was written. Reads and writes can be made to
/// fail to exercise fallback paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryStorageInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a storage pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .inner
            .borrow_mut()
            .entries
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Returns the current value for `key` without counting as a read.
    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Number of successful `set` and `remove` calls so far.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(StorageError::Read {
                key: key.to_owned(),
                reason: "reads disabled".to_owned(),
            });
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Write {
                key: key.to_owned(),
                reason: "writes disabled".to_owned(),
            });
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Write {
                key: key.to_owned(),
                reason: "writes disabled".to_owned(),
            });
        }
        inner.entries.remove(key);
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let observer = MemoryStorage::new();
        let mut writer = observer.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(observer.value("k").as_deref(), Some("v"));
        assert_eq!(observer.writes(), 1);
    }

    #[test]
    fn missing_key_reads_as_none() {
        assert_eq!(MemoryStorage::new().get("absent"), Ok(None));
    }

    #[test]
    fn injected_failures_surface_as_errors() {
        let mut storage = MemoryStorage::with_entry("k", "v");
        storage.fail_reads(true);
        storage.fail_writes(true);
        assert!(matches!(storage.get("k"), Err(StorageError::Read { .. })));
        assert!(matches!(storage.set("k", "w"), Err(StorageError::Write { .. })));
        assert_eq!(storage.value("k").as_deref(), Some("v"));
        assert_eq!(storage.writes(), 0);
    }
}
