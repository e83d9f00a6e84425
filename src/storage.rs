//! Key-value persistence shared by the theme and language stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes `localStorage`, which can be missing (privacy modes),
//! full, or throw on access. Stores above this trait treat every failure as
//! "entry absent" so the page degrades instead of breaking.

use std::cell::RefCell;
use std::collections::HashMap;

/// Error returned by [`KeyValueStorage`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The platform offers no storage (disabled, sandboxed, or absent).
    #[error("storage unavailable")]
    Unavailable,
    /// Reading a key failed.
    #[error("storage read failed: {0}")]
    Read(String),
    /// Writing or removing a key failed (quota exceeded, access denied).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Origin-scoped string storage.
///
/// Methods take `&self`: browser storage is a shared handle and every store
/// built on top of it may hold its own clone.
pub trait KeyValueStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::rc::Rc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage, used natively and as a stand-in for `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a single entry.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
