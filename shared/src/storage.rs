//! Session Storage
//!
//! Minimal string key/value interface over per-tab session storage. The
//! browser implementation lives in the frontend; [`MemoryStore`] backs tests
//! and non-browser hosts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors raised by a [`SessionStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Session storage is unavailable")]
    Unavailable,

    #[error("Failed to read session key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write session key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Ephemeral per-tab key/value store.
///
/// Methods take `&self`: the browser store is a shared handle and the page's
/// other scripts may mutate it at any time.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map, like handles to one tab's storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every key, as the browser does when the tab session ends.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose reads and/or writes fail, standing in for a browser that
/// throws security or quota errors.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FailingStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub inner: MemoryStore,
}

#[cfg(test)]
impl SessionStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            });
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.inner.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("a", "1").unwrap();
        assert_eq!(other.get("a").unwrap().as_deref(), Some("1"));

        other.clear();
        assert!(store.get("a").unwrap().is_none());
    }

    #[test]
    fn clear_empties_store() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.len(), 2);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::Write {
            key: "k".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Failed to write session key k: QuotaExceededError"
        );
        assert_eq!(
            format!("{}", StorageError::Unavailable),
            "Session storage is unavailable"
        );
    }
}
