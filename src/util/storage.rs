//! Key-value preference storage.
//!
//! DESIGN
//! ======
//! `PreferenceStore` is the only way the theme logic touches persistence.
//! The browser implementation wraps `localStorage`; `MemoryStore` backs
//! native tests and pages where `localStorage` is unavailable.
//!
//! TRADE-OFFS
//! ==========
//! Failures are surfaced as `StorageError` here and downgraded to "absent" /
//! no-op by callers. Private browsing modes and disabled storage throw on
//! access, and a failed preference write must never break the page.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Origin-scoped string storage.
///
/// Methods take `&self`: the browser store is a handle to shared state, and
/// all access happens on the single UI thread.
pub trait PreferenceStore {
    /// Read `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Store kept in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that already holds `key = value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage`, or nothing when the browser refuses access.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl BrowserStore {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}
