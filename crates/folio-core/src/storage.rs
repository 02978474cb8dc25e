//! Key-value persistence for client-side flags.
//!
//! The browser `localStorage` is the production backend; it lives in the web
//! crate behind [`KeyValueStore`]. This module also provides:
//! - [`MemoryStore`] for native hosts and tests
//! - [`UnavailableStore`] which models a blocked or missing storage area
//!
//! Every key the site writes is listed in [`keys`].

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{FolioError, FolioResult};

/// Storage keys shared with the deployed site.
pub mod keys {
    /// Theme preference, `"dark"` or `"light"`
    pub const THEME: &str = "theme";
    /// Identifier of the last section observed on the main view
    pub const LAST_SECTION: &str = "last-section";
    /// Millisecond timestamp of the last successful contact submission
    pub const LAST_EMAIL_TIME: &str = "lastEmailTime";
}

/// A string-to-string store with `localStorage` semantics.
///
/// Writes overwrite unconditionally (last writer wins). Callers treat every
/// error as "storage unavailable" and fall back to in-memory state.
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> FolioResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> FolioResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        (**self).set(key, value)
    }
}

/// Read a key, logging and swallowing any storage failure.
pub fn read_or_none(store: &impl KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage read failed, using default");
            None
        }
    }
}

/// Write a key, logging and swallowing any storage failure.
///
/// Returns whether the value reached storage.
pub fn write_or_warn(store: &impl KeyValueStore, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage write failed, keeping in-memory value");
            false
        }
    }
}

/// In-memory store, cheap to clone (clones share the same map).
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given entries
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.entries.write();
            for (k, v) in entries {
                map.insert(k.to_string(), v.to_string());
            }
        }
        store
    }

    /// Copy of every entry, ordered by key
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that fails every operation, as private browsing modes can.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> FolioResult<Option<String>> {
        Err(FolioError::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> FolioResult<()> {
        Err(FolioError::StorageUnavailable)
    }
}
