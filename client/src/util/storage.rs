//! Tab-scoped key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser state that must survive a full page load but not the tab (pending
//! cache refreshes, for one) goes through [`KeyValueStore`] instead of
//! touching `window.sessionStorage` directly. Pages and components get a
//! store they can swap for [`MemoryStore`] in tests and on the server.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage failures (quota, privacy mode, no window during SSR) are
//! swallowed. Every caller treats a missing value as "nothing to do".

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// String key-value storage with a read-then-delete primitive.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Read `key` and delete it in one call. Returns `None` when absent.
    fn take(&self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        self.remove(key);
        Some(value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }

    fn take(&self, key: &str) -> Option<String> {
        (**self).take(key)
    }
}

/// In-process store used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn take(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }
}

/// `window.sessionStorage`, scoped to the current tab.
#[cfg(feature = "hydrate")]
pub struct SessionStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl SessionStore {
    /// Open the tab's session storage. `None` outside a browser or when the
    /// browser denies access.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}
