//! Pending cache-refresh signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The logout flow sets this flag right before leaving the page; the next
//! page to mount [`crate::components::cache_clear_observer::CacheClearObserver`]
//! consumes it and refreshes. The flag is a single slot with a single
//! consumer: setting it twice before a mount still yields one refresh.

use crate::util::storage::KeyValueStore;

#[cfg(test)]
#[path = "cache_clear_test.rs"]
mod cache_clear_test;

/// Storage key holding the flag.
pub const CACHE_CLEAR_KEY: &str = "clearCache";

/// The only value that means "refresh pending".
pub const PENDING: &str = "true";

/// Cache-clear flag over a tab-scoped store.
#[derive(Debug)]
pub struct CacheClearFlag<S> {
    store: S,
}

impl<S: KeyValueStore> CacheClearFlag<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Mark a refresh as pending for the next mounted observer.
    pub fn request(&self) {
        self.store.set(CACHE_CLEAR_KEY, PENDING);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.store.get(CACHE_CLEAR_KEY).as_deref() == Some(PENDING)
    }

    /// Remove the flag and report whether a refresh was pending. Any stored
    /// value is cleared, including ones other than `"true"`.
    pub fn consume(&self) -> bool {
        self.store.take(CACHE_CLEAR_KEY).as_deref() == Some(PENDING)
    }
}
