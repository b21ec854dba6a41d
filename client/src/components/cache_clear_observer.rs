//! Mount-time consumer of the cache-clear flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the app root. After a logout the flag is set and the tab
//! navigates with a full page load, so the fresh app mounts this observer,
//! which takes the flag and refreshes the view exactly once.

use leptos::prelude::*;

use crate::state::cache_clear::CacheClearFlag;
use crate::util::navigation::Navigator;
use crate::util::storage::KeyValueStore;

#[cfg(test)]
#[path = "cache_clear_observer_test.rs"]
mod cache_clear_observer_test;

/// Consume the flag and refresh if it was pending. Returns whether a refresh
/// was requested.
///
/// The flag is removed before `refresh` runs, so a re-entrant mount during
/// the refresh sees nothing pending.
pub fn observe_cache_clear<S, N>(flag: &CacheClearFlag<S>, nav: &N) -> bool
where
    S: KeyValueStore,
    N: Navigator + ?Sized,
{
    if !flag.consume() {
        return false;
    }
    nav.refresh();
    true
}

/// Invisible component that checks the cache-clear flag when it mounts.
/// Skipped silently when tab storage is unavailable.
#[component]
pub fn CacheClearObserver() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    crate::util::lifecycle::on_attach(|| {
        let Some(store) = crate::util::storage::SessionStore::open() else {
            return;
        };
        let nav = crate::util::navigation::BrowserNavigator;
        if observe_cache_clear(&CacheClearFlag::new(store), &nav) {
            log::info!("cache clear pending; refreshing view");
        }
    });
}
