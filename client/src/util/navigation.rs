//! Navigation-layer operations used outside the router: prefetch a route
//! ahead of time, or force the current view to reload its data.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Prefetch and refresh hooks into whatever owns page navigation.
pub trait Navigator {
    /// Ask for `path` to be fetched ahead of a future navigation.
    fn prefetch(&self, path: &str);
    /// Drop cached data for the current view and fetch it again.
    fn refresh(&self);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn prefetch(&self, path: &str) {
        (**self).prefetch(path);
    }

    fn refresh(&self) {
        (**self).refresh();
    }
}

/// A route path worth prefetching: non-empty after trimming.
pub fn is_prefetchable(path: &str) -> bool {
    !path.trim().is_empty()
}

/// CSS selector matching an existing prefetch hint for `path`.
pub fn prefetch_hint_selector(path: &str) -> String {
    let escaped = path.replace('\\', "\\\\").replace('"', "\\\"");
    format!("link[rel=\"prefetch\"][href=\"{escaped}\"]")
}

/// Browser navigator. Prefetch inserts `<link rel="prefetch">` hints into
/// `<head>`; refresh reloads the current location.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn prefetch(&self, path: &str) {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(Some(_)) = doc.query_selector(&prefetch_hint_selector(path)) {
            return;
        }
        let Some(head) = doc.head() else {
            return;
        };
        let Ok(link) = doc.create_element("link") else {
            return;
        };
        let _ = link.set_attribute("rel", "prefetch");
        let _ = link.set_attribute("as", "document");
        let _ = link.set_attribute("href", path);
        let _ = head.append_child(&link);
    }

    fn refresh(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
