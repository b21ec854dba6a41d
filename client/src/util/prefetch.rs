//! Route prefetching.
//!
//! Warms the navigation cache for a known set of routes. The mounted form
//! waits [`PREFETCH_DELAY`] so hints do not compete with the initial page
//! load, and does nothing if the hosting component is gone by then.
//!
//! Prefetching is best effort: nothing here reports failure.

use std::future::Future;
use std::time::Duration;

use super::lifecycle::{Attachment, detach_on_cleanup};
use super::navigation::{Navigator, is_prefetchable};

#[cfg(test)]
#[path = "prefetch_test.rs"]
mod prefetch_test;

pub const PREFETCH_DELAY: Duration = Duration::from_millis(1000);

/// Prefetch every route in order. Blank entries are skipped; duplicates are
/// requested again. Returns the number of prefetches issued.
pub fn prefetch_routes<N>(nav: &N, routes: &[String]) -> usize
where
    N: Navigator + ?Sized,
{
    let mut issued = 0;
    for route in routes.iter().filter(|r| is_prefetchable(r)) {
        nav.prefetch(route);
        issued += 1;
    }
    issued
}

/// Wait for `delay`, then prefetch `routes` if `attachment` is still attached.
pub async fn prefetch_when_settled<D, N>(delay: D, attachment: &Attachment, nav: &N, routes: &[String]) -> usize
where
    D: Future<Output = ()>,
    N: Navigator + ?Sized,
{
    delay.await;
    if !attachment.is_attached() {
        return 0;
    }
    prefetch_routes(nav, routes)
}

/// Prefetch `routes` one [`PREFETCH_DELAY`] after the calling component
/// mounts. Unmounting first cancels the prefetch.
pub fn use_prefetch_routes(routes: Vec<String>) {
    let attachment = Attachment::new();
    detach_on_cleanup(&attachment);

    #[cfg(feature = "hydrate")]
    super::lifecycle::on_attach(move || {
        leptos::task::spawn_local(async move {
            let nav = super::navigation::BrowserNavigator;
            let delay = gloo_timers::future::sleep(PREFETCH_DELAY);
            let issued = prefetch_when_settled(delay, &attachment, &nav, &routes).await;
            log::debug!("prefetched {issued} route(s)");
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (attachment, routes);
    }
}
