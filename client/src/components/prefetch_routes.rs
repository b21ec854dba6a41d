//! Invisible component that prefetches a fixed set of routes after mount.

use leptos::prelude::*;

use crate::util::prefetch::use_prefetch_routes;

/// Prefetch `routes` shortly after mounting. Renders nothing.
#[component]
pub fn PrefetchRoutes(#[prop(into)] routes: Vec<String>) -> impl IntoView {
    use_prefetch_routes(routes);
}
