//! Signed-out landing page.

use leptos::prelude::*;

use crate::app::HOME_PATH;
use crate::components::prefetch_routes::PrefetchRoutes;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PrefetchRoutes routes=vec![HOME_PATH.to_owned()]/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <p class="login-card__subtitle">"You are signed out."</p>
                <a href=HOME_PATH class="login-button" rel="external">
                    "Sign in"
                </a>
            </div>
        </div>
    }
}
