//! Signed-in landing page.

use leptos::prelude::*;

use crate::app::LOGIN_PATH;
use crate::components::logout_button::LogoutButton;
use crate::components::prefetch_routes::PrefetchRoutes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PrefetchRoutes routes=vec![LOGIN_PATH.to_owned()]/>
        <div class="home-page">
            <header class="toolbar">
                <h1 class="toolbar__title">"Portal"</h1>
                <LogoutButton/>
            </header>
        </div>
    }
}
