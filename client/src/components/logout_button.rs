//! Logout button wired to the session terminator and the cache-clear flag.
//!
//! On success the cache-clear flag is set before the full-page navigation,
//! so the next page's observer sees it. On failure the button returns to
//! idle and shows the error.

use leptos::prelude::*;

use crate::app::LOGIN_PATH;
use crate::components::loading_button::LoadingButton;

#[component]
pub fn LogoutButton(#[prop(optional, into)] redirect_to: Option<String>) -> impl IntoView {
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let redirect = redirect_to.unwrap_or_else(|| LOGIN_PATH.to_owned());

    let on_click = Callback::new(move |()| {
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let redirect = redirect.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::logout().await {
                    Ok(()) => {
                        if let Some(store) = crate::util::storage::SessionStore::open() {
                            crate::state::cache_clear::CacheClearFlag::new(store).request();
                        }
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&redirect);
                        }
                    }
                    Err(e) => {
                        log::warn!("logout failed: {e}");
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &redirect;
        }
    });

    view! {
        <LoadingButton loading=loading on_click=on_click class="btn toolbar__logout" title="Logout">
            "Logout"
        </LoadingButton>
        <Show when=move || error.get().is_some()>
            <p class="logout-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
