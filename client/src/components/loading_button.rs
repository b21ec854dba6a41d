//! Button that shows a spinner and ignores clicks while an action runs.

use leptos::prelude::*;

#[cfg(test)]
#[path = "loading_button_test.rs"]
mod loading_button_test;

/// Class list for the button: `base` plus a `--loading` modifier on its first
/// class while loading. Blank `base` falls back to `btn`.
pub fn loading_button_class(base: &str, loading: bool) -> String {
    let base = base.trim();
    let base = if base.is_empty() { "btn" } else { base };
    if !loading {
        return base.to_owned();
    }
    let block = base.split_whitespace().next().unwrap_or("btn");
    format!("{base} {block}--loading")
}

/// Whether a click should reach the wrapped handler.
pub fn accepts_click(loading: bool, disabled: bool) -> bool {
    !loading && !disabled
}

#[component]
pub fn LoadingButton(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: String,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let class_name = move || loading_button_class(&class, loading.get());

    view! {
        <button
            type="button"
            class=class_name
            title=title
            disabled=move || !accepts_click(loading.get(), is_disabled())
            aria-busy=move || if loading.get() { "true" } else { "false" }
            on:click=move |_| {
                if accepts_click(loading.get_untracked(), disabled.get_untracked().unwrap_or(false)) {
                    on_click.run(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}
