use leptos::prelude::*;
use sati_core::icons::IconName;

/// Inline stroke icon; inherits `currentColor`.
#[component]
pub fn Icon(name: IconName, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 256 256"
            fill="none"
            stroke="currentColor"
            stroke-width="16"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=name.label()
        >
            <path d=name.path() />
        </svg>
    }
}
