use leptos::prelude::*;
use sati_core::icons::IconName;

use super::Icon;
use crate::browser;

#[component]
pub fn ScrollToTop(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <button
                class="scroll-to-top"
                aria-label="Back to top"
                on:click=move |_| browser::smooth_scroll_to(0.0)
            >
                <Icon name=IconName::ArrowUp />
            </button>
        </Show>
    }
}
