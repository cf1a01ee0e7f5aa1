use std::time::Duration;

use leptos::prelude::*;
use sati_core::content::{COMPANY_INFO, NAVIGATION_ITEMS};
use sati_core::icons::IconName;
use sati_core::scroll_spy::SectionId;

use super::Icon;

#[component]
pub fn Header(
    dark: ReadSignal<bool>,
    #[prop(into)] scrolled: Signal<bool>,
    active: ReadSignal<Option<SectionId>>,
    on_toggle_dark: Callback<()>,
    on_navigate: Callback<SectionId>,
    menu_close_delay: Duration,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // Close the mobile menu first, scroll once it is out of the way.
    let open_section = move |id: SectionId| {
        set_menu_open.set(false);
        set_timeout(move || on_navigate.run(id), menu_close_delay);
    };

    let links = move |mobile: bool| {
        NAVIGATION_ITEMS
            .iter()
            .map(|item| {
                let id = item.section_id();
                let target = id.clone();
                let is_active = move || active.with(|current| current.as_ref() == Some(&id));
                let class = move || match (mobile, is_active()) {
                    (false, true) => "nav-link active",
                    (false, false) => "nav-link",
                    (true, true) => "mobile-nav-link active",
                    (true, false) => "mobile-nav-link",
                };
                view! {
                    <button class=class on:click=move |_| open_section(target.clone())>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || if scrolled.get() { "header scrolled" } else { "header" }>
            <div class="container">
                <div class="header-inner">
                    <div class="header-brand">
                        <div class="header-logo">
                            <span>{COMPANY_INFO.monogram()}</span>
                        </div>
                        <span class="header-title">{COMPANY_INFO.name}</span>
                    </div>

                    <nav class="nav-links">{links(false)}</nav>

                    <div class="header-actions">
                        <button
                            class="icon-btn"
                            aria-label="Toggle dark mode"
                            on:click=move |_| on_toggle_dark.run(())
                        >
                            {move || {
                                let name = if dark.get() { IconName::Sun } else { IconName::Moon };
                                view! { <Icon name=name /> }
                            }}
                        </button>
                        <button
                            class="icon-btn mobile-only"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                let name = if menu_open.get() { IconName::Close } else { IconName::Menu };
                                view! { <Icon name=name /> }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile navigation
                <Show when=move || menu_open.get()>
                    <nav class="mobile-nav">{links(true)}</nav>
                </Show>
            </div>
        </header>
    }
}
