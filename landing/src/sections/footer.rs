use leptos::prelude::*;
use sati_core::content::{COMPANY_INFO, NAVIGATION_ITEMS, SOCIAL_LINKS};
use sati_core::icons::IconName;
use sati_core::scroll_spy::SectionId;

use super::Icon;
use crate::browser;

#[component]
pub fn Footer(on_navigate: Callback<SectionId>) -> impl IntoView {
    let quick_links = NAVIGATION_ITEMS
        .iter()
        .map(|item| {
            let id = item.section_id();
            view! {
                <button class="footer-link" on:click=move |_| on_navigate.run(id.clone())>
                    {item.label}
                </button>
            }
        })
        .collect_view();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            view! {
                <a
                    class="footer-social"
                    href=social.url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=social.name
                >
                    <Icon name=social.icon />
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span>{COMPANY_INFO.monogram()}</span>
                        </div>
                        <span class="footer-title">{COMPANY_INFO.name}</span>
                        <p>{COMPANY_INFO.tagline}</p>
                        <p class="muted">{COMPANY_INFO.subtitle}</p>
                    </div>

                    <div class="footer-column">
                        <h4>"Quick Links"</h4>
                        {quick_links}
                    </div>

                    <div class="footer-column">
                        <h4>"Contact"</h4>
                        <a class="footer-link" href=COMPANY_INFO.mailto()>
                            <Icon name=IconName::Mail />
                            {COMPANY_INFO.email}
                        </a>
                        <a class="footer-link" href=COMPANY_INFO.tel()>
                            <Icon name=IconName::Phone />
                            {COMPANY_INFO.phone}
                        </a>
                        <span class="footer-link">
                            <Icon name=IconName::MapPin />
                            {COMPANY_INFO.address}
                        </span>
                    </div>

                    <div class="footer-column">
                        <h4>"Follow Us"</h4>
                        <div class="footer-socials">{socials}</div>
                    </div>
                </div>
                <p class="footer-copyright">
                    {format!(
                        "\u{a9} {} {}. All rights reserved.",
                        browser::current_year(),
                        COMPANY_INFO.name,
                    )}
                </p>
            </div>
        </footer>
    }
}
