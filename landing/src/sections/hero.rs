use leptos::prelude::*;
use sati_core::content::{COMPANY_INFO, HERO_DESCRIPTION};
use sati_core::icons::IconName;
use sati_core::scroll_spy::SectionId;

use super::Icon;

#[component]
pub fn Hero(on_navigate: Callback<SectionId>) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {COMPANY_INFO.subtitle}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">{COMPANY_INFO.tagline}</span>
                        </h1>
                        <p class="hero-description">{HERO_DESCRIPTION}</p>
                        <div class="hero-actions">
                            <button
                                class="btn btn-primary"
                                on:click=move |_| on_navigate.run(SectionId::from("contact"))
                            >
                                "Get Started"
                                <Icon name=IconName::ArrowRight />
                            </button>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| on_navigate.run(SectionId::from("about"))
                            >
                                "View Our Work"
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <span class="placeholder">"Hero Image / Video Placeholder"</span>
                    </div>
                </div>
                <button
                    class="hero-scroll"
                    aria-label="Scroll down"
                    on:click=move |_| on_navigate.run(SectionId::from("about"))
                >
                    <span>"Scroll to explore"</span>
                    <Icon name=IconName::ChevronDown />
                </button>
            </div>
        </section>
    }
}
