use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use sati_core::content::{self, ABOUT_INTRO, COMPANY_INFO, MISSION, SERVICES, STATS, VISION};
use sati_core::counter::{CounterAnimation, CounterDriver};
use sati_core::icons::IconName;

use super::Icon;
use crate::browser::{self, BrowserScheduler};

#[component]
pub fn AboutUs(
    scroll_y: ReadSignal<f64>,
    counter_duration: Duration,
    counter_frame: Duration,
) -> impl IntoView {
    let stats_row = NodeRef::<html::Div>::new();

    let (drivers, texts): (Vec<_>, Vec<_>) = STATS
        .iter()
        .map(|stat| {
            let driver = CounterDriver::new(
                CounterAnimation::new(stat.number, counter_duration),
                BrowserScheduler,
                counter_frame,
            );
            let text = RwSignal::new(driver.text());
            (driver, text)
        })
        .unzip();
    let drivers = StoredValue::new_local(drivers);

    // Counters start the first time the stats row is on screen.
    let frame_targets = texts.clone();
    Effect::new(move |_| {
        scroll_y.track();
        let Some(row) = stats_row.get() else {
            return;
        };
        if !browser::is_in_viewport(&row) {
            return;
        }
        drivers.update_value(|drivers| {
            for (driver, text) in drivers.iter_mut().zip(&frame_targets) {
                let text = *text;
                driver.start(move |value| text.set(value));
            }
        });
    });

    let story = content::story();

    let stat_cards = STATS
        .iter()
        .zip(texts)
        .map(|(stat, text)| {
            view! {
                <div class="stat-card">
                    <div class="stat-number">{move || text.get()}</div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    let services = SERVICES
        .iter()
        .map(|service| {
            view! {
                <div class="service-card">
                    <div class="service-icon">
                        <Icon name=service.icon />
                    </div>
                    <h4 class="service-title">{service.title}</h4>
                    <p class="service-description">{service.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section about">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "About "
                        <span class="text-gradient">{COMPANY_INFO.name}</span>
                    </h2>
                    <p class="section-description">{ABOUT_INTRO}</p>
                </div>

                <div class="about-grid">
                    <div class="about-story">
                        <h3>"Our Story"</h3>
                        {story.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
                    </div>
                    <div class="about-visual">
                        <span class="placeholder">"Company Image Placeholder"</span>
                        <div class="about-badges">
                            <div class="about-badge">
                                <strong>"50+"</strong>
                                <span>"Projects"</span>
                            </div>
                            <div class="about-badge">
                                <strong>{COMPANY_INFO.experience}</strong>
                                <span>"Years"</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="stats-grid" node_ref=stats_row>
                    {stat_cards}
                </div>

                <h3 class="subsection-title">"Our Services"</h3>
                <div class="services-grid">{services}</div>

                <div class="mission-grid">
                    <div class="mission-card">
                        <Icon name=IconName::Target />
                        <h3>"Our Mission"</h3>
                        <p>{MISSION}</p>
                    </div>
                    <div class="mission-card">
                        <Icon name=IconName::Eye />
                        <h3>"Our Vision"</h3>
                        <p>{VISION}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
