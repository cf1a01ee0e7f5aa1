use std::time::Duration;

use leptos::prelude::*;
use sati_core::carousel::CarouselController;
use sati_core::content::{TESTIMONIALS, TESTIMONIALS_INTRO, Testimonial};
use sati_core::icons::IconName;
use tracing::warn;

use super::Icon;
use crate::browser::BrowserScheduler;

#[component]
pub fn Testimonials(autoplay: Duration) -> impl IntoView {
    let (index, set_index) = signal(0_usize);
    let carousel = StoredValue::new_local(
        CarouselController::new(TESTIMONIALS, BrowserScheduler, autoplay)
            .on_change(move |i| set_index.set(i)),
    );
    carousel.update_value(|carousel| carousel.start());
    on_cleanup(move || {
        carousel.try_update_value(|carousel| carousel.stop());
    });

    let dots = (0..TESTIMONIALS.len())
        .map(|i| {
            view! {
                <button
                    class=move || if index.get() == i { "carousel-dot active" } else { "carousel-dot" }
                    aria-label=format!("Go to testimonial {}", i + 1)
                    on:click=move |_| {
                        carousel.update_value(|carousel| {
                            if let Err(e) = carousel.go_to(i) {
                                warn!("{e}");
                            }
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    // Wide screens also get every quote at once.
    let grid = TESTIMONIALS
        .iter()
        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial /> })
        .collect_view();

    view! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "What Our "
                        <span class="text-gradient">"Clients Say"</span>
                    </h2>
                    <p class="section-description">{TESTIMONIALS_INTRO}</p>
                </div>

                <div class="carousel">
                    <div class="carousel-slide">
                        {move || {
                            TESTIMONIALS
                                .get(index.get())
                                .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial /> })
                        }}
                    </div>

                    <button
                        class="carousel-nav prev"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update_value(|carousel| carousel.previous())
                    >
                        <Icon name=IconName::ChevronLeft />
                    </button>
                    <button
                        class="carousel-nav next"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update_value(|carousel| carousel.next())
                    >
                        <Icon name=IconName::ChevronRight />
                    </button>

                    <div class="carousel-dots">{dots}</div>
                </div>

                <div class="testimonials-grid">{grid}</div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = testimonial
        .stars()
        .into_iter()
        .map(|filled| {
            view! {
                <span class={if filled { "star filled" } else { "star" }}>
                    <Icon name=IconName::Star />
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="testimonial-card">
            <div class="testimonial-quote">
                <Icon name=IconName::Quote />
            </div>
            <blockquote class="testimonial-content">
                <p>"\u{201c}" {testimonial.content} "\u{201d}"</p>
            </blockquote>
            <div class="testimonial-rating" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                {stars}
            </div>
            <div class="testimonial-client">
                <div class="client-avatar">
                    <Icon name=IconName::User />
                </div>
                <div>
                    <p class="client-name">{testimonial.name}</p>
                    <p class="client-byline">{testimonial.byline()}</p>
                </div>
            </div>
        </div>
    }
}
