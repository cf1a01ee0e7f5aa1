use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use sati_core::contact::{ContactDraft, Field, SimulatedSender, SubmissionLifecycle, SubmissionState};
use sati_core::content::{
    COMPANY_INFO, CONTACT_GREETING, CONTACT_INTRO, QUICK_RESPONSE, SOCIAL_LINKS, SUBMIT_FAILURE,
    SUBMIT_SUCCESS,
};
use sati_core::icons::IconName;
use tracing::debug;

use super::Icon;
use crate::browser::BrowserScheduler;

#[component]
pub fn Contact(status_reset: Duration, latency: Duration) -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::new());
    let (status, set_status) = signal(SubmissionState::Idle);
    let lifecycle = StoredValue::new_local(Rc::new(
        SubmissionLifecycle::new(BrowserScheduler, status_reset)
            .on_change(move |state| set_status.set(state)),
    ));
    let sender = SimulatedSender::new(BrowserScheduler, latency);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !draft.try_update(ContactDraft::validate).unwrap_or(false) {
            return;
        }
        let Some(lifecycle) = lifecycle.try_get_value() else {
            return;
        };
        let data = draft.with_untracked(|draft| draft.data().clone());
        let sender = sender.clone();
        leptos::task::spawn_local(async move {
            match lifecycle.submit(&data, &sender).await {
                Ok(SubmissionState::Success) => draft.update(ContactDraft::clear),
                Ok(_) => {}
                Err(e) => debug!("submission not started: {e}"),
            }
        });
    };

    let submitting = move || status.get() == SubmissionState::Submitting;

    let banner = move || match status.get() {
        SubmissionState::Success => Some(
            view! {
                <div class="form-status success">
                    <Icon name=IconName::CheckCircle />
                    <span>{SUBMIT_SUCCESS}</span>
                </div>
            }
            .into_any(),
        ),
        SubmissionState::Failed => Some(
            view! {
                <div class="form-status error">
                    <Icon name=IconName::AlertCircle />
                    <span>{SUBMIT_FAILURE}</span>
                </div>
            }
            .into_any(),
        ),
        SubmissionState::Idle | SubmissionState::Submitting => None,
    };

    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            view! {
                <a
                    class="social-link"
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
        <section id="contact" class="section contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Let's Build Something "
                        <span class="text-gradient">"Amazing Together"</span>
                    </h2>
                    <p class="section-description">{CONTACT_INTRO}</p>
                </div>

                <div class="contact-grid">
                    <form class="contact-form" on:submit=on_submit novalidate=true>
                        <h3>"Send us a message"</h3>
                        <TextField
                            draft=draft
                            field=Field::Name
                            label="Name *"
                            kind="text"
                            placeholder="Your full name"
                        />
                        <TextField
                            draft=draft
                            field=Field::Email
                            label="Email *"
                            kind="email"
                            placeholder="your.email@example.com"
                        />
                        <TextField
                            draft=draft
                            field=Field::Company
                            label="Company"
                            kind="text"
                            placeholder="Your company name (optional)"
                        />
                        <div class="form-field">
                            <label for="message">"Message *"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows=5
                                placeholder="Tell us about your project..."
                                class=move || field_class(draft, Field::Message)
                                prop:value=move || draft.with(|d| d.data().get(Field::Message).to_string())
                                on:input=move |ev| {
                                    draft.update(|d| d.edit(Field::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                            <FieldError draft=draft field=Field::Message />
                        </div>

                        <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                            <Icon name=IconName::Send />
                        </button>

                        {banner}
                    </form>

                    <div class="contact-info">
                        <h3>"Get in touch"</h3>
                        <p>{CONTACT_GREETING}</p>
                        <ul class="contact-details">
                            <li>
                                <Icon name=IconName::Mail />
                                <div>
                                    <span class="detail-label">"Email"</span>
                                    <a href=COMPANY_INFO.mailto()>{COMPANY_INFO.email}</a>
                                </div>
                            </li>
                            <li>
                                <Icon name=IconName::Phone />
                                <div>
                                    <span class="detail-label">"Phone"</span>
                                    <a href=COMPANY_INFO.tel()>{COMPANY_INFO.phone}</a>
                                </div>
                            </li>
                            <li>
                                <Icon name=IconName::MapPin />
                                <div>
                                    <span class="detail-label">"Address"</span>
                                    <span>{COMPANY_INFO.address}</span>
                                </div>
                            </li>
                        </ul>
                        <h4>"Follow us"</h4>
                        <div class="social-links">{socials}</div>
                        <div class="quick-response">
                            <h4>"Quick Response"</h4>
                            <p>{QUICK_RESPONSE}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn field_class(draft: RwSignal<ContactDraft>, field: Field) -> &'static str {
    if draft.with(|d| d.errors().get(field).is_some()) {
        "form-input invalid"
    } else {
        "form-input"
    }
}

#[component]
fn TextField(
    draft: RwSignal<ContactDraft>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=field.as_str()>{label}</label>
            <input
                type=kind
                id=field.as_str()
                name=field.as_str()
                placeholder=placeholder
                class=move || field_class(draft, field)
                prop:value=move || draft.with(|d| d.data().get(field).to_string())
                on:input=move |ev| draft.update(|d| d.edit(field, event_target_value(&ev)))
            />
            <FieldError draft=draft field=field />
        </div>
    }
}

#[component]
fn FieldError(draft: RwSignal<ContactDraft>, field: Field) -> impl IntoView {
    move || {
        draft.with(|d| {
            d.errors()
                .get(field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    }
}
