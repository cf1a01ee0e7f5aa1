//! End-to-end flows across the controllers, driven by the virtual clock.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use pretty_assertions::assert_eq;

use sati_core::contact::{ContactDraft, Field, SimulatedSender, SubmissionLifecycle, SubmissionState};
use sati_core::content::{self, TESTIMONIALS};
use sati_core::scroll_spy::{ScrollSpy, SectionGeometry, SectionId};
use sati_core::theme::{MemoryStore, ThemePreference};
use sati_core::{CarouselController, ManualScheduler, SiteConfig, SubmitError};

struct Layout {
    scroll: f64,
    tops: HashMap<String, f64>,
}

impl SectionGeometry for Layout {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn section_top(&self, id: &SectionId) -> Option<f64> {
        self.tops.get(id.as_str()).copied()
    }
}

fn landing_layout(scroll: f64) -> Layout {
    let tops = [("about", 580.0), ("team", 1280.0), ("testimonials", 2100.0), ("contact", 2900.0)]
        .into_iter()
        .map(|(id, top)| (id.to_string(), top))
        .collect();
    Layout { scroll, tops }
}

#[test]
fn test_scroll_spy_follows_navigation_sections() {
    let config = SiteConfig::default();
    let mut spy = ScrollSpy::new(content::tracked_sections(), config.scroll.header_offset);

    let walk: Vec<Option<String>> = [0.0, 499.0, 500.0, 1199.0, 1200.0, 2850.0, 9000.0]
        .into_iter()
        .map(|scroll| spy.update(&landing_layout(scroll)).map(|id| id.to_string()))
        .collect();

    assert_eq!(
        walk,
        vec![
            None,
            None,
            Some("about".to_string()),
            Some("about".to_string()),
            Some("team".to_string()),
            Some("contact".to_string()),
            Some("contact".to_string()),
        ]
    );

    let team = SectionId::from("team");
    assert_eq!(spy.scroll_target(&team, &landing_layout(0.0)), Some(1200.0));
}

#[test]
fn test_testimonial_carousel_with_manual_override() {
    let clock = ManualScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut carousel = CarouselController::new(TESTIMONIALS, clock.clone(), SiteConfig::default().autoplay_period())
        .on_change(move |index| sink.borrow_mut().push(index));
    carousel.start();

    clock.advance(Duration::from_secs(5));
    assert_eq!(carousel.current().map(|t| t.name), Some("Michael Brown"));

    // Manual jump at 7s pushes the next autoplay tick out to 12s.
    clock.advance(Duration::from_secs(2));
    carousel.go_to(3).expect("slide exists");
    clock.advance(Duration::from_millis(4999));
    assert_eq!(carousel.current_index(), 3);
    clock.advance(Duration::from_millis(1));
    assert_eq!(carousel.current_index(), 0);

    assert!(carousel.go_to(TESTIMONIALS.len()).is_err());
    assert_eq!(*seen.borrow(), vec![1, 3, 0]);

    drop(carousel);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn test_contact_round_trip_reverts_to_idle() {
    let config = SiteConfig::default();
    let clock = ManualScheduler::new();
    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&states);

    let lifecycle = Rc::new(
        SubmissionLifecycle::new(clock.clone(), config.status_reset_delay())
            .on_change(move |state| sink.borrow_mut().push(state)),
    );
    let sender = SimulatedSender::new(clock.clone(), config.simulated_latency());

    let mut draft = ContactDraft::new();
    draft.edit(Field::Name, "Ada Lovelace");
    draft.edit(Field::Email, "ada@example.com");
    assert!(!draft.validate());
    assert_eq!(draft.errors().get(Field::Message), Some("Message is required"));
    draft.edit(Field::Message, "We need a mobile app.");
    assert!(draft.validate());

    let mut pool = LocalPool::new();
    let outcome = Rc::new(RefCell::new(None));
    {
        let lifecycle = Rc::clone(&lifecycle);
        let outcome = Rc::clone(&outcome);
        let data = draft.data().clone();
        pool.spawner()
            .spawn_local(async move {
                let result = lifecycle.submit(&data, &sender).await;
                *outcome.borrow_mut() = Some(result);
            })
            .expect("spawn");
    }
    pool.run_until_stalled();
    assert_eq!(lifecycle.state(), SubmissionState::Submitting);

    let second = futures::executor::block_on(lifecycle.submit(
        draft.data(),
        &SimulatedSender::new(clock.clone(), Duration::ZERO),
    ));
    assert_eq!(second, Err(SubmitError::InFlight));

    clock.advance(config.simulated_latency());
    pool.run_until_stalled();
    assert_eq!(*outcome.borrow(), Some(Ok(SubmissionState::Success)));

    clock.advance(config.status_reset_delay());
    assert_eq!(lifecycle.state(), SubmissionState::Idle);
    assert_eq!(
        *states.borrow(),
        vec![
            SubmissionState::Submitting,
            SubmissionState::Success,
            SubmissionState::Idle,
        ]
    );
}

#[test]
fn test_theme_survives_reload() {
    let config = SiteConfig::default();
    let storage = MemoryStore::new();

    let mut first_visit = ThemePreference::load(storage.clone(), config.theme.storage_key.as_str(), false);
    assert!(!first_visit.is_dark());
    first_visit.toggle().expect("memory store accepts writes");

    let second_visit = ThemePreference::load(storage, config.theme.storage_key.as_str(), false);
    assert!(second_visit.is_dark());
}
