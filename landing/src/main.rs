// SATI Consulting landing page - Leptos 0.8 CSR
// Developed by the SATI Consulting team (c)2025

mod browser;
mod logging;
mod sections;

use leptos::ev;
use leptos::prelude::*;
use sati_core::content;
use sati_core::scroll_spy::{ScrollSpy, SectionGeometry, SectionId, is_scrolled, show_scroll_to_top};
use sati_core::theme::ThemePreference;
use sati_core::SiteConfig;
use sections::*;
use tracing::{info, warn};

use browser::{DomGeometry, LocalStorageStore};

/// Built into the binary; see `landing/site.toml`.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::load_or_default(SITE_TOML);
    info!(sections = content::NAVIGATION_ITEMS.len(), "mounting landing page");

    // Theme
    let theme = ThemePreference::load(
        LocalStorageStore,
        config.theme.storage_key.clone(),
        browser::system_prefers_dark(),
    );
    browser::apply_theme(theme.theme());
    let (dark, set_dark) = signal(theme.is_dark());
    let theme = StoredValue::new(theme);
    let toggle_dark = Callback::new(move |()| {
        theme.update_value(|theme| {
            if let Err(e) = theme.toggle() {
                warn!("dark mode preference not saved: {e}");
            }
            browser::apply_theme(theme.theme());
            set_dark.set(theme.is_dark());
        });
    });

    // Scroll tracking
    let spy = StoredValue::new(ScrollSpy::new(
        content::tracked_sections(),
        config.scroll.header_offset,
    ));
    let (scroll_y, set_scroll_y) = signal(0.0_f64);
    let (active, set_active) = signal(None::<SectionId>);

    let on_scroll = move || {
        let geometry = DomGeometry;
        set_scroll_y.set(geometry.scroll_offset());
        let next = spy
            .try_update_value(|spy| spy.update(&geometry).cloned())
            .flatten();
        if active.with_untracked(|current| *current != next) {
            set_active.set(next);
        }
    };
    Effect::new(move |_| on_scroll());
    let scroll_listener = window_event_listener(ev::scroll, move |_| on_scroll());
    // Reflow moves section tops without a scroll event.
    let resize_listener = window_event_listener(ev::resize, move |_| on_scroll());
    on_cleanup(move || {
        scroll_listener.remove();
        resize_listener.remove();
    });

    let navigate = Callback::new(move |id: SectionId| {
        match spy.with_value(|spy| spy.scroll_target(&id, &DomGeometry)) {
            Some(top) => browser::smooth_scroll_to(top),
            None => warn!(section = %id, "navigation target is not mounted"),
        }
    });

    let scrolled_threshold = config.scroll.scrolled_threshold;
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get(), scrolled_threshold));
    let top_threshold = config.scroll.scroll_to_top_threshold;
    let show_top = Signal::derive(move || show_scroll_to_top(scroll_y.get(), top_threshold));

    view! {
        <div class="app">
            <Header
                dark=dark
                scrolled=scrolled
                active=active
                on_toggle_dark=toggle_dark
                on_navigate=navigate
                menu_close_delay=config.menu_close_delay()
            />
            <main>
                <Hero on_navigate=navigate />
                <AboutUs
                    scroll_y=scroll_y
                    counter_duration=config.counter_duration()
                    counter_frame=config.counter_frame()
                />
                <Team />
                <Testimonials autoplay=config.autoplay_period() />
                <Contact
                    status_reset=config.status_reset_delay()
                    latency=config.simulated_latency()
                />
            </main>
            <Footer on_navigate=navigate />
            <ScrollToTop visible=show_top />
        </div>
    }
}
