// Browser bindings for the sati-core seams: timers, DOM geometry, localStorage.
// Developed by the SATI Consulting team (c)2025

use std::time::Duration;

use leptos::prelude::{IntervalHandle, TimeoutHandle, set_interval_with_handle, set_timeout_with_handle};
use sati_core::error::StoreError;
use sati_core::scheduler::Scheduler;
use sati_core::scroll_spy::{SectionGeometry, SectionId};
use sati_core::theme::{PreferenceStore, Theme};
use tracing::{error, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};

/// `window.setInterval` / `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// An armed browser timer.
#[derive(Debug, Clone, Copy)]
pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
    /// The browser refused to arm the timer; clearing is a no-op.
    Unarmed,
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> BrowserTimer {
        match set_interval_with_handle(callback, period) {
            Ok(handle) => BrowserTimer::Interval(handle),
            Err(e) => {
                error!("setInterval failed: {e:?}");
                BrowserTimer::Unarmed
            }
        }
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => BrowserTimer::Timeout(handle),
            Err(e) => {
                error!("setTimeout failed: {e:?}");
                BrowserTimer::Unarmed
            }
        }
    }

    fn clear(&self, handle: BrowserTimer) {
        match handle {
            BrowserTimer::Interval(handle) => handle.clear(),
            BrowserTimer::Timeout(handle) => handle.clear(),
            BrowserTimer::Unarmed => {}
        }
    }
}

/// Live page measurements.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomGeometry;

impl SectionGeometry for DomGeometry {
    fn scroll_offset(&self) -> f64 {
        scroll_y()
    }

    fn section_top(&self, id: &SectionId) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id.as_str())?;
        Some(element.get_bounding_client_rect().top() + scroll_y())
    }
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Whether the top edge of `element` is inside the viewport.
pub fn is_in_viewport(element: &web_sys::Element) -> bool {
    let Some(height) = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    rect.top() < height && rect.bottom() > 0.0
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// `(prefers-color-scheme: dark)`.
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Toggle the theme class on `<html>`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.root_class().is_some()) {
        warn!("failed to apply theme class: {e:?}");
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }
}

/// Current calendar year, for the footer.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
