//! Dark-mode preference.
//!
//! The only persisted state on the site: a JSON boolean under a fixed key. On
//! load a stored value wins; otherwise the system colour-scheme preference is
//! used. Every change is written back immediately.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Default storage key, shared with earlier versions of the site.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Minimal string key/value store (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Rc<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store for tests and non-browser hosts. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Colour scheme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default palette
    Light,
    /// `dark` class on the root element
    Dark,
}

impl Theme {
    /// Theme for a dark-mode flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    /// Class toggled on `<html>`; `None` for the light theme.
    pub fn root_class(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

/// The visitor's dark-mode choice, bound to the store it persists to.
#[derive(Debug)]
pub struct ThemePreference<P> {
    store: P,
    key: String,
    dark: bool,
}

impl<P: PreferenceStore> ThemePreference<P> {
    /// Read the stored flag, falling back to `system_prefers_dark` when it is
    /// absent or unreadable.
    pub fn load(store: P, key: impl Into<String>, system_prefers_dark: bool) -> Self {
        let key = key.into();
        let dark = match store.get(&key) {
            Some(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => dark,
                Err(e) => {
                    warn!("ignoring unreadable theme preference {key}={raw:?}: {e}");
                    system_prefers_dark
                }
            },
            None => system_prefers_dark,
        };
        debug!(dark, "theme preference loaded");
        Self { store, key, dark }
    }

    /// Whether dark mode is on.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark)
    }

    /// Store key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Set and persist the flag. The in-memory value changes even when the
    /// write fails, so the page still reflects the visitor's click.
    pub fn set_dark(&mut self, dark: bool) -> Result<(), StoreError> {
        self.dark = dark;
        let raw = serde_json::to_string(&dark).unwrap_or_else(|_| dark.to_string());
        self.store.set(&self.key, &raw)
    }

    /// Flip the flag and persist it; returns the new value.
    pub fn toggle(&mut self) -> Result<bool, StoreError> {
        let dark = !self.dark;
        self.set_dark(dark)?;
        Ok(dark)
    }
}
