//! # sati-core
//!
//! Interaction logic behind the SATI Consulting landing page.
//!
//! Everything here is browser-agnostic: the Leptos front end plugs its timers,
//! DOM geometry and `localStorage` in through small traits, and the tests drive
//! the same code with a virtual clock.
//!
//! ## Modules
//!
//! - [`scroll_spy`] - which page section is under the fixed header
//! - [`carousel`] - testimonial carousel with autoplay and manual override
//! - [`contact`] - contact form validation and the submission lifecycle
//! - [`scheduler`] - the timer seam ([`Scheduler`], manual and tokio backends)
//! - [`theme`] - persisted dark-mode preference
//! - [`counter`] - animated statistics counters
//! - [`config`] - TOML site configuration
//! - [`content`] - static page copy
//! - [`icons`] - closed set of inline SVG icons
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use sati_core::carousel::CarouselController;
//! use sati_core::scheduler::ManualScheduler;
//!
//! let clock = ManualScheduler::new();
//! let mut carousel = CarouselController::new(vec!["a", "b", "c"], clock.clone(), Duration::from_secs(5));
//! carousel.start();
//!
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(carousel.current_index(), 1);
//!
//! carousel.previous();
//! assert_eq!(carousel.current(), Some(&"a"));
//! ```
//!
//! ---
//!
//! Developed by the SATI Consulting team (c)2025

#![warn(missing_docs)]

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod error;
pub mod icons;
pub mod scheduler;
pub mod scroll_spy;
pub mod theme;

pub use carousel::CarouselController;
pub use config::SiteConfig;
pub use contact::{ContactDraft, ContactFormData, SubmissionLifecycle, SubmissionState, validate};
pub use error::{CarouselError, ConfigError, SendError, StoreError, SubmitError};
pub use scheduler::{ManualScheduler, Scheduler};
pub use scroll_spy::{ScrollSpy, SectionGeometry, SectionId};
pub use theme::{PreferenceStore, ThemePreference};
