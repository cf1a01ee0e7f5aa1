//! Site configuration.
//!
//! Timing and layout knobs live in a small TOML document (`landing/site.toml`
//! in the front end). Every key is optional; missing keys take the defaults
//! below.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;
use crate::theme::DARK_MODE_KEY;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `[scroll]`
    pub scroll: ScrollConfig,
    /// `[carousel]`
    pub carousel: CarouselConfig,
    /// `[contact]`
    pub contact: ContactConfig,
    /// `[theme]`
    pub theme: ThemeConfig,
    /// `[counter]`
    pub counter: CounterConfig,
}

/// Scroll spy and header behaviour
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Fixed header height subtracted from section tops.
    pub header_offset: f64,
    /// Scroll offset past which the header turns opaque.
    pub scrolled_threshold: f64,
    /// Scroll offset past which the scroll-to-top button appears.
    pub scroll_to_top_threshold: f64,
    /// Delay between closing the mobile menu and scrolling.
    pub menu_close_delay_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scrolled_threshold: 50.0,
            scroll_to_top_threshold: 400.0,
            menu_close_delay_ms: 100,
        }
    }
}

/// Testimonial carousel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay period.
    pub autoplay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { autoplay_ms: 5000 }
    }
}

/// Contact form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long the success/failure banner stays up.
    pub status_reset_ms: u64,
    /// Latency of the simulated sender.
    pub simulated_latency_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            status_reset_ms: 5000,
            simulated_latency_ms: 2000,
        }
    }
}

/// Dark-mode persistence
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the dark-mode flag is stored under.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DARK_MODE_KEY.to_string(),
        }
    }
}

/// Stats counters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Time to count from zero to the target.
    pub duration_ms: u64,
    /// Frame period of the counting timer.
    pub frame_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            frame_ms: 16,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_toml_str`](Self::from_toml_str), but logs and falls back to
    /// the defaults instead of failing.
    pub fn load_or_default(text: &str) -> Self {
        match Self::from_toml_str(text) {
            Ok(config) => config,
            Err(e) => {
                warn!("using default site config: {e}");
                Self::default()
            }
        }
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let offsets = [
            ("scroll.header_offset", self.scroll.header_offset),
            ("scroll.scrolled_threshold", self.scroll.scrolled_threshold),
            ("scroll.scroll_to_top_threshold", self.scroll.scroll_to_top_threshold),
        ];
        for (field, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite, non-negative number",
                });
            }
        }

        let periods = [
            ("carousel.autoplay_ms", self.carousel.autoplay_ms),
            ("contact.status_reset_ms", self.contact.status_reset_ms),
            ("counter.duration_ms", self.counter.duration_ms),
            ("counter.frame_ms", self.counter.frame_ms),
        ];
        for (field, value) in periods {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme.storage_key",
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    /// Carousel autoplay period.
    pub fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.carousel.autoplay_ms)
    }

    /// Banner lifetime after a submission settles.
    pub fn status_reset_delay(&self) -> Duration {
        Duration::from_millis(self.contact.status_reset_ms)
    }

    /// Simulated sender latency.
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.contact.simulated_latency_ms)
    }

    /// Mobile-menu close delay before scrolling.
    pub fn menu_close_delay(&self) -> Duration {
        Duration::from_millis(self.scroll.menu_close_delay_ms)
    }

    /// Counter animation length.
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter.duration_ms)
    }

    /// Counter frame period.
    pub fn counter_frame(&self) -> Duration {
        Duration::from_millis(self.counter.frame_ms)
    }
}
