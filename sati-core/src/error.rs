//! Error types shared across the crate.

use thiserror::Error;

use crate::contact::ValidationResult;

/// Carousel navigation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// `go_to` was asked for a slide that does not exist.
    #[error("slide {index} is out of range for a carousel of {len} items")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of items in the carousel
        len: usize,
    },
}

/// Site configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text did not parse into a [`SiteConfig`](crate::SiteConfig).
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is not usable (zero period, negative offset, ...).
    #[error("invalid site config value `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending key, e.g. `carousel.autoplay_ms`
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: &'static str,
    },
}

/// A key/value preference store refused a write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No backing storage is available (private browsing, disabled storage).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The backend rejected the write.
    #[error("failed to write preference `{key}`: {message}")]
    Write {
        /// Key being written
        key: String,
        /// Backend message
        message: String,
    },
}

/// The opaque contact-message transport failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to send contact message: {0}")]
pub struct SendError(pub String);

/// A submission attempt was rejected before reaching the sender.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more fields failed validation.
    #[error("contact form has {} invalid field(s)", .0.len())]
    Invalid(ValidationResult),
    /// A previous submission is still waiting on the sender.
    #[error("a submission is already in flight")]
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_error_names_index_and_len() {
        let err = CarouselError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(
            err.to_string(),
            "slide 7 is out of range for a carousel of 4 items"
        );
    }

    #[test]
    fn config_error_invalid_mentions_field() {
        let err = ConfigError::Invalid {
            field: "carousel.autoplay_ms",
            reason: "must be greater than zero",
        };
        assert!(err.to_string().contains("carousel.autoplay_ms"));
    }
}
