//! Scroll spy: which navigation section sits under the fixed header.
//!
//! The tracker never reads the DOM itself. Callers hand it a
//! [`SectionGeometry`] that reports the scroll offset and the document-space
//! top of each section element; sections whose element is missing are skipped
//! for that update.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Identifier of a page section (the element id, without `#`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Wrap an element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse an in-page anchor such as `#about`.
    pub fn from_anchor(href: &str) -> Self {
        Self::new(href.trim_start_matches('#'))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Read-only view of page layout.
pub trait SectionGeometry {
    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Top of the section element in document coordinates, or `None` if the
    /// element is not mounted.
    fn section_top(&self, id: &SectionId) -> Option<f64>;
}

/// Tracks the active section for navigation highlighting.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<SectionId>,
    header_offset: f64,
    active: Option<SectionId>,
}

impl ScrollSpy {
    /// Track `sections` (in document order) under a fixed header of
    /// `header_offset` pixels.
    pub fn new<I, T>(sections: I, header_offset: f64) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SectionId>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            header_offset,
            active: None,
        }
    }

    /// Tracked sections in document order.
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Header height subtracted from every section top.
    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// Result of the last [`update`](Self::update); `None` before the first one.
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Whether `id` is the active section.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|active| active == id)
    }

    /// Re-measure and return the active section.
    ///
    /// A section is active when the scroll offset is at or past its boundary
    /// (top minus header offset) and before the next present section's
    /// boundary. The last present section stays active to the end of the page.
    pub fn update(&mut self, geometry: &impl SectionGeometry) -> Option<&SectionId> {
        let scroll = geometry.scroll_offset();
        let boundaries: Vec<(&SectionId, f64)> = self
            .sections
            .iter()
            .filter_map(|id| {
                geometry
                    .section_top(id)
                    .map(|top| (id, top - self.header_offset))
            })
            .collect();

        let active = boundaries
            .iter()
            .enumerate()
            .find(|(i, (_, boundary))| {
                let next = boundaries.get(i + 1).map(|(_, b)| *b);
                scroll >= *boundary && next.is_none_or(|next| scroll < next)
            })
            .map(|(_, (id, _))| (*id).clone());

        if active != self.active {
            trace!(scroll, from = ?self.active, to = ?active, "active section changed");
        }
        self.active = active;
        self.active.as_ref()
    }

    /// Scroll offset that puts the top of `id` right under the header, or
    /// `None` if the section is not mounted.
    pub fn scroll_target(&self, id: &SectionId, geometry: &impl SectionGeometry) -> Option<f64> {
        geometry
            .section_top(id)
            .map(|top| (top - self.header_offset).max(0.0))
    }
}

/// Header switches to its opaque "scrolled" style past `threshold`.
pub fn is_scrolled(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}

/// Scroll-to-top button is shown past `threshold`.
pub fn show_scroll_to_top(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}
