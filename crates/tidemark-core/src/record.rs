#![forbid(unsafe_code)]

//! Input record and marker models.
//!
//! A [`TemporalRecord`] is one plottable item tied to a calendar year,
//! such as a disaster row or a submitted memory. An [`EventMarker`] is
//! a fixed annotation (a decade label, a milestone caption) with explicit
//! coordinates; markers bypass layout entirely.
//!
//! # Invariants
//!
//! 1. A record with `year: None` is never in range and never plotted.
//! 2. `horizontal_seed`, when present, lies in the unit interval and fully
//!    determines the record's horizontal position for a given track width.
//! 3. Markers are never repositioned, resized, or recolored downstream.

use serde::{Deserialize, Serialize};

/// One plottable item tied to a calendar year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemporalRecord {
    /// Calendar year, if the source row carried a parseable one.
    pub year: Option<i32>,
    /// Non-negative magnitude (e.g. people affected). Invalid or missing
    /// magnitudes fall back to the minimum dot size downstream.
    pub magnitude: Option<f64>,
    /// Category used for color lookup. Several categories may share the
    /// palette fallback color.
    pub category: String,
    /// Short display label (event name, country, author...).
    pub label: String,
    /// Longer free text for tooltips, if any.
    pub detail: Option<String>,
    /// Unit-interval seed for the horizontal position. `None` means the
    /// layout engine draws a fresh one each recompute.
    pub horizontal_seed: Option<f64>,
}

impl TemporalRecord {
    /// Create a record with just a year.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    /// Set the magnitude.
    #[must_use]
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Pin the horizontal position to a unit-interval seed.
    ///
    /// Values are clamped into `[0, 1]`; non-finite input clears the seed.
    #[must_use]
    pub fn with_horizontal_seed(mut self, seed: f64) -> Self {
        self.horizontal_seed = seed.is_finite().then(|| seed.clamp(0.0, 1.0));
        self
    }

    /// Whether the record's year lies in `[year_min, year_max]`.
    ///
    /// Records without a year are never in range.
    #[must_use]
    pub fn in_year_range(&self, year_min: i32, year_max: i32) -> bool {
        match self.year {
            Some(year) => year >= year_min && year <= year_max,
            None => false,
        }
    }

    /// The magnitude, if it is finite and strictly positive.
    #[must_use]
    pub fn valid_magnitude(&self) -> Option<f64> {
        self.magnitude.filter(|m| m.is_finite() && *m > 0.0)
    }
}

/// A fixed annotation with explicit plot coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventMarker {
    /// Horizontal offset from the track centerline.
    pub x: f64,
    /// Vertical offset from the top of the track.
    pub y: f64,
    /// Short label (a year, a title).
    pub label: String,
    /// Longer caption text, possibly empty.
    pub text: String,
}

impl EventMarker {
    /// Create a marker at the given position.
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            text: String::new(),
        }
    }

    /// Set the caption text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
