#![forbid(unsafe_code)]

//! Engine configuration and its validation errors.
//!
//! [`LayoutConfig`] is plain data: serde-derived, cloned freely, and
//! validated once at the top of every layout call. A bad config is the
//! only fatal condition in this crate; everything else (odd magnitudes,
//! missing years, crowded neighborhoods) degrades per record.
//!
//! # Invariants
//!
//! 1. `validate()` passing implies `year_min < year_max`, a finite
//!    positive track, an ordered dot-size range, and a non-negative
//!    minimum distance.
//! 2. `Default` reproduces the night-scene chart: years 1922..2025 on a
//!    1600 px wide track, dots 8..60 px, 30 px spacing, 20 tries.

use std::fmt;

use serde::{Deserialize, Serialize};
use tidemark_core::{Palette, Track};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Fatal configuration problems, reported before any layout work runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `year_max <= year_min`: the time scale would divide by zero or flip.
    YearRangeEmpty { year_min: i32, year_max: i32 },
    /// Track dimensions are non-finite or non-positive.
    TrackDegenerate { width_px: f64, height_px: f64 },
    /// Dot-size bounds are non-finite, negative, or out of order.
    DotSizeRangeInverted { min_size: f64, max_size: f64 },
    /// Spacing below zero has no geometric meaning.
    NegativeMinDistance { min_distance: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearRangeEmpty { year_min, year_max } => {
                write!(f, "empty year range: {year_min}..{year_max}")
            }
            Self::TrackDegenerate {
                width_px,
                height_px,
            } => {
                write!(f, "degenerate track: {width_px}x{height_px} px")
            }
            Self::DotSizeRangeInverted { min_size, max_size } => {
                write!(f, "dot size range inverted: {min_size}..{max_size} px")
            }
            Self::NegativeMinDistance { min_distance } => {
                write!(f, "negative minimum distance: {min_distance} px")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Everything the engine needs to turn records into positioned points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Oldest year on the track (bottom edge).
    pub year_min: i32,
    /// Newest year on the track (top edge).
    pub year_max: i32,
    /// The plotting surface. Horizontal coordinates are centered on zero.
    pub track: Track,
    /// Radius for the smallest (or missing) magnitude, in pixels.
    pub min_dot_size: f64,
    /// Radius for the largest magnitude, in pixels.
    pub max_dot_size: f64,
    /// Preferred center-to-center spacing between points, in pixels.
    pub min_distance: f64,
    /// Nudge budget per point before residual overlap is accepted.
    pub max_tries: u32,
    /// Vertical scatter around the exact year position, in pixels.
    pub axis_jitter_px: f64,
    /// Fill opacity applied to every point.
    pub opacity: f32,
    /// Category fill colors; future records override with the future color.
    pub palette: Palette,
    /// Fixed RNG seed. `None` seeds from the OS for a fresh scatter.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            year_min: 1922,
            year_max: 2025,
            track: Track::new(1600.0, 800.0),
            min_dot_size: 8.0,
            max_dot_size: 60.0,
            min_distance: 30.0,
            max_tries: 20,
            // Half a centimeter at 96 dpi.
            axis_jitter_px: 18.9,
            opacity: 0.9,
            palette: Palette::disasters(),
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Set the inclusive year range (builder pattern).
    #[must_use]
    pub fn with_years(mut self, year_min: i32, year_max: i32) -> Self {
        self.year_min = year_min;
        self.year_max = year_max;
        self
    }

    /// Set the plotting surface (builder pattern).
    #[must_use]
    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    /// Set a fixed RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the category palette (builder pattern).
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check the config for fatal problems.
    ///
    /// Every engine entry point calls this first; a failing config never
    /// produces a partial layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.year_max <= self.year_min {
            return Err(ConfigError::YearRangeEmpty {
                year_min: self.year_min,
                year_max: self.year_max,
            });
        }
        if !self.track.is_valid() {
            return Err(ConfigError::TrackDegenerate {
                width_px: self.track.width_px,
                height_px: self.track.height_px,
            });
        }
        let sizes_ok = self.min_dot_size.is_finite()
            && self.max_dot_size.is_finite()
            && self.min_dot_size >= 0.0
            && self.max_dot_size >= self.min_dot_size;
        if !sizes_ok {
            return Err(ConfigError::DotSizeRangeInverted {
                min_size: self.min_dot_size,
                max_size: self.max_dot_size,
            });
        }
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(ConfigError::NegativeMinDistance {
                min_distance: self.min_distance,
            });
        }
        Ok(())
    }
}
