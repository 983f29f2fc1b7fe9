#![forbid(unsafe_code)]

//! Viewport classification and the resize seam.
//!
//! The engine itself never watches the window. Hosts observe resizes,
//! derive a fresh [`Track`] from the new [`Viewport`], swap it into the
//! config with [`LayoutConfig::for_viewport`], and run a full relayout.
//!
//! # Usage
//!
//! ```ignore
//! use tidemark_layout::{Breakpoint, LayoutConfig, Viewport};
//!
//! let viewport = Viewport::new(1440.0, 900.0);
//! assert_eq!(viewport.breakpoint(), Breakpoint::Desktop);
//!
//! let config = LayoutConfig::default().for_viewport(viewport);
//! assert_eq!(config.track.height_px, 700.0);
//! ```

use serde::{Deserialize, Serialize};
use tidemark_core::Track;

use crate::config::LayoutConfig;

/// Widths below this are phones.
pub const MOBILE_MAX_PX: f64 = 768.0;
/// Widths below this (and at least [`MOBILE_MAX_PX`]) are tablets.
pub const TABLET_MAX_PX: f64 = 1024.0;
/// Vertical space reserved for chrome above and below the track.
pub const CHROME_RESERVE_PX: f64 = 200.0;
/// Track height used when the viewport height is unusable.
pub const FALLBACK_TRACK_HEIGHT_PX: f64 = 800.0;

/// Width class of the hosting surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Classify a width in pixels.
    #[must_use]
    pub fn from_width(width_px: f64) -> Self {
        if width_px < MOBILE_MAX_PX {
            Self::Mobile
        } else if width_px < TABLET_MAX_PX {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// The hosting surface dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    /// Create a viewport.
    #[inline]
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Width class of this viewport.
    #[inline]
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width_px)
    }

    /// Track derived from this viewport: full width, height minus the
    /// chrome reserve. Viewports too short to chart (or with unusable
    /// heights) fall back to [`FALLBACK_TRACK_HEIGHT_PX`].
    #[must_use]
    pub fn track(&self) -> Track {
        let height = if self.height_px.is_finite() && self.height_px > CHROME_RESERVE_PX {
            self.height_px - CHROME_RESERVE_PX
        } else {
            FALLBACK_TRACK_HEIGHT_PX
        };
        Track::new(self.width_px, height)
    }
}

impl LayoutConfig {
    /// Same config, track swapped for the viewport-derived one.
    ///
    /// The relayout afterwards is the caller's job; layouts are always
    /// rebuilt whole.
    #[must_use]
    pub fn for_viewport(mut self, viewport: Viewport) -> Self {
        self.track = viewport.track();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_classes_split_at_the_thresholds() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023.9), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn track_reserves_chrome_space() {
        let track = Viewport::new(1600.0, 1000.0).track();
        assert_eq!(track.width_px, 1600.0);
        assert_eq!(track.height_px, 800.0);
    }

    #[test]
    fn unusable_heights_fall_back() {
        assert_eq!(Viewport::new(1600.0, 0.0).track().height_px, 800.0);
        assert_eq!(Viewport::new(1600.0, 150.0).track().height_px, 800.0);
        assert_eq!(
            Viewport::new(1600.0, f64::NAN).track().height_px,
            800.0
        );
    }

    #[test]
    fn for_viewport_only_touches_the_track() {
        let base = LayoutConfig::default().with_seed(7);
        let resized = base.clone().for_viewport(Viewport::new(1280.0, 900.0));
        assert_eq!(resized.track, Track::new(1280.0, 700.0));
        assert_eq!(resized.year_min, base.year_min);
        assert_eq!(resized.year_max, base.year_max);
        assert_eq!(resized.seed, base.seed);
        assert_eq!(resized.palette, base.palette);
    }

    #[test]
    fn resized_config_still_validates() {
        let config = LayoutConfig::default().for_viewport(Viewport::new(375.0, 667.0));
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.track.height_px, 467.0);
    }
}
