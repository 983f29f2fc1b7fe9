#![forbid(unsafe_code)]

//! Plot-space geometry.
//!
//! Coordinates are f64 pixels. The vertical axis is the timeline: y grows
//! downward, with more recent years closer to the top of the track. The
//! horizontal axis is centered, so x ranges over `[-width/2, +width/2]`.

/// A position on the plotting surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotPoint {
    /// Horizontal offset from the track centerline.
    pub x: f64,
    /// Vertical offset from the top of the track.
    pub y: f64,
}

impl PlotPoint {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &PlotPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Shift the point horizontally, leaving `y` untouched.
    #[inline]
    #[must_use]
    pub const fn nudged_x(&self, dx: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
        }
    }
}

/// The scrollable plotting surface.
///
/// The track is as wide as the chart body and as tall as the full timeline.
/// Horizontal coordinates are centered on the track axis, matching a chart
/// x-domain of `[-width/2, +width/2]`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Usable width in pixels.
    pub width_px: f64,
    /// Usable height in pixels.
    pub height_px: f64,
}

impl Track {
    /// Create a new track.
    #[inline]
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Half the track width; the horizontal extent on either side of center.
    #[inline]
    #[must_use]
    pub const fn half_width(&self) -> f64 {
        self.width_px / 2.0
    }

    /// Whether a centered x coordinate lies on the track.
    #[inline]
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        x >= -self.half_width() && x <= self.half_width()
    }

    /// Whether a y offset lies within the track height.
    #[inline]
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        (0.0..=self.height_px).contains(&y)
    }

    /// Both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width_px.is_finite()
            && self.height_px.is_finite()
            && self.width_px > 0.0
            && self.height_px > 0.0
    }
}
