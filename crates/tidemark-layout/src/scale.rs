#![forbid(unsafe_code)]

//! Year-to-offset mapping along the track.
//!
//! The track reads top-down: the newest year sits at offset `0` and the
//! oldest at the bottom edge, so scrolling down travels back in time.
//!
//! # Usage
//!
//! ```ignore
//! use tidemark_layout::TimeScale;
//!
//! let scale = TimeScale::new(1922, 2025, 800.0)?;
//! assert_eq!(scale.position(2025), 0.0);
//! assert_eq!(scale.position(1922), 800.0);
//! ```
//!
//! # Invariants
//!
//! 1. `position` is strictly decreasing in `year`: later years always
//!    land nearer the top.
//! 2. `position(year_max) == 0.0` and `position(year_min) == height`.
//! 3. Years outside `[year_min, year_max]` map outside `[0, height]`;
//!    the scale never clamps. Callers filter before mapping.

use tidemark_core::EventMarker;

use crate::config::ConfigError;

/// Linear year-to-pixel scale over a track of the given height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    year_min: i32,
    year_max: i32,
    height_px: f64,
}

impl TimeScale {
    /// Build a scale over `[year_min, year_max]`.
    ///
    /// The height is expected to come from a validated [`Track`]; an
    /// empty or inverted year range is rejected here because it would
    /// collapse the scale.
    ///
    /// [`Track`]: tidemark_core::Track
    pub fn new(year_min: i32, year_max: i32, height_px: f64) -> Result<Self, ConfigError> {
        if year_max <= year_min {
            return Err(ConfigError::YearRangeEmpty { year_min, year_max });
        }
        Ok(Self {
            year_min,
            year_max,
            height_px,
        })
    }

    /// Oldest year on the scale.
    #[inline]
    #[must_use]
    pub const fn year_min(&self) -> i32 {
        self.year_min
    }

    /// Newest year on the scale.
    #[inline]
    #[must_use]
    pub const fn year_max(&self) -> i32 {
        self.year_max
    }

    /// Track height in pixels.
    #[inline]
    #[must_use]
    pub const fn height_px(&self) -> f64 {
        self.height_px
    }

    /// Vertical offset for a year, measured from the top of the track.
    #[must_use]
    pub fn position(&self, year: i32) -> f64 {
        let span = f64::from(self.year_max - self.year_min);
        f64::from(self.year_max - year) / span * self.height_px
    }

    /// Offset of the NOW line for the given current year.
    #[inline]
    #[must_use]
    pub fn now_position(&self, current_year: i32) -> f64 {
        self.position(current_year)
    }

    /// Axis ticks at every multiple of `step` years inside the range,
    /// ascending in year. Returns `(offset_px, year)` pairs.
    ///
    /// A zero step, or one wider than the year domain itself, yields no
    /// ticks; stepping stops at the numeric limits instead of wrapping.
    #[must_use]
    pub fn tick_positions(&self, step: u32) -> Vec<(f64, i32)> {
        let step = match i32::try_from(step) {
            Ok(step) if step > 0 => step,
            _ => return Vec::new(),
        };
        let rem = self.year_min.rem_euclid(step);
        let first = if rem == 0 {
            Some(self.year_min)
        } else {
            self.year_min.checked_add(step - rem)
        };
        let Some(mut year) = first else {
            return Vec::new();
        };
        let mut ticks = Vec::new();
        while year <= self.year_max {
            ticks.push((self.position(year), year));
            let Some(next) = year.checked_add(step) else {
                break;
            };
            year = next;
        }
        ticks
    }

    /// Timeline labels every `step` years at a fixed cross-axis position.
    #[must_use]
    pub fn century_marks(&self, step: u32, x: f64) -> Vec<EventMarker> {
        self.tick_positions(step)
            .into_iter()
            .map(|(offset, year)| EventMarker::new(x, offset, year.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> TimeScale {
        TimeScale::new(1922, 2025, 800.0).unwrap()
    }

    #[test]
    fn endpoints_pin_the_track_edges() {
        let s = scale();
        assert_eq!(s.position(2025), 0.0);
        assert_eq!(s.position(1922), 800.0);
    }

    #[test]
    fn position_is_strictly_decreasing() {
        let s = scale();
        let mut last = f64::INFINITY;
        for year in 1922..=2025 {
            let pos = s.position(year);
            assert!(pos < last, "year {year} did not move up: {pos} >= {last}");
            last = pos;
        }
    }

    #[test]
    fn out_of_range_years_leave_the_track() {
        let s = scale();
        assert!(s.position(2026) < 0.0);
        assert!(s.position(1900) > 800.0);
    }

    #[test]
    fn empty_range_is_rejected() {
        assert!(matches!(
            TimeScale::new(2025, 2025, 800.0),
            Err(ConfigError::YearRangeEmpty { .. })
        ));
        assert!(matches!(
            TimeScale::new(2025, 1922, 800.0),
            Err(ConfigError::YearRangeEmpty { .. })
        ));
    }

    #[test]
    fn ticks_step_through_the_range_ascending() {
        let s = TimeScale::new(1850, 2025, 1000.0).unwrap();
        let ticks = s.tick_positions(100);
        let years: Vec<i32> = ticks.iter().map(|&(_, y)| y).collect();
        assert_eq!(years, vec![1900, 2000]);
        assert!(ticks[0].0 > ticks[1].0, "older tick sits lower");
    }

    #[test]
    fn tick_step_zero_yields_nothing() {
        assert!(scale().tick_positions(0).is_empty());
    }

    #[test]
    fn oversized_tick_steps_yield_nothing() {
        assert!(scale().tick_positions(u32::MAX).is_empty());
        assert!(scale().tick_positions(3_000_000_000).is_empty());
    }

    #[test]
    fn ticks_stop_at_the_numeric_ceiling() {
        let s = TimeScale::new(i32::MAX - 10, i32::MAX, 800.0).unwrap();
        let years: Vec<i32> = s.tick_positions(7).iter().map(|&(_, y)| y).collect();
        assert_eq!(years, vec![i32::MAX - 8, i32::MAX - 1]);
    }

    #[test]
    fn ticks_align_down_at_the_numeric_floor() {
        let s = TimeScale::new(i32::MIN, i32::MIN + 100, 800.0).unwrap();
        let ticks = s.tick_positions(7);
        assert_eq!(ticks.len(), 15);
        assert_eq!(ticks[0].1, i32::MIN + 2);
        assert_eq!(ticks[14].1, i32::MIN + 100);
    }

    #[test]
    fn ticks_include_an_aligned_year_min() {
        let s = TimeScale::new(1900, 2100, 1000.0).unwrap();
        let years: Vec<i32> = s.tick_positions(100).iter().map(|&(_, y)| y).collect();
        assert_eq!(years, vec![1900, 2000, 2100]);
    }

    #[test]
    fn century_marks_carry_year_labels() {
        let s = TimeScale::new(1850, 2025, 1000.0).unwrap();
        let marks = s.century_marks(100, 0.0);
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].label, "1900");
        assert_eq!(marks[0].x, 0.0);
        assert_eq!(marks[0].y, s.position(1900));
    }

    #[test]
    fn now_line_matches_the_year_position() {
        let s = scale();
        assert_eq!(s.now_position(2024), s.position(2024));
    }
}
