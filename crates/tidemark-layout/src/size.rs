#![forbid(unsafe_code)]

//! Magnitude-to-radius mapping.
//!
//! A [`SizeScale`] is built per batch: it observes the finite positive
//! magnitudes once, then maps each one linearly onto the configured
//! radius range. Degenerate batches (empty, or all equal) collapse to
//! the minimum radius rather than dividing by zero.
//!
//! # Invariants
//!
//! 1. `radius_for` always returns a finite value in
//!    `[min_size, max_size]`, whatever the input.
//! 2. `None`, non-finite, and non-positive magnitudes map to `min_size`.
//! 3. A degenerate scale maps every magnitude to `min_size`.

/// Linear magnitude-to-radius scale observed from one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeScale {
    mag_min: f64,
    mag_max: f64,
    min_size: f64,
    max_size: f64,
}

impl SizeScale {
    /// Observe a batch of magnitudes. Only finite values above zero
    /// count; an empty observation set yields a degenerate scale.
    #[must_use]
    pub fn from_magnitudes<I>(magnitudes: I, min_size: f64, max_size: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut mag_min = f64::INFINITY;
        let mut mag_max = f64::NEG_INFINITY;
        for magnitude in magnitudes {
            if magnitude.is_finite() && magnitude > 0.0 {
                mag_min = mag_min.min(magnitude);
                mag_max = mag_max.max(magnitude);
            }
        }
        if mag_max <= mag_min {
            // Nothing observed, or a single distinct magnitude.
            (mag_min, mag_max) = (1.0, 1.0);
        }
        Self {
            mag_min,
            mag_max,
            min_size,
            max_size,
        }
    }

    /// Observed magnitude domain as `(min, max)`.
    #[inline]
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        (self.mag_min, self.mag_max)
    }

    /// Whether every magnitude collapses to `min_size`.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.mag_max <= self.mag_min
    }

    /// Radius for a magnitude. Pure: the same input always yields the
    /// same radius for a given scale.
    #[must_use]
    pub fn radius_for(&self, magnitude: Option<f64>) -> f64 {
        let Some(magnitude) = magnitude else {
            return self.min_size;
        };
        if !magnitude.is_finite() || magnitude <= 0.0 || self.is_degenerate() {
            return self.min_size;
        }
        let t = (magnitude - self.mag_min) / (self.mag_max - self.mag_min);
        let radius = self.min_size + t * (self.max_size - self.min_size);
        radius.clamp(self.min_size, self.max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_over(magnitudes: &[f64]) -> SizeScale {
        SizeScale::from_magnitudes(magnitudes.iter().copied(), 8.0, 60.0)
    }

    #[test]
    fn observed_extremes_pin_the_radius_range() {
        let scale = scale_over(&[10.0, 55.0, 100.0]);
        assert_eq!(scale.radius_for(Some(10.0)), 8.0);
        assert_eq!(scale.radius_for(Some(100.0)), 60.0);
        assert_eq!(scale.radius_for(Some(55.0)), 34.0);
    }

    #[test]
    fn equal_magnitudes_collapse_to_min() {
        let scale = scale_over(&[42.0, 42.0, 42.0]);
        assert!(scale.is_degenerate());
        assert_eq!(scale.radius_for(Some(42.0)), 8.0);
    }

    #[test]
    fn empty_batch_collapses_to_min() {
        let scale = scale_over(&[]);
        assert!(scale.is_degenerate());
        assert_eq!(scale.radius_for(Some(1000.0)), 8.0);
    }

    #[test]
    fn junk_magnitudes_are_ignored_during_observation() {
        let scale = scale_over(&[f64::NAN, -5.0, 0.0, 10.0, 100.0]);
        assert_eq!(scale.domain(), (10.0, 100.0));
    }

    #[test]
    fn missing_and_junk_inputs_get_the_minimum() {
        let scale = scale_over(&[10.0, 100.0]);
        assert_eq!(scale.radius_for(None), 8.0);
        assert_eq!(scale.radius_for(Some(f64::NAN)), 8.0);
        assert_eq!(scale.radius_for(Some(0.0)), 8.0);
        assert_eq!(scale.radius_for(Some(-3.0)), 8.0);
    }

    #[test]
    fn out_of_domain_magnitudes_clamp() {
        let scale = scale_over(&[10.0, 100.0]);
        assert_eq!(scale.radius_for(Some(5.0)), 8.0);
        assert_eq!(scale.radius_for(Some(1_000_000.0)), 60.0);
    }
}
