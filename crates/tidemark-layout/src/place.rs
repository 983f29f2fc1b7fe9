#![forbid(unsafe_code)]

//! Overlap-avoidance placement.
//!
//! A single greedy pass in input order: each candidate is checked
//! against the points already placed, and while it sits too close to
//! any of them it is nudged horizontally by a fresh random offset.
//! The nudge budget is small and exhaustion is tolerated, so dense
//! neighborhoods degrade to residual overlap instead of failing or
//! looping forever.
//!
//! # Usage
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tidemark_core::PlotPoint;
//! use tidemark_layout::Placer;
//!
//! let placer = Placer::new(30.0, 20);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut points = vec![PlotPoint::new(0.0, 0.0); 4];
//! let report = placer.separate(&mut points, &mut rng);
//! assert!(points.iter().all(|p| p.y == 0.0));
//! ```
//!
//! # Invariants
//!
//! 1. Only `x` ever changes; `y` is the time axis and stays put.
//! 2. Input order is preserved: points are mutated in place.
//! 3. The first point never moves; later points only test against
//!    points placed before them.
//! 4. Exhausting the try budget keeps the candidate where it landed.
//!    Residual overlap is reported, never an error.
//!
//! # Failure Modes
//!
//! None. The pass is total: every input slice yields a report.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tidemark_core::PlotPoint;

// ---------------------------------------------------------------------------
// PlacementReport
// ---------------------------------------------------------------------------

/// Diagnostics from one placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Points nudged at least once.
    pub moved: usize,
    /// Points still crowded when their try budget ran out.
    pub exhausted: usize,
}

// ---------------------------------------------------------------------------
// Placer
// ---------------------------------------------------------------------------

/// Greedy horizontal jitter placer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placer {
    /// Preferred center-to-center spacing in pixels.
    pub min_distance: f64,
    /// Nudges allowed per point before giving up.
    pub max_tries: u32,
}

impl Placer {
    /// Create a placer with the given spacing and try budget.
    #[inline]
    #[must_use]
    pub const fn new(min_distance: f64, max_tries: u32) -> Self {
        Self {
            min_distance,
            max_tries,
        }
    }

    /// Spread crowded points apart along the horizontal axis.
    ///
    /// Nudges draw uniformly from `[-min_distance/2, +min_distance/2]`,
    /// so a point can wander a few dot-widths from where it started but
    /// never leaves its year band.
    pub fn separate(&self, points: &mut [PlotPoint], rng: &mut impl Rng) -> PlacementReport {
        let mut report = PlacementReport::default();
        if self.min_distance <= 0.0 {
            return report;
        }
        for i in 0..points.len() {
            let mut candidate = points[i];
            let mut tries = 0u32;
            while self.crowded(&points[..i], &candidate) {
                if tries >= self.max_tries {
                    report.exhausted += 1;
                    break;
                }
                candidate = candidate.nudged_x((rng.random::<f64>() - 0.5) * self.min_distance);
                tries += 1;
            }
            if tries > 0 {
                report.moved += 1;
            }
            points[i] = candidate;
        }
        report
    }

    fn crowded(&self, placed: &[PlotPoint], candidate: &PlotPoint) -> bool {
        placed
            .iter()
            .any(|p| p.distance(candidate) < self.min_distance)
    }
}
