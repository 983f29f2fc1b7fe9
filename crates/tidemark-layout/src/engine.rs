#![forbid(unsafe_code)]

//! The layout orchestrator.
//!
//! [`LayoutEngine`] turns a batch of records into a finished scatter in
//! one synchronous pass: filter to the year range, observe magnitudes,
//! map years to offsets, jitter, separate, classify. Each call rebuilds
//! the whole [`Layout`] from scratch; nothing is patched incrementally.
//!
//! # Usage
//!
//! ```ignore
//! use tidemark_core::{FixedClock, TemporalRecord};
//! use tidemark_layout::{LayoutConfig, LayoutEngine};
//!
//! let config = LayoutConfig::default().with_seed(7);
//! let mut engine = LayoutEngine::new(config);
//! let records = vec![TemporalRecord::for_year(1970).with_magnitude(250.0)];
//! let layout = engine.layout(&records, &[], &FixedClock(2025))?;
//! assert_eq!(layout.points.len(), 1);
//! ```
//!
//! # Invariants
//!
//! 1. A failing config aborts the call before any record is touched.
//! 2. Records without a usable year are counted in `skipped`, never
//!    silently dropped and never fatal.
//! 3. Point `y` is decided by the time scale plus bounded jitter; the
//!    placer afterwards only moves `x`.
//! 4. `era == Future` exactly when the record year postdates the
//!    injected clock at the moment of the call.
//! 5. Markers pass through untouched, in order.
//! 6. Zero usable records yields `Ok` with an empty point list.
//!
//! # Failure Modes
//!
//! [`ConfigError`] only. Per-record trouble degrades per record.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tidemark_core::{Clock, Era, EventMarker, PlotPoint, Rgb, TemporalRecord, color};

use crate::config::{ConfigError, LayoutConfig};
use crate::place::{PlacementReport, Placer};
use crate::scale::TimeScale;
use crate::size::SizeScale;

// ---------------------------------------------------------------------------
// Output model
// ---------------------------------------------------------------------------

/// One fully resolved point: where it sits, how it draws, what it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPoint {
    /// Horizontal offset from the track centerline.
    pub x: f64,
    /// Vertical offset from the top of the track.
    pub y: f64,
    /// Dot radius in pixels.
    pub radius: f64,
    /// Fill color after era and palette resolution.
    pub fill: Rgb,
    /// Fill opacity.
    pub opacity: f32,
    /// Past or future, relative to the clock at layout time.
    pub era: Era,
    /// The record this point was laid out from.
    pub record: TemporalRecord,
}

impl PositionedPoint {
    /// Plot-space position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> PlotPoint {
        PlotPoint::new(self.x, self.y)
    }

    /// Whether the point sits beyond the NOW line.
    #[inline]
    #[must_use]
    pub const fn is_future(&self) -> bool {
        self.era.is_future()
    }
}

/// A complete scatter: points, pass-through markers, and diagnostics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Positioned points, one per usable record, input order preserved.
    pub points: Vec<PositionedPoint>,
    /// Fixed annotations, untouched by the engine.
    pub markers: Vec<EventMarker>,
    /// Records dropped for missing or out-of-range years.
    pub skipped: usize,
    /// Placement pass diagnostics.
    pub placement: PlacementReport,
}

// ---------------------------------------------------------------------------
// LayoutEngine
// ---------------------------------------------------------------------------

/// Owns the config and the randomness; produces layouts on demand.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    rng: SmallRng,
}

impl LayoutEngine {
    /// Build an engine. A configured seed gives reproducible scatters;
    /// without one the RNG seeds from the OS and every run differs.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// The active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Swap the configuration, keeping the RNG stream.
    ///
    /// The resize path: viewport changes swap the track and relayout
    /// without reseeding.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Lay out one batch of records and markers.
    pub fn layout(
        &mut self,
        records: &[TemporalRecord],
        markers: &[EventMarker],
        clock: &dyn Clock,
    ) -> Result<Layout, ConfigError> {
        self.config.validate()?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("layout", records = records.len()).entered();

        let scale = TimeScale::new(
            self.config.year_min,
            self.config.year_max,
            self.config.track.height_px,
        )?;
        let current_year = clock.current_year();

        let mut survivors: Vec<&TemporalRecord> = Vec::with_capacity(records.len());
        let mut skipped = 0usize;
        for record in records {
            if record.in_year_range(self.config.year_min, self.config.year_max) {
                survivors.push(record);
            } else {
                skipped += 1;
            }
        }

        let sizes = SizeScale::from_magnitudes(
            survivors.iter().filter_map(|r| r.valid_magnitude()),
            self.config.min_dot_size,
            self.config.max_dot_size,
        );

        let half_width = self.config.track.half_width();
        let mut positions: Vec<PlotPoint> = Vec::with_capacity(survivors.len());
        for record in &survivors {
            let unit = record
                .horizontal_seed
                .unwrap_or_else(|| self.rng.random::<f64>());
            let x = unit * self.config.track.width_px - half_width;
            // in_year_range already proved the year is present.
            let year = record.year.unwrap_or(self.config.year_min);
            let jitter = (self.rng.random::<f64>() - 0.5) * 2.0 * self.config.axis_jitter_px;
            positions.push(PlotPoint::new(x, scale.position(year) + jitter));
        }

        let placer = Placer::new(self.config.min_distance, self.config.max_tries);
        let placement = placer.separate(&mut positions, &mut self.rng);

        let points = survivors
            .iter()
            .zip(positions)
            .map(|(record, position)| {
                let era = Era::of(record.year, current_year);
                let fill = if era.is_future() {
                    color::FUTURE
                } else {
                    self.config.palette.color_for(&record.category)
                };
                PositionedPoint {
                    x: position.x,
                    y: position.y,
                    radius: sizes.radius_for(record.magnitude),
                    fill,
                    opacity: self.config.opacity,
                    era,
                    record: (*record).clone(),
                }
            })
            .collect();

        let layout = Layout {
            points,
            markers: markers.to_vec(),
            skipped,
            placement,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            points = layout.points.len(),
            skipped = layout.skipped,
            moved = layout.placement.moved,
            exhausted = layout.placement.exhausted,
            "layout complete"
        );

        Ok(layout)
    }
}
