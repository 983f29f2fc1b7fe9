#![forbid(unsafe_code)]

//! Per-year totals and series smoothing.
//!
//! Everything here feeds the companion charts beside the scatter: bar
//! totals per year, a smoothed long series, and the straight-line
//! projection that extends a measured series into the future.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tidemark_core::TemporalRecord;

use crate::csv::Table;

/// One point of a year-indexed series. Years are fractional because
/// some sources carry year-plus-fraction timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: f64,
    pub value: f64,
    /// True for points extrapolated beyond the measured series.
    pub projected: bool,
}

impl SeriesPoint {
    /// A measured point.
    #[inline]
    #[must_use]
    pub const fn new(year: f64, value: f64) -> Self {
        Self {
            year,
            value,
            projected: false,
        }
    }
}

/// Sum magnitudes per year, ascending.
///
/// Only rows carrying both a year and a finite non-negative magnitude
/// contribute; everything else is left out of the totals.
#[must_use]
pub fn totals_by_year(records: &[TemporalRecord]) -> Vec<(i32, f64)> {
    let mut totals: FxHashMap<i32, f64> = FxHashMap::default();
    for record in records {
        let Some(year) = record.year else { continue };
        let Some(magnitude) = record.magnitude.filter(|m| m.is_finite() && *m >= 0.0) else {
            continue;
        };
        *totals.entry(year).or_insert(0.0) += magnitude;
    }
    if totals.is_empty() {
        tracing::warn!(records = records.len(), "no rows contributed to totals");
    }
    let mut totals: Vec<(i32, f64)> = totals.into_iter().collect();
    totals.sort_unstable_by_key(|&(year, _)| year);
    totals
}

/// Centered moving average; the window shrinks at both edges.
///
/// Years and projection flags pass through, only values are smoothed.
#[must_use]
pub fn moving_average(series: &[SeriesPoint], window: usize) -> Vec<SeriesPoint> {
    let half = window / 2;
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(series.len());
            let sum: f64 = series[start..end].iter().map(|p| p.value).sum();
            SeriesPoint {
                value: sum / (end - start) as f64,
                ..*point
            }
        })
        .collect()
}

/// Extend a series linearly: one point per year after `last`, reaching
/// `last.value + total_rise` at `end_year`, each flagged projected.
///
/// An `end_year` at or before the last measured year yields nothing.
#[must_use]
pub fn linear_projection(last: SeriesPoint, end_year: f64, total_rise: f64) -> Vec<SeriesPoint> {
    let span = end_year - last.year;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let rate = total_rise / span;
    let mut projection = Vec::new();
    let mut year = last.year + 1.0;
    while year <= end_year {
        projection.push(SeriesPoint {
            year,
            value: last.value + rate * (year - last.year),
            projected: true,
        });
        year += 1.0;
    }
    projection
}

/// Read a `(year, value)` series out of two table columns, scaling the
/// values (unit conversions like mm to cm). Unparseable rows drop out.
#[must_use]
pub fn series_from_table(
    table: &Table,
    year_col: usize,
    value_col: usize,
    scale: f64,
) -> Vec<SeriesPoint> {
    let mut series = Vec::with_capacity(table.len());
    let mut dropped = 0usize;
    for row in 0..table.len() {
        let year = table.number(row, year_col);
        let value = table.number(row, value_col);
        match (year, value) {
            (Some(year), Some(value)) => series.push(SeriesPoint::new(year, value * scale)),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::warn!(dropped, kept = series.len(), "series rows dropped");
    }
    series
}
