#![forbid(unsafe_code)]

//! Shared vocabulary for Tidemark.
//!
//! # Role in Tidemark
//! `tidemark-core` holds the types every other crate speaks: plottable
//! records and markers, plot-space geometry, the past/future split, the
//! injectable clock, and the color palette. It has no layout logic and no
//! I/O; `tidemark-layout` computes with these types and `tidemark-data`
//! produces them from external sources.
//!
//! # This crate provides
//! - [`TemporalRecord`] and [`EventMarker`] input models.
//! - [`PlotPoint`] and [`Track`] plot-space geometry.
//! - [`Era`] past/future classification against a current year.
//! - [`Clock`] with a wall-clock and a fixed implementation.
//! - [`Rgb`] and [`Palette`] category color lookup.

pub mod clock;
pub mod color;
pub mod era;
pub mod geometry;
pub mod record;

pub use clock::{Clock, FixedClock, SystemClock};
pub use color::{Palette, Rgb};
pub use era::Era;
pub use geometry::{PlotPoint, Track};
pub use record::{EventMarker, TemporalRecord};
