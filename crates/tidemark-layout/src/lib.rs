#![forbid(unsafe_code)]

//! Temporal scatter solver.
//!
//! # Role in Tidemark
//! `tidemark-layout` owns the geometry pipeline: it maps years down a
//! vertical track, scales dot radii from observed magnitudes, scatters
//! points horizontally, separates crowded neighbors with bounded random
//! nudges, and splits past from future against an injected clock. It is
//! synchronous and deterministic under a seed; ingest and rendering live
//! in the neighboring crates.
//!
//! # This crate provides
//! - [`LayoutConfig`] and [`ConfigError`] validated configuration.
//! - [`TimeScale`] year-to-offset mapping and axis marks.
//! - [`SizeScale`] batch-observed magnitude-to-radius mapping.
//! - [`Placer`] and [`PlacementReport`] overlap avoidance.
//! - [`LayoutEngine`], [`Layout`], and [`PositionedPoint`] orchestration.
//! - [`Viewport`] and [`Breakpoint`] resize support.
//!
//! The optional `tracing` feature adds spans and counters around the
//! layout pass.

pub mod config;
pub mod engine;
pub mod place;
pub mod scale;
pub mod size;
pub mod viewport;

pub use config::{ConfigError, LayoutConfig};
pub use engine::{Layout, LayoutEngine, PositionedPoint};
pub use place::{PlacementReport, Placer};
pub use scale::TimeScale;
pub use size::SizeScale;
pub use viewport::{Breakpoint, Viewport};
