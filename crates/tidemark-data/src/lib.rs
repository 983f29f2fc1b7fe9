#![forbid(unsafe_code)]

//! Data edges for Tidemark.
//!
//! # Role in Tidemark
//! `tidemark-data` sits between the outside world and the layout
//! engine: it parses the slightly off-standard CSV files, defines the
//! store seams behind which a real backend lives, runs the memory
//! submission flow, and computes the series math for the companion
//! charts. Nothing here positions a point; that is `tidemark-layout`.
//!
//! # This crate provides
//! - [`csv`] dialect-aware table parsing and record decoding.
//! - [`store`] the [`RecordStore`]/[`AssetStore`] seams with in-memory
//!   implementations.
//! - [`memory`] draft validation, media upload, and stacked marks.
//! - [`aggregate`] per-year totals, smoothing, and linear projection.

pub mod aggregate;
pub mod csv;
pub mod memory;
pub mod store;

pub use aggregate::{SeriesPoint, linear_projection, moving_average, totals_by_year};
pub use csv::{ColumnMap, Dialect, IngestError, SkipReport, Table, decode_records};
pub use memory::{
    MediaUpload, Memory, MemoryId, MemoryKind, NewMemory, SubmitError, asset_path,
    memory_marks, story_records, submit_memory,
};
pub use store::{AssetStore, MemAssets, MemStore, OceanStory, RecordStore, StoreError};
