#![forbid(unsafe_code)]

//! Tidemark public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```ignore
//! use tidemark::prelude::*;
//!
//! let mut engine = LayoutEngine::new(LayoutConfig::default().with_seed(7));
//! let layout = engine.layout(&records, &[], &SystemClock)?;
//! ```

// --- Core types -----------------------------------------------------------

pub use tidemark_core::{
    Clock, Era, EventMarker, FixedClock, Palette, PlotPoint, Rgb, SystemClock, TemporalRecord,
    Track,
};

// --- Layout ---------------------------------------------------------------

pub use tidemark_layout::{
    Breakpoint, ConfigError, Layout, LayoutConfig, LayoutEngine, PlacementReport, Placer,
    PositionedPoint, SizeScale, TimeScale, Viewport,
};

// --- Data edges -----------------------------------------------------------

pub use tidemark_data::{
    AssetStore, ColumnMap, Dialect, IngestError, MemAssets, MemStore, Memory, MemoryId,
    MemoryKind, NewMemory, OceanStory, RecordStore, SeriesPoint, SkipReport, StoreError,
    SubmitError, Table, decode_records, submit_memory,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Clock, ColumnMap, Dialect, Era, EventMarker, FixedClock, Layout, LayoutConfig,
        LayoutEngine, Palette, PositionedPoint, SystemClock, Table, TemporalRecord, Track,
        Viewport, decode_records,
    };

    pub use crate::{core, data, layout};
}

pub use tidemark_core as core;
pub use tidemark_data as data;
pub use tidemark_layout as layout;
