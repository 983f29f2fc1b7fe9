#![forbid(unsafe_code)]

//! Command-line demo for the tidemark layout pipeline.
//!
//! Reads a delimited event file, runs the scatter layout with a seedable
//! engine, prints a one-line summary, and writes the result as an SVG
//! document. Intended as a worked example of wiring the `tidemark` crates
//! together rather than as a production renderer.

pub mod cli;
pub mod error;
pub mod svg;

pub use cli::run_from_env;
pub use error::{DemoError, Result};
