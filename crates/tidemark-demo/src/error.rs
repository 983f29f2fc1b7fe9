#![forbid(unsafe_code)]

//! Error surface for the demo binary.

use std::path::PathBuf;

use thiserror::Error;
use tidemark::{ConfigError, IngestError};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not ingest event file: {0}")]
    Ingest(#[from] IngestError),
    #[error("invalid layout configuration: {0}")]
    Config(#[from] ConfigError),
}

impl DemoError {
    /// Process exit code reported for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Write { .. } => 2,
            Self::Ingest(_) => 3,
            Self::Config(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
