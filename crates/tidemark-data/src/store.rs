#![forbid(unsafe_code)]

//! Store seams for remote rows and uploaded assets.
//!
//! The layout engine never talks to a backend. Callers fetch rows
//! through [`RecordStore`], convert them to records, and hand those to
//! the engine; uploads go through [`AssetStore`]. Retry policy, auth,
//! and transport live behind the trait, with the collaborator that
//! implements it.
//!
//! [`MemStore`] and [`MemAssets`] are the in-memory implementations
//! used by tests and the demo: deterministic, monotonic ids, no I/O.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::memory::{Memory, MemoryId, NewMemory};

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Failures surfaced by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed row does not exist.
    NotFound { table: &'static str, id: u64 },
    /// Anything the backend reported: transport, auth, quota.
    Backend { message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { table, id } => write!(f, "no row {id} in {table}"),
            Self::Backend { message } => write!(f, "backend error: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

// ---------------------------------------------------------------------------
// Row models
// ---------------------------------------------------------------------------

/// One row of the ocean-story table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OceanStory {
    pub id: u64,
    pub title: String,
    pub year: Option<i32>,
    pub magnitude: Option<f64>,
    pub category: String,
    pub blurb: Option<String>,
}

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// Row storage: stories to plot, memories submitted by visitors.
pub trait RecordStore {
    /// All ocean stories, in storage order.
    fn fetch_stories(&self) -> Result<Vec<OceanStory>, StoreError>;

    /// All submitted memories, in storage order.
    fn fetch_memories(&self) -> Result<Vec<Memory>, StoreError>;

    /// Persist a draft and return it with its assigned id.
    fn insert_memory(&mut self, draft: NewMemory) -> Result<Memory, StoreError>;

    /// Remove a memory by id.
    fn delete_memory(&mut self, id: MemoryId) -> Result<(), StoreError>;
}

/// Blob storage for submitted media.
pub trait AssetStore {
    /// Store bytes at a path, overwriting any previous object.
    fn upload(&mut self, path: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Publicly reachable URL for a stored path.
    fn public_url(&self, path: &str) -> String;
}

// ---------------------------------------------------------------------------
// In-memory implementations
// ---------------------------------------------------------------------------

/// Deterministic in-memory [`RecordStore`].
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    stories: Vec<OceanStory>,
    memories: Vec<Memory>,
    next_id: u64,
}

impl MemStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the story table (builder pattern).
    #[must_use]
    pub fn with_stories(mut self, stories: Vec<OceanStory>) -> Self {
        self.stories = stories;
        self
    }
}

impl RecordStore for MemStore {
    fn fetch_stories(&self) -> Result<Vec<OceanStory>, StoreError> {
        Ok(self.stories.clone())
    }

    fn fetch_memories(&self) -> Result<Vec<Memory>, StoreError> {
        Ok(self.memories.clone())
    }

    fn insert_memory(&mut self, draft: NewMemory) -> Result<Memory, StoreError> {
        self.next_id += 1;
        let memory = Memory {
            id: MemoryId(self.next_id),
            kind: draft.kind,
            content: draft.content,
            author: draft.author,
            year: draft.year,
        };
        self.memories.push(memory.clone());
        Ok(memory)
    }

    fn delete_memory(&mut self, id: MemoryId) -> Result<(), StoreError> {
        match self.memories.iter().position(|m| m.id == id) {
            Some(index) => {
                self.memories.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                table: "memories",
                id: id.0,
            }),
        }
    }
}

/// Deterministic in-memory [`AssetStore`].
#[derive(Debug, Clone, Default)]
pub struct MemAssets {
    objects: FxHashMap<String, Vec<u8>>,
}

impl MemAssets {
    /// Empty asset store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a path holds an object.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.objects.contains_key(path)
    }

    /// Stored bytes for a path.
    #[must_use]
    pub fn object(&self, path: &str) -> Option<&[u8]> {
        self.objects.get(path).map(Vec::as_slice)
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing has been uploaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl AssetStore for MemAssets {
    fn upload(&mut self, path: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.objects.insert(path.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("mem://assets/{path}")
    }
}
