#![forbid(unsafe_code)]

//! Visitor-submitted memories and their path onto the plot.
//!
//! A memory is a story, quote, image, or sound tied loosely to a year.
//! Drafts are validated at the form edge, media is uploaded first and
//! swapped for its public URL, then the row is inserted. On the chart
//! memories with a plottable year render as fixed-size marks pinned to
//! that year, stepping across the track in stack order, deliberately
//! outside the jitter pass.

use std::fmt;

use serde::{Deserialize, Serialize};
use tidemark_core::{EventMarker, TemporalRecord};

use crate::store::{AssetStore, OceanStory, RecordStore, StoreError};

/// Oldest year the submission form accepts.
pub const MEMORY_YEAR_MIN: i32 = 1900;
/// Newest year the submission form accepts.
pub const MEMORY_YEAR_MAX: i32 = 2025;

/// Cross-axis offset of the first stacked memory mark.
pub const MEMORY_STACK_START_X: f64 = 600.0;
/// Cross-axis step between stacked memory marks.
pub const MEMORY_STACK_SPACING: f64 = 40.0;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// What a memory holds. Wire names are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryKind {
    Story,
    Quote,
    Image,
    Sound,
}

impl MemoryKind {
    /// Lowercase wire and path name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Quote => "quote",
            Self::Image => "image",
            Self::Sound => "sound",
        }
    }

    /// Whether submissions of this kind carry an uploaded file.
    #[must_use]
    pub const fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Sound)
    }
}

impl fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage id of a persisted memory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MemoryId(pub u64);

impl fmt::Display for MemoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted memory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: MemoryId,
    pub kind: MemoryKind,
    /// Text for story/quote kinds; a public asset URL for media kinds.
    pub content: String,
    pub author: String,
    pub year: Option<i32>,
}

/// A draft on its way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMemory {
    pub kind: MemoryKind,
    pub content: String,
    pub author: String,
    pub year: Option<i32>,
}

impl NewMemory {
    /// Empty draft of a kind.
    #[must_use]
    pub fn new(kind: MemoryKind) -> Self {
        Self {
            kind,
            content: String::new(),
            author: String::new(),
            year: None,
        }
    }

    /// Set the content text (builder pattern).
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the author name (builder pattern).
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the remembered year (builder pattern).
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Form-edge validation.
    ///
    /// Text kinds need non-blank content; media kinds need a file;
    /// years outside the submission range are rejected. Authorless
    /// drafts are fine, they read as anonymous.
    pub fn validate(&self, has_media: bool) -> Result<(), SubmitError> {
        if self.kind.is_media() {
            if !has_media {
                return Err(SubmitError::MissingMedia { kind: self.kind });
            }
        } else if self.content.trim().is_empty() {
            return Err(SubmitError::EmptyContent);
        }
        if let Some(year) = self.year {
            if !(MEMORY_YEAR_MIN..=MEMORY_YEAR_MAX).contains(&year) {
                return Err(SubmitError::YearOutOfRange { year });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A text kind arrived with blank content.
    EmptyContent,
    /// A media kind arrived without a file.
    MissingMedia { kind: MemoryKind },
    /// The year falls outside the submission range.
    YearOutOfRange { year: i32 },
    /// The store or the asset upload failed.
    Store(StoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "memory text is empty"),
            Self::MissingMedia { kind } => write!(f, "{kind} memory needs a file"),
            Self::YearOutOfRange { year } => write!(
                f,
                "year {year} outside {MEMORY_YEAR_MIN}..{MEMORY_YEAR_MAX}"
            ),
            Self::Store(_) => write!(f, "memory could not be stored"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// A file attached to a draft.
#[derive(Debug, Clone, Copy)]
pub struct MediaUpload<'a> {
    pub file_name: &'a str,
    pub bytes: &'a [u8],
}

/// Storage path for an uploaded file: `{kind}/{stamp}-{file_name}`.
#[must_use]
pub fn asset_path(kind: MemoryKind, stamp: u64, file_name: &str) -> String {
    format!("{kind}/{stamp}-{file_name}")
}

/// Validate, upload media, and insert.
///
/// Media is uploaded first under a stamped path; the draft's content is
/// replaced by the asset's public URL before the row is inserted. The
/// stamp is caller-provided so tests and retries stay deterministic.
pub fn submit_memory<S, A>(
    store: &mut S,
    assets: &mut A,
    draft: NewMemory,
    media: Option<MediaUpload<'_>>,
    stamp: u64,
) -> Result<Memory, SubmitError>
where
    S: RecordStore + ?Sized,
    A: AssetStore + ?Sized,
{
    draft.validate(media.is_some())?;

    let mut draft = draft;
    if draft.kind.is_media() {
        // validate() proved the upload is present.
        if let Some(upload) = media {
            let path = asset_path(draft.kind, stamp, upload.file_name);
            assets.upload(&path, upload.bytes)?;
            draft.content = assets.public_url(&path);
        }
    }

    let memory = store.insert_memory(draft)?;
    tracing::debug!(id = memory.id.0, kind = %memory.kind, "memory stored");
    Ok(memory)
}

// ---------------------------------------------------------------------------
// Onto the plot
// ---------------------------------------------------------------------------

/// Ocean stories as plottable records.
#[must_use]
pub fn story_records(stories: &[OceanStory]) -> Vec<TemporalRecord> {
    stories
        .iter()
        .map(|story| TemporalRecord {
            year: story.year,
            magnitude: story.magnitude,
            category: if story.category.is_empty() {
                "Story".to_owned()
            } else {
                story.category.clone()
            },
            label: story.title.clone(),
            detail: story.blurb.clone(),
            horizontal_seed: None,
        })
        .collect()
}

/// Memories as fixed marks pinned to their years.
///
/// Only memories with a year inside `year_min..=year_max` produce a
/// mark. The timeline offset comes from the year through `position`
/// (callers hand in `TimeScale::position` or an equivalent mapper);
/// the cross-axis offset steps with stack order over the surviving
/// memories, so the marks read as a rail of dots beside the scatter.
/// Memory marks skip the jitter pass entirely.
#[must_use]
pub fn memory_marks(
    memories: &[Memory],
    year_min: i32,
    year_max: i32,
    stack_x: f64,
    spacing: f64,
    position: impl Fn(i32) -> f64,
) -> Vec<EventMarker> {
    memories
        .iter()
        .filter_map(|memory| {
            let year = memory.year?;
            (year_min..=year_max)
                .contains(&year)
                .then_some((memory, year))
        })
        .enumerate()
        .map(|(i, (memory, year))| {
            let label = if memory.author.trim().is_empty() {
                memory.kind.to_string()
            } else {
                memory.author.clone()
            };
            EventMarker::new(stack_x + i as f64 * spacing, position(year), label)
                .with_text(memory.content.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemAssets, MemStore};

    #[test]
    fn text_kinds_need_content() {
        let draft = NewMemory::new(MemoryKind::Story).with_content("   ");
        assert_eq!(draft.validate(false), Err(SubmitError::EmptyContent));
        let draft = NewMemory::new(MemoryKind::Quote).with_content("the sea gives");
        assert_eq!(draft.validate(false), Ok(()));
    }

    #[test]
    fn media_kinds_need_a_file() {
        let draft = NewMemory::new(MemoryKind::Image);
        assert_eq!(
            draft.validate(false),
            Err(SubmitError::MissingMedia {
                kind: MemoryKind::Image,
            })
        );
        assert_eq!(draft.validate(true), Ok(()));
    }

    #[test]
    fn submission_years_are_bounded() {
        let early = NewMemory::new(MemoryKind::Story)
            .with_content("before the seawall")
            .with_year(1899);
        assert_eq!(
            early.validate(false),
            Err(SubmitError::YearOutOfRange { year: 1899 })
        );
        let edge = NewMemory::new(MemoryKind::Story)
            .with_content("the seawall")
            .with_year(1900);
        assert_eq!(edge.validate(false), Ok(()));
    }

    #[test]
    fn asset_paths_follow_the_stamp_scheme() {
        assert_eq!(
            asset_path(MemoryKind::Sound, 1700000000123, "waves.ogg"),
            "sound/1700000000123-waves.ogg"
        );
    }

    #[test]
    fn kind_names_round_trip_through_serde() {
        let json = serde_json::to_string(&MemoryKind::Sound).unwrap();
        assert_eq!(json, "\"sound\"");
        let back: MemoryKind = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(back, MemoryKind::Image);
    }

    #[test]
    fn text_submission_inserts_verbatim() {
        let mut store = MemStore::new();
        let mut assets = MemAssets::new();
        let draft = NewMemory::new(MemoryKind::Story)
            .with_content("we fished off the old jetty")
            .with_author("losa")
            .with_year(1988);

        let memory = submit_memory(&mut store, &mut assets, draft, None, 1).unwrap();
        assert_eq!(memory.id, MemoryId(1));
        assert_eq!(memory.content, "we fished off the old jetty");
        assert!(assets.is_empty());
    }

    #[test]
    fn media_submission_uploads_then_links() {
        let mut store = MemStore::new();
        let mut assets = MemAssets::new();
        let draft = NewMemory::new(MemoryKind::Image).with_author("tevita");
        let upload = MediaUpload {
            file_name: "reef.png",
            bytes: b"png bytes",
        };

        let memory =
            submit_memory(&mut store, &mut assets, draft, Some(upload), 42).unwrap();
        assert_eq!(memory.content, "mem://assets/image/42-reef.png");
        assert!(assets.contains("image/42-reef.png"));
    }

    #[test]
    fn invalid_drafts_never_touch_the_stores() {
        let mut store = MemStore::new();
        let mut assets = MemAssets::new();
        let draft = NewMemory::new(MemoryKind::Sound).with_author("mute");

        let err = submit_memory(&mut store, &mut assets, draft, None, 7).unwrap_err();
        assert_eq!(
            err,
            SubmitError::MissingMedia {
                kind: MemoryKind::Sound,
            }
        );
        assert!(store.fetch_memories().unwrap().is_empty());
        assert!(assets.is_empty());
    }

    #[test]
    fn stories_become_records() {
        let stories = vec![OceanStory {
            id: 9,
            title: "The king tide".to_owned(),
            year: Some(1997),
            magnitude: Some(12.0),
            category: String::new(),
            blurb: Some("as told in Funafuti".to_owned()),
        }];
        let records = story_records(&stories);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, Some(1997));
        assert_eq!(records[0].category, "Story");
        assert_eq!(records[0].label, "The king tide");
        assert_eq!(records[0].detail.as_deref(), Some("as told in Funafuti"));
    }

    fn memory(id: u64, kind: MemoryKind, content: &str, author: &str, year: Option<i32>) -> Memory {
        Memory {
            id: MemoryId(id),
            kind,
            content: content.to_owned(),
            author: author.to_owned(),
            year,
        }
    }

    #[test]
    fn memory_marks_follow_their_years() {
        let mut memories = vec![
            memory(1, MemoryKind::Story, "jetty", "losa", Some(1950)),
            memory(2, MemoryKind::Quote, "the sea gives", "", Some(2020)),
        ];
        let marks = memory_marks(
            &memories,
            1922,
            2025,
            MEMORY_STACK_START_X,
            MEMORY_STACK_SPACING,
            f64::from,
        );
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].y, 1950.0);
        assert_eq!(marks[1].y, 2020.0);
        assert_eq!(marks[0].x, 600.0);
        assert_eq!(marks[1].x, 640.0);
        assert_eq!(marks[0].label, "losa");
        // Anonymous marks fall back to the kind name.
        assert_eq!(marks[1].label, "quote");

        // Swapping the years must move the marks with them.
        memories[0].year = Some(2020);
        memories[1].year = Some(1950);
        let swapped = memory_marks(
            &memories,
            1922,
            2025,
            MEMORY_STACK_START_X,
            MEMORY_STACK_SPACING,
            f64::from,
        );
        assert_eq!(swapped[0].y, 2020.0);
        assert_eq!(swapped[1].y, 1950.0);
    }

    #[test]
    fn memory_marks_skip_unplottable_years() {
        let memories = vec![
            memory(1, MemoryKind::Story, "undated", "ana", None),
            memory(2, MemoryKind::Story, "too early", "sione", Some(1800)),
            memory(3, MemoryKind::Story, "jetty", "losa", Some(1988)),
        ];
        let marks = memory_marks(&memories, 1922, 2025, 600.0, 40.0, f64::from);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].y, 1988.0);
        // The stack index counts surviving marks only.
        assert_eq!(marks[0].x, 600.0);
        assert_eq!(marks[0].text, "jetty");
    }
}
