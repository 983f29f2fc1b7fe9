#![forbid(unsafe_code)]

//! Past/future classification.
//!
//! A record is future iff its year lies strictly after the current year.
//! The boundary year itself is past: the NOW line belongs to the present.
//! Records without a year are past by default (and are normally filtered
//! out long before classification by the range check).

/// Which side of the NOW line a record falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Era {
    /// At or before the current year, or no year at all.
    #[default]
    Past,
    /// Strictly after the current year.
    Future,
}

impl Era {
    /// Classify a year against the current year.
    #[must_use]
    pub fn of(year: Option<i32>, current_year: i32) -> Self {
        match year {
            Some(y) if y > current_year => Self::Future,
            _ => Self::Past,
        }
    }

    /// Whether this is [`Era::Future`].
    #[inline]
    #[must_use]
    pub const fn is_future(self) -> bool {
        matches!(self, Self::Future)
    }
}
