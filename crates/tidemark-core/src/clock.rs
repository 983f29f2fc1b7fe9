#![forbid(unsafe_code)]

//! Injectable source of the current calendar year.
//!
//! The past/future boundary is evaluated against the wall clock at layout
//! time, so the NOW line drifts as real time passes during a session. That
//! drift is intended. Tests and snapshot comparisons inject [`FixedClock`]
//! instead of pinning the system clock.

use chrono::{Datelike, Local};

/// Source of the current calendar year.
pub trait Clock {
    /// The current year at the moment of the call.
    fn current_year(&self) -> i32;
}

/// Wall-clock years in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock pinned to one year, for reproducible layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
