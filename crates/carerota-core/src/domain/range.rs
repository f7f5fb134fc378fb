//! Date ranges for loading a run's input.

use chrono::NaiveDateTime;

/// Half-open window `[start, end)` a run is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns true if `[start, end)` intersects this range.
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
