//! Canonical week window.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// First day of the calendar week used for the weekly-hours cap.
///
/// One rule is chosen per run and applied to every shift. A shift's whole
/// duration counts toward the week containing its start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeekStart {
    /// ISO 8601 weeks.
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Returns the first date of the week containing `time`.
    pub fn week_of(self, time: NaiveDateTime) -> NaiveDate {
        let date = time.date();
        let offset = match self {
            WeekStart::Monday => date.weekday().num_days_from_monday(),
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        };
        date - Duration::days(i64::from(offset))
    }
}
