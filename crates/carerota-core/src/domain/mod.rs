//! Domain snapshots consumed by the optimizer.
//!
//! Every type here is a plain value object populated once at load time.
//! The optimizer never re-queries a collaborator mid-run.

mod constraints;
mod range;
mod shift;
mod staff;
mod time_off;
mod week;

#[cfg(test)]
mod tests;

pub use constraints::OptimizationConstraints;
pub use range::DateRange;
pub use shift::{Shift, ShiftType, ShiftTypeParseError};
pub use staff::{Certification, Staff};
pub use time_off::{TimeOffRequest, TimeOffStatus};
pub use week::WeekStart;

use chrono::NaiveDateTime;

pub(crate) const SECONDS_PER_HOUR: i64 = 3600;

/// Whole seconds from `start` to `end`, negative if `end` comes first.
pub(crate) fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds()
}

/// Converts whole seconds to fractional hours.
pub(crate) fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 / SECONDS_PER_HOUR as f64
}

/// Converts fractional hours to the nearest whole second.
pub(crate) fn hours_to_seconds(hours: f64) -> i64 {
    (hours * SECONDS_PER_HOUR as f64).round() as i64
}
