//! Calendar helpers.
//!
//! Day numbers are days of January 2024; day 1 is a Monday, so days 1..=7
//! form one ISO week.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Midnight of January `day`, 2024, plus `hour` hours.
///
/// Hours past 23 roll over into following days.
pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    self::day(day)
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        + Duration::hours(i64::from(hour))
}

/// January `day`, 2024.
pub fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("fixture day must be within January 2024")
}
