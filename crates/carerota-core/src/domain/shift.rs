//! Shifts and shift types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use super::{seconds_between, seconds_to_hours};
use crate::id::{ShiftId, StaffId};

/// Kind of shift, used to look up certification requirements and preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ShiftType {
    Morning,
    Afternoon,
    Evening,
    Night,
    /// Telephone on-call cover.
    OnCall,
}

impl ShiftType {
    pub const ALL: [ShiftType; 5] = [
        ShiftType::Morning,
        ShiftType::Afternoon,
        ShiftType::Evening,
        ShiftType::Night,
        ShiftType::OnCall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Morning => "MORNING",
            ShiftType::Afternoon => "AFTERNOON",
            ShiftType::Evening => "EVENING",
            ShiftType::Night => "NIGHT",
            ShiftType::OnCall => "ON_CALL",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a shift type from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTypeParseError {
    pub value: String,
}

impl fmt::Display for ShiftTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shift type '{}'", self.value)
    }
}

impl std::error::Error for ShiftTypeParseError {}

impl FromStr for ShiftType {
    type Err = ShiftTypeParseError;

    /// Parses `MORNING`, `morning`, `on_call`, `ON-CALL` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        ShiftType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ShiftTypeParseError {
                value: s.to_string(),
            })
    }
}

/// A bounded time interval of a given type, optionally assigned to one staff member.
///
/// The interval is half-open: `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Shift {
    pub id: ShiftId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub staff_id: Option<StaffId>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub shift_type: ShiftType,
}

impl Shift {
    /// Creates an unassigned shift.
    pub fn new(
        id: impl Into<ShiftId>,
        shift_type: ShiftType,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: None,
            start_time,
            end_time,
            shift_type,
        }
    }

    /// Returns this shift already assigned to `staff_id`.
    pub fn assigned_to(mut self, staff_id: impl Into<StaffId>) -> Self {
        self.staff_id = Some(staff_id.into());
        self
    }

    pub fn is_assigned(&self) -> bool {
        self.staff_id.is_some()
    }

    pub fn duration_hours(&self) -> f64 {
        seconds_to_hours(self.duration_seconds())
    }

    /// Length of the shift in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        seconds_between(self.start_time, self.end_time)
    }

    /// Returns true if `[start, end)` intersects this shift.
    ///
    /// Touching endpoints do not intersect.
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_time < end && start < self.end_time
    }

    pub fn overlaps(&self, other: &Shift) -> bool {
        self.intersects(other.start_time, other.end_time)
    }

    /// Signed gap in hours between this shift and `other`, in either order.
    ///
    /// Measured from the end of whichever shift starts first to the start of
    /// the other. Negative when the shifts overlap.
    pub fn gap_hours(&self, other: &Shift) -> f64 {
        seconds_to_hours(self.gap_seconds(other))
    }

    /// [`Shift::gap_hours`] in whole seconds.
    pub fn gap_seconds(&self, other: &Shift) -> i64 {
        if self.start_time <= other.start_time {
            seconds_between(self.end_time, other.start_time)
        } else {
            seconds_between(other.end_time, self.start_time)
        }
    }
}
