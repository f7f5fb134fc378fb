//! Time-off requests.

use chrono::NaiveDateTime;

use crate::id::StaffId;

/// Review state of a time-off request. Only approved requests constrain scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TimeOffStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

/// A staff member's request to be away over `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimeOffRequest {
    pub staff_id: StaffId,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: TimeOffStatus,
}

impl TimeOffRequest {
    /// Creates an approved request.
    pub fn approved(
        staff_id: impl Into<StaffId>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            staff_id: staff_id.into(),
            start_time,
            end_time,
            status: TimeOffStatus::Approved,
        }
    }

    pub fn with_status(mut self, status: TimeOffStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_approved(&self) -> bool {
        self.status == TimeOffStatus::Approved
    }

    /// Returns true if `[start, end)` intersects the requested period.
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_time < end && start < self.end_time
    }
}
