//! Output of an optimization run.

use std::fmt;

use crate::domain::Shift;
use crate::id::{ShiftId, StaffId};

/// How serious a detected conflict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        })
    }
}

/// The hard constraint a conflict violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ConflictKind {
    /// Two shifts of one staff member intersect.
    Overlap,
    /// Two shifts of one staff member are closer than the minimum rest.
    InsufficientRest,
    /// An assigned shift falls inside approved time off.
    TimeOff,
}

impl ConflictKind {
    /// Severity attached to every conflict of this kind.
    pub fn severity(self) -> Severity {
        match self {
            ConflictKind::Overlap | ConflictKind::TimeOff => Severity::High,
            ConflictKind::InsufficientRest => Severity::Medium,
        }
    }
}

/// A hard-constraint violation found in the final schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Conflict {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ConflictKind,
    pub description: String,
    pub severity: Severity,
    pub staff_id: StaffId,
    /// Shifts involved, in start order.
    pub shift_ids: Vec<ShiftId>,
}

impl Conflict {
    pub fn new(
        kind: ConflictKind,
        staff_id: StaffId,
        shift_ids: Vec<ShiftId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            severity: kind.severity(),
            staff_id,
            shift_ids,
        }
    }
}

/// Aggregate quality figures for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduleMetrics {
    /// Percentage of shifts with a staff member assigned.
    pub utilization_rate: f64,
    /// Hours above the weekly cap, summed over staff and weeks.
    pub overtime_hours: f64,
    pub unassigned_shifts: usize,
    /// Percentage of requirement-bearing shifts covered by fully certified staff.
    pub certification_compliance: f64,
}

/// A single `(shift, staff)` pair produced by a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Assignment {
    pub shift_id: ShiftId,
    pub staff_id: StaffId,
}

impl Assignment {
    pub fn new(shift_id: ShiftId, staff_id: StaffId) -> Self {
        Self { shift_id, staff_id }
    }
}

/// The optimized schedule together with its conflicts, metrics and score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationResult {
    /// Every input shift in input order, including untouched pre-existing assignments.
    pub schedule: Vec<Shift>,
    /// Overall quality in `[0, 100]`.
    pub score: f64,
    pub conflicts: Vec<Conflict>,
    pub metrics: ScheduleMetrics,
}

impl OptimizationResult {
    pub fn shift(&self, id: &ShiftId) -> Option<&Shift> {
        self.schedule.iter().find(|s| &s.id == id)
    }

    /// Staff member assigned to `id`, if any.
    pub fn assignee(&self, id: &ShiftId) -> Option<&StaffId> {
        self.shift(id).and_then(|s| s.staff_id.as_ref())
    }

    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn conflicts_of(&self, kind: ConflictKind) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(move |c| c.kind == kind)
    }
}
