//! Running per-staff state of an optimization run.
//!
//! The state is seeded from every pre-existing assignment and updated after
//! each commitment, so later eligibility checks see earlier decisions.
//! Weekly totals are kept in whole seconds and only turned into hours at
//! the edges.

use std::collections::BTreeMap;

use carerota_core::{Shift, StaffId, WeekStart};
use chrono::NaiveDate;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Bookings and weekly totals of one staff member.
#[derive(Debug, Clone, Default)]
pub struct StaffLedger {
    weekly_seconds: BTreeMap<NaiveDate, i64>,
    shifts: Vec<Shift>,
}

impl StaffLedger {
    /// Seconds booked in the week starting on `week`.
    pub fn seconds_in_week(&self, week: NaiveDate) -> i64 {
        self.weekly_seconds.get(&week).copied().unwrap_or(0)
    }

    /// `(week start, seconds)` pairs in chronological order.
    pub fn weeks(&self) -> impl Iterator<Item = (NaiveDate, i64)> + '_ {
        self.weekly_seconds.iter().map(|(w, s)| (*w, *s))
    }

    /// Every shift booked for this staff member, in booking order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }
}

/// Per-staff weekly totals and shift lists for a run.
#[derive(Debug, Clone)]
pub struct WorkingState {
    week_start: WeekStart,
    ledgers: BTreeMap<StaffId, StaffLedger>,
}

impl WorkingState {
    pub fn new(week_start: WeekStart) -> Self {
        Self {
            week_start,
            ledgers: BTreeMap::new(),
        }
    }

    /// Builds the state from every assigned shift in `shifts`.
    pub fn seed(shifts: &[Shift], week_start: WeekStart) -> Self {
        let mut state = Self::new(week_start);
        for shift in shifts {
            if let Some(staff_id) = &shift.staff_id {
                state.commit(staff_id, shift);
            }
        }
        state
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Books `shift` for `staff_id`.
    pub fn commit(&mut self, staff_id: &StaffId, shift: &Shift) {
        let week = self.week_start.week_of(shift.start_time);
        let ledger = self.ledgers.entry(staff_id.clone()).or_default();
        *ledger.weekly_seconds.entry(week).or_insert(0) += shift.duration_seconds();
        ledger.shifts.push(shift.clone());
    }

    pub fn ledger(&self, staff_id: &StaffId) -> Option<&StaffLedger> {
        self.ledgers.get(staff_id)
    }

    /// Ledgers in ascending staff-id order.
    pub fn ledgers(&self) -> impl Iterator<Item = (&StaffId, &StaffLedger)> {
        self.ledgers.iter()
    }

    pub fn booked_shifts(&self, staff_id: &StaffId) -> &[Shift] {
        self.ledger(staff_id)
            .map(StaffLedger::shifts)
            .unwrap_or(&[])
    }

    /// Seconds booked for `staff_id` in the week starting on `week`.
    pub fn weekly_seconds(&self, staff_id: &StaffId, week: NaiveDate) -> i64 {
        self.ledger(staff_id)
            .map_or(0, |ledger| ledger.seconds_in_week(week))
    }

    /// Seconds `staff_id` would have in the week of `shift` if they took it.
    pub fn projected_weekly_seconds(&self, staff_id: &StaffId, shift: &Shift) -> i64 {
        let week = self.week_start.week_of(shift.start_time);
        self.weekly_seconds(staff_id, week) + shift.duration_seconds()
    }

    pub fn projected_weekly_hours(&self, staff_id: &StaffId, shift: &Shift) -> f64 {
        self.projected_weekly_seconds(staff_id, shift) as f64 / SECONDS_PER_HOUR
    }
}
