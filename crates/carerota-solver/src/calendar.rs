//! Approved time off indexed by staff member.

use std::collections::HashMap;

use carerota_core::{Shift, StaffId, TimeOffRequest};
use chrono::NaiveDateTime;

/// A half-open period `[start, end)` a staff member is away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absence {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Absence {
    pub fn covers_any_of(&self, shift: &Shift) -> bool {
        shift.intersects(self.start, self.end)
    }
}

/// Lookup of approved absences, built once per run.
///
/// Requests that are not approved are dropped on construction.
#[derive(Debug, Clone, Default)]
pub struct TimeOffCalendar {
    absences: HashMap<StaffId, Vec<Absence>>,
}

impl TimeOffCalendar {
    pub fn new<'a>(requests: impl IntoIterator<Item = &'a TimeOffRequest>) -> Self {
        let mut absences: HashMap<StaffId, Vec<Absence>> = HashMap::new();
        for request in requests.into_iter().filter(|r| r.is_approved()) {
            absences
                .entry(request.staff_id.clone())
                .or_default()
                .push(Absence {
                    start: request.start_time,
                    end: request.end_time,
                });
        }
        for list in absences.values_mut() {
            list.sort_by_key(|a| (a.start, a.end));
        }
        Self { absences }
    }

    /// Absences of `staff_id` intersecting `shift`, in start order.
    pub fn absences_during<'a>(
        &'a self,
        staff_id: &StaffId,
        shift: &'a Shift,
    ) -> impl Iterator<Item = &'a Absence> + 'a {
        self.absences
            .get(staff_id)
            .into_iter()
            .flatten()
            .filter(move |a| a.covers_any_of(shift))
    }

    /// Returns true if `staff_id` is away for any part of `shift`.
    pub fn is_away(&self, staff_id: &StaffId, shift: &Shift) -> bool {
        self.absences_during(staff_id, shift).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.absences.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.absences.is_empty()
    }
}
