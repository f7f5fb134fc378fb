//! In-memory collaborators.
//!
//! Each store can be told to fail so that error propagation can be tested.

use std::collections::HashMap;

use carerota_core::{
    Assignment, DateRange, OrganizationId, RepositoryError, Shift, ShiftId, ShiftStore, Staff,
    StaffDirectory, StaffId, TimeOffRequest, TimeOffStore,
};
use parking_lot::Mutex;

/// Staff directory backed by a vector per organization.
#[derive(Debug, Default)]
pub struct InMemoryStaffDirectory {
    staff: HashMap<OrganizationId, Vec<Staff>>,
    fail: bool,
}

impl InMemoryStaffDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_staff(mut self, org: &OrganizationId, staff: Vec<Staff>) -> Self {
        self.staff.entry(org.clone()).or_default().extend(staff);
        self
    }

    /// Makes every read fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl StaffDirectory for InMemoryStaffDirectory {
    fn list_eligible_staff(&self, org: &OrganizationId) -> Result<Vec<Staff>, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::new("staff directory", "directory unavailable"));
        }
        Ok(self.staff.get(org).cloned().unwrap_or_default())
    }
}

/// Shift store that applies committed assignments to its own records.
#[derive(Debug, Default)]
pub struct InMemoryShiftStore {
    shifts: Mutex<HashMap<OrganizationId, Vec<Shift>>>,
    commits: Mutex<Vec<Vec<Assignment>>>,
    failing_commits: Mutex<usize>,
    fail_reads: bool,
}

impl InMemoryShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shifts(self, org: &OrganizationId, shifts: Vec<Shift>) -> Self {
        self.shifts.lock().entry(org.clone()).or_default().extend(shifts);
        self
    }

    /// Makes every read fail.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Makes the next `count` commits fail without writing anything.
    pub fn fail_next_commits(&self, count: usize) {
        *self.failing_commits.lock() = count;
    }

    /// Every successful commit batch, in order.
    pub fn commits(&self) -> Vec<Vec<Assignment>> {
        self.commits.lock().clone()
    }

    /// Current staff assignment of a stored shift.
    pub fn assignee(&self, shift_id: &ShiftId) -> Option<StaffId> {
        self.shifts
            .lock()
            .values()
            .flatten()
            .find(|s| &s.id == shift_id)
            .and_then(|s| s.staff_id.clone())
    }
}

impl ShiftStore for InMemoryShiftStore {
    fn list_shifts(
        &self,
        org: &OrganizationId,
        range: &DateRange,
    ) -> Result<Vec<Shift>, RepositoryError> {
        if self.fail_reads {
            return Err(RepositoryError::new("shift store", "shift table locked"));
        }
        Ok(self
            .shifts
            .lock()
            .get(org)
            .map(|shifts| {
                shifts
                    .iter()
                    .filter(|s| range.intersects(s.start_time, s.end_time))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn commit_assignments(&self, assignments: &[Assignment]) -> Result<(), RepositoryError> {
        {
            let mut failing = self.failing_commits.lock();
            if *failing > 0 {
                *failing -= 1;
                return Err(RepositoryError::new("shift store", "write conflict"));
            }
        }

        let mut shifts = self.shifts.lock();
        for assignment in assignments {
            let found = shifts
                .values()
                .flatten()
                .any(|s| s.id == assignment.shift_id);
            if !found {
                return Err(RepositoryError::new(
                    "shift store",
                    format!("unknown shift {}", assignment.shift_id),
                ));
            }
        }
        for shift in shifts.values_mut().flatten() {
            if let Some(assignment) = assignments.iter().find(|a| a.shift_id == shift.id) {
                shift.staff_id = Some(assignment.staff_id.clone());
            }
        }
        self.commits.lock().push(assignments.to_vec());
        Ok(())
    }
}

/// Time-off store returning only approved requests.
#[derive(Debug, Default)]
pub struct InMemoryTimeOffStore {
    requests: HashMap<OrganizationId, Vec<TimeOffRequest>>,
    fail: bool,
}

impl InMemoryTimeOffStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requests(mut self, org: &OrganizationId, requests: Vec<TimeOffRequest>) -> Self {
        self.requests.entry(org.clone()).or_default().extend(requests);
        self
    }

    /// Makes every read fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl TimeOffStore for InMemoryTimeOffStore {
    fn list_approved(
        &self,
        org: &OrganizationId,
        range: &DateRange,
    ) -> Result<Vec<TimeOffRequest>, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::new("time-off store", "request service timed out"));
        }
        Ok(self
            .requests
            .get(org)
            .map(|requests| {
                requests
                    .iter()
                    .filter(|r| r.is_approved() && range.intersects(r.start_time, r.end_time))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
