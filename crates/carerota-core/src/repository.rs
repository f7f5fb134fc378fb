//! Collaborator interfaces for loading run input and persisting assignments.
//!
//! Implementations are synchronous. The optimizer itself never touches a
//! repository; only the scheduling service does, before and after the
//! computation.

use crate::domain::{DateRange, Shift, Staff, TimeOffRequest};
use crate::error::RepositoryError;
use crate::id::OrganizationId;
use crate::result::Assignment;

/// Source of the active staff roster.
pub trait StaffDirectory {
    /// Active staff of `organization_id` with their certifications populated.
    fn list_eligible_staff(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Staff>, RepositoryError>;
}

/// Source and sink of shifts.
pub trait ShiftStore {
    /// Shifts of `organization_id` intersecting `range`, assigned or not.
    fn list_shifts(
        &self,
        organization_id: &OrganizationId,
        range: &DateRange,
    ) -> Result<Vec<Shift>, RepositoryError>;

    /// Persists all `assignments` atomically: either every one is written or none is.
    fn commit_assignments(&self, assignments: &[Assignment]) -> Result<(), RepositoryError>;
}

/// Source of approved time off.
pub trait TimeOffStore {
    /// Approved requests of `organization_id` intersecting `range`.
    fn list_approved(
        &self,
        organization_id: &OrganizationId,
        range: &DateRange,
    ) -> Result<Vec<TimeOffRequest>, RepositoryError>;
}
