//! Scheduling service: load, optimize, commit.
//!
//! The only place repositories are touched. Loading happens entirely before
//! the computation and the single write happens after it, so a failed
//! commit never leaves a partial schedule behind and can be retried with the
//! run already computed.

use carerota_core::{
    Assignment, CarerotaError, DateRange, OptimizationConstraints, OrganizationId, Result,
    ShiftStore, StaffDirectory, TimeOffStore,
};
use tracing::info;

use crate::optimizer::{optimize_with, SolveOutcome};
use crate::termination::Termination;

/// A computed run that may or may not have been committed yet.
#[derive(Debug, Clone)]
pub struct OptimizationRun {
    pub organization_id: OrganizationId,
    pub range: DateRange,
    pub outcome: SolveOutcome,
}

impl OptimizationRun {
    /// New assignments to write back, in the order they were made.
    pub fn assignments(&self) -> &[Assignment] {
        &self.outcome.assignments
    }
}

/// Runs optimizations against injected collaborators.
#[derive(Debug)]
pub struct SchedulingService<D, S, T> {
    staff: D,
    shifts: S,
    time_off: T,
}

impl<D, S, T> SchedulingService<D, S, T>
where
    D: StaffDirectory,
    S: ShiftStore,
    T: TimeOffStore,
{
    pub fn new(staff: D, shifts: S, time_off: T) -> Self {
        Self {
            staff,
            shifts,
            time_off,
        }
    }

    pub fn shift_store(&self) -> &S {
        &self.shifts
    }

    /// Loads the input for `organization_id` within `range` and optimizes it.
    ///
    /// Approved time off from the time-off store is added to any already
    /// present in `constraints`. A failing collaborator aborts the run with
    /// [`CarerotaError::Load`]. Nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`CarerotaError::InvalidInput`] before touching any store when
    /// `range` is empty or ends before it starts.
    pub fn optimize<X: Termination + ?Sized>(
        &self,
        organization_id: &OrganizationId,
        range: DateRange,
        constraints: &OptimizationConstraints,
        termination: &X,
    ) -> Result<OptimizationRun> {
        constraints.validate()?;
        if range.is_empty() {
            return Err(CarerotaError::InvalidInput(format!(
                "date range {} to {} is empty",
                range.start, range.end
            )));
        }

        let staff = self
            .staff
            .list_eligible_staff(organization_id)
            .map_err(CarerotaError::Load)?;
        let shifts = self
            .shifts
            .list_shifts(organization_id, &range)
            .map_err(CarerotaError::Load)?;
        let loaded = self
            .time_off
            .list_approved(organization_id, &range)
            .map_err(CarerotaError::Load)?;

        let mut constraints = constraints.clone();
        for request in loaded {
            if !constraints.time_off_requests.contains(&request) {
                constraints.time_off_requests.push(request);
            }
        }

        let outcome = optimize_with(&staff, &shifts, &constraints, termination)?;
        Ok(OptimizationRun {
            organization_id: organization_id.clone(),
            range,
            outcome,
        })
    }

    /// Writes the new assignments of `run` in one batch.
    ///
    /// Does nothing when the run made no assignments. On
    /// [`CarerotaError::Commit`] nothing was written and the same run may be
    /// committed again.
    pub fn commit(&self, run: &OptimizationRun) -> Result<()> {
        let assignments = run.assignments();
        if assignments.is_empty() {
            return Ok(());
        }

        info!(
            event = "commit_start",
            organization = %run.organization_id,
            assignments = assignments.len(),
        );
        self.shifts
            .commit_assignments(assignments)
            .map_err(CarerotaError::Commit)?;
        info!(event = "commit_end", organization = %run.organization_id);
        Ok(())
    }
}
