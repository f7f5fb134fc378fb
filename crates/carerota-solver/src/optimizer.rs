//! Optimization entry points.
//!
//! A run validates its input, seeds the working state from pre-existing
//! assignments, fills open shifts greedily, then sweeps the final schedule
//! for conflicts and scores it.

use std::collections::HashSet;

use carerota_core::{
    Assignment, CarerotaError, OptimizationConstraints, OptimizationResult, Result, Shift, Staff,
};
use tracing::{info, warn};

use crate::calendar::TimeOffCalendar;
use crate::conflicts::detect_conflicts;
use crate::engine::AssignmentEngine;
use crate::metrics::calculate_metrics;
use crate::scope::RunScope;
use crate::score::calculate_score;
use crate::state::WorkingState;
use crate::statistics::RunStatistics;
use crate::termination::{NoTermination, Termination};

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub result: OptimizationResult,
    /// Assignments made by this run, in the order they were made.
    pub assignments: Vec<Assignment>,
    pub statistics: RunStatistics,
}

/// Optimizes `shifts` without a time limit and returns the scored result.
///
/// # Examples
///
/// ```
/// use carerota_core::{OptimizationConstraints, Shift, ShiftType, Staff};
/// use carerota_solver::optimize;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(6, 0, 0)
///     .unwrap();
/// let end = start + chrono::Duration::hours(8);
/// let staff = vec![Staff::new("nurse-1", "Ada")];
/// let shifts = vec![Shift::new("mon-am", ShiftType::Morning, start, end)];
///
/// let result = optimize(&staff, &shifts, &OptimizationConstraints::new(40.0, 8.0)).unwrap();
/// assert_eq!(result.metrics.unassigned_shifts, 0);
/// assert_eq!(result.score, 100.0);
/// ```
pub fn optimize(
    staff: &[Staff],
    shifts: &[Shift],
    constraints: &OptimizationConstraints,
) -> Result<OptimizationResult> {
    optimize_with(staff, shifts, constraints, &NoTermination).map(|outcome| outcome.result)
}

/// Optimizes `shifts`, checking `termination` before each open shift.
///
/// Shifts already assigned are kept as they are. When `termination` fires,
/// the remaining open shifts stay unassigned and the result still covers
/// the full schedule.
pub fn optimize_with<T: Termination + ?Sized>(
    staff: &[Staff],
    shifts: &[Shift],
    constraints: &OptimizationConstraints,
    termination: &T,
) -> Result<SolveOutcome> {
    constraints.validate()?;
    validate_input(staff, shifts)?;

    let mut scope = RunScope::new();
    let time_off = TimeOffCalendar::new(&constraints.time_off_requests);
    let mut schedule = shifts.to_vec();
    let mut state = WorkingState::seed(&schedule, constraints.week_start);

    let engine = AssignmentEngine::new(staff, constraints, &time_off);
    info!(
        event = "optimize_start",
        staff_count = staff.len(),
        shift_count = schedule.len(),
        open_count = schedule.iter().filter(|s| !s.is_assigned()).count(),
        time_off_count = time_off.len(),
    );

    let assignments = engine.run(&mut schedule, &mut state, &mut scope, termination);

    if scope.statistics().terminated_early {
        warn!(
            event = "terminated_early",
            processed = scope.statistics().shifts_processed,
            skipped = scope.statistics().skipped_shifts(),
        );
    }

    let result = assess(schedule, staff, constraints, &time_off);
    let statistics = scope.finish();

    info!(
        event = "optimize_end",
        score = result.score,
        assigned = assignments.len(),
        unassigned = result.metrics.unassigned_shifts,
        conflicts = result.conflicts.len(),
        duration_ms = statistics.duration.as_millis() as u64,
    );

    Ok(SolveOutcome {
        result,
        assignments,
        statistics,
    })
}

/// Scores `shifts` as they stand, without assigning anything.
pub fn assess_schedule(
    staff: &[Staff],
    shifts: &[Shift],
    constraints: &OptimizationConstraints,
) -> Result<OptimizationResult> {
    constraints.validate()?;
    validate_input(staff, shifts)?;

    let time_off = TimeOffCalendar::new(&constraints.time_off_requests);
    Ok(assess(shifts.to_vec(), staff, constraints, &time_off))
}

fn assess(
    schedule: Vec<Shift>,
    staff: &[Staff],
    constraints: &OptimizationConstraints,
    time_off: &TimeOffCalendar,
) -> OptimizationResult {
    let conflicts = detect_conflicts(&schedule, constraints, time_off);
    let metrics = calculate_metrics(&schedule, staff, constraints);
    let score = calculate_score(&metrics, &conflicts);
    OptimizationResult {
        schedule,
        score,
        conflicts,
        metrics,
    }
}

/// Rejects duplicate ids and shifts that do not end after they start.
pub fn validate_input(staff: &[Staff], shifts: &[Shift]) -> Result<()> {
    let mut staff_ids = HashSet::with_capacity(staff.len());
    for member in staff {
        if !staff_ids.insert(&member.id) {
            return Err(CarerotaError::InvalidInput(format!(
                "duplicate staff id {}",
                member.id
            )));
        }
    }

    let mut shift_ids = HashSet::with_capacity(shifts.len());
    for shift in shifts {
        if !shift_ids.insert(&shift.id) {
            return Err(CarerotaError::InvalidInput(format!(
                "duplicate shift id {}",
                shift.id
            )));
        }
        if shift.end_time <= shift.start_time {
            return Err(CarerotaError::InvalidInput(format!(
                "shift {} does not end after it starts",
                shift.id
            )));
        }
    }

    Ok(())
}
