//! Greedy assignment of open shifts.
//!
//! Open shifts are filled hardest first: most required certifications,
//! then earliest start, then lowest shift id. For each shift every staff
//! member is evaluated in ascending id order; the highest scoring eligible
//! candidate wins and ties go to the first one seen. Each commitment is
//! applied to the working state before the next shift is considered, and no
//! shift is revisited.

use std::cmp::Reverse;

use carerota_core::{Assignment, OptimizationConstraints, Shift, Staff};
use tracing::{debug, trace};

use crate::calendar::TimeOffCalendar;
use crate::evaluator::{evaluate, Eligibility};
use crate::scope::RunScope;
use crate::scorer::score_candidate;
use crate::state::WorkingState;
use crate::termination::Termination;

/// Assigns staff to open shifts for a single run.
#[derive(Debug)]
pub struct AssignmentEngine<'a> {
    roster: Vec<&'a Staff>,
    constraints: &'a OptimizationConstraints,
    time_off: &'a TimeOffCalendar,
}

impl<'a> AssignmentEngine<'a> {
    /// Creates an engine over `staff`, enumerated in ascending id order.
    pub fn new(
        staff: &'a [Staff],
        constraints: &'a OptimizationConstraints,
        time_off: &'a TimeOffCalendar,
    ) -> Self {
        let mut roster: Vec<&Staff> = staff.iter().collect();
        roster.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            roster,
            constraints,
            time_off,
        }
    }

    /// Indices of unassigned shifts in `schedule`, in processing order.
    pub fn open_shift_order(&self, schedule: &[Shift]) -> Vec<usize> {
        let mut open: Vec<usize> = schedule
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_assigned())
            .map(|(i, _)| i)
            .collect();
        open.sort_by_key(|&i| {
            let shift = &schedule[i];
            (
                Reverse(self.constraints.required_certifications(shift.shift_type).len()),
                shift.start_time,
                &shift.id,
            )
        });
        open
    }

    /// Picks the best eligible candidate for `shift`, if any.
    ///
    /// Returns the candidate with its score.
    pub fn best_candidate(
        &self,
        shift: &Shift,
        state: &WorkingState,
        scope: &mut RunScope,
    ) -> Option<(&'a Staff, f64)> {
        let mut best: Option<(&'a Staff, f64)> = None;

        for &staff in &self.roster {
            let stats = scope.statistics_mut();
            stats.eligibility_checks += 1;

            match evaluate(staff, shift, state, self.constraints, self.time_off) {
                Eligibility::Eligible => {
                    let score = score_candidate(staff, shift, state, self.constraints);
                    if best.map_or(true, |(_, best_score)| score > best_score) {
                        best = Some((staff, score));
                    }
                }
                Eligibility::Ineligible(rejection) => {
                    trace!(
                        event = "candidate_rejected",
                        shift = %shift.id,
                        staff = %staff.id,
                        reason = %rejection,
                    );
                    stats.rejected_by.record(&rejection);
                }
            }
        }

        best
    }

    /// Fills open shifts of `schedule` in place and returns the new assignments.
    ///
    /// `state` must already contain every pre-existing assignment of
    /// `schedule`. Stops early, leaving the remaining shifts open, when
    /// `termination` fires.
    pub fn run<T: Termination + ?Sized>(
        &self,
        schedule: &mut [Shift],
        state: &mut WorkingState,
        scope: &mut RunScope,
        termination: &T,
    ) -> Vec<Assignment> {
        let order = self.open_shift_order(schedule);
        scope.statistics_mut().open_shifts = order.len();
        let mut assignments = Vec::new();

        for idx in order {
            if termination.is_terminated(scope) {
                scope.statistics_mut().terminated_early = true;
                break;
            }
            scope.statistics_mut().shifts_processed += 1;

            let shift = &schedule[idx];
            match self.best_candidate(shift, state, scope) {
                Some((staff, score)) => {
                    debug!(
                        event = "shift_assigned",
                        shift = %shift.id,
                        staff = %staff.id,
                        score,
                    );
                    state.commit(&staff.id, shift);
                    assignments.push(Assignment::new(shift.id.clone(), staff.id.clone()));
                    schedule[idx].staff_id = Some(staff.id.clone());
                    scope.statistics_mut().assignments_made += 1;
                }
                None => {
                    debug!(event = "shift_unassigned", shift = %shift.id);
                }
            }
        }

        assignments
    }
}
