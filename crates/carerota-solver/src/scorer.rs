//! Ranking of eligible candidates for a shift.
//!
//! The score is purely additive and unbounded:
//! - a flat bonus when the shift type is among the candidate's preferences
//! - half the hours left under the weekly cap after taking the shift
//! - a bonus per required certification held

use carerota_core::{OptimizationConstraints, Shift, Staff};

use crate::state::WorkingState;

/// Bonus for a preferred shift type.
pub const PREFERENCE_BONUS: f64 = 10.0;

/// Bonus per required certification the candidate holds.
pub const CERTIFICATION_BONUS: f64 = 5.0;

/// Divisor applied to the remaining weekly headroom.
pub const WORKLOAD_DIVISOR: f64 = 2.0;

/// Scores `staff` for `shift`. Higher is better.
///
/// Only meaningful for candidates that passed [`crate::evaluator::evaluate`].
pub fn score_candidate(
    staff: &Staff,
    shift: &Shift,
    state: &WorkingState,
    constraints: &OptimizationConstraints,
) -> f64 {
    let mut score = 0.0;

    if constraints.prefers(&staff.id, shift.shift_type) {
        score += PREFERENCE_BONUS;
    }

    let projected = state.projected_weekly_hours(&staff.id, shift);
    score += (constraints.max_hours_per_week - projected) / WORKLOAD_DIVISOR;

    let on = shift.start_time.date();
    let held = constraints
        .required_certifications(shift.shift_type)
        .iter()
        .filter(|cert_type| staff.holds(cert_type, on))
        .count();
    score += CERTIFICATION_BONUS * held as f64;

    score
}
