//! Aggregate schedule metrics.

use std::collections::HashMap;

use carerota_core::{OptimizationConstraints, ScheduleMetrics, Shift, Staff, StaffId};

use crate::state::WorkingState;

/// Computes utilization, overtime, unassigned count and certification
/// compliance over the whole of `schedule`.
///
/// An empty schedule is fully utilized. A requirement-bearing shift counts
/// as compliant only if it is assigned to a known staff member holding every
/// required certification on the shift's start date; unassigned ones count
/// against compliance.
pub fn calculate_metrics(
    schedule: &[Shift],
    staff: &[Staff],
    constraints: &OptimizationConstraints,
) -> ScheduleMetrics {
    let total = schedule.len();
    let unassigned_shifts = schedule.iter().filter(|s| !s.is_assigned()).count();
    let utilization_rate = percentage(total - unassigned_shifts, total);

    let state = WorkingState::seed(schedule, constraints.week_start);
    let cap = constraints.max_seconds_per_week();
    let overtime_seconds: i64 = state
        .ledgers()
        .flat_map(|(_, ledger)| ledger.weeks())
        .map(|(_, seconds)| (seconds - cap).max(0))
        .sum();
    let overtime_hours = overtime_seconds as f64 / 3600.0;

    let directory: HashMap<&StaffId, &Staff> = staff.iter().map(|s| (&s.id, s)).collect();
    let mut with_requirements = 0;
    let mut compliant = 0;
    for shift in schedule {
        let required = constraints.required_certifications(shift.shift_type);
        if required.is_empty() {
            continue;
        }
        with_requirements += 1;

        let holder = shift
            .staff_id
            .as_ref()
            .and_then(|id| directory.get(id));
        if holder.is_some_and(|s| s.holds_all(required, shift.start_time.date())) {
            compliant += 1;
        }
    }
    let certification_compliance = percentage(compliant, with_requirements);

    ScheduleMetrics {
        utilization_rate,
        overtime_hours,
        unassigned_shifts,
        certification_compliance,
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        100.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
