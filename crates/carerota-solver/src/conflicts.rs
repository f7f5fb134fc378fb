//! Conflict sweep over a final schedule.
//!
//! Re-checks overlap, rest and time-off rules for every assigned shift,
//! whether it was assigned by this run or already in place. Pairs of shifts
//! that overlap are reported once, as an overlap. A shift that runs into
//! several approved absences is reported once for time off.

use std::collections::BTreeMap;

use carerota_core::{Conflict, ConflictKind, OptimizationConstraints, Shift, StaffId};

use crate::calendar::TimeOffCalendar;

/// Finds every hard-constraint violation in `schedule`.
///
/// Conflicts are ordered by staff id, then by the start of the earlier
/// shift involved.
pub fn detect_conflicts(
    schedule: &[Shift],
    constraints: &OptimizationConstraints,
    time_off: &TimeOffCalendar,
) -> Vec<Conflict> {
    let mut by_staff: BTreeMap<&StaffId, Vec<&Shift>> = BTreeMap::new();
    for shift in schedule {
        if let Some(staff_id) = &shift.staff_id {
            by_staff.entry(staff_id).or_default().push(shift);
        }
    }

    let min_rest = constraints.min_rest_between_shifts;
    let min_rest_seconds = constraints.min_rest_seconds();
    let mut conflicts = Vec::new();

    for (staff_id, mut shifts) in by_staff {
        shifts.sort_by_key(|s| (s.start_time, s.end_time, &s.id));

        for (i, earlier) in shifts.iter().enumerate() {
            for later in &shifts[i + 1..] {
                let gap = earlier.gap_seconds(later);
                if earlier.overlaps(later) {
                    conflicts.push(Conflict::new(
                        ConflictKind::Overlap,
                        staff_id.clone(),
                        vec![earlier.id.clone(), later.id.clone()],
                        format!(
                            "{staff_id} is booked on overlapping shifts {} and {}",
                            earlier.id, later.id
                        ),
                    ));
                } else if gap < min_rest_seconds {
                    let gap = earlier.gap_hours(later);
                    conflicts.push(Conflict::new(
                        ConflictKind::InsufficientRest,
                        staff_id.clone(),
                        vec![earlier.id.clone(), later.id.clone()],
                        format!(
                            "{staff_id} has {gap:.1}h rest between shifts {} and {} (minimum {min_rest}h)",
                            earlier.id, later.id
                        ),
                    ));
                } else if later.start_time >= earlier.end_time {
                    // Later shifts start no earlier, so their gap only grows.
                    break;
                }
            }

            let mut absences = time_off.absences_during(staff_id, earlier);
            if let Some(first) = absences.next() {
                let (start, end) = absences.fold((first.start, first.end), |(start, end), a| {
                    (start.min(a.start), end.max(a.end))
                });
                conflicts.push(Conflict::new(
                    ConflictKind::TimeOff,
                    staff_id.clone(),
                    vec![earlier.id.clone()],
                    format!(
                        "{staff_id} is assigned shift {} during approved time off {start} to {end}",
                        earlier.id
                    ),
                ));
            }
        }
    }

    conflicts
}
