//! Hard-constraint evaluation for a single `(staff, shift)` candidate.
//!
//! Checks run cheapest first and stop at the first failure:
//! 1. certifications required for the shift type
//! 2. approved time off
//! 3. rest period and overlap against already booked shifts
//! 4. the weekly hours cap

use std::fmt;

use carerota_core::{CertificationType, OptimizationConstraints, Shift, ShiftId, Staff};

use crate::calendar::TimeOffCalendar;
use crate::state::WorkingState;

/// Why a candidate may not take a shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A required certification is missing, revoked or expired.
    MissingCertification(CertificationType),
    /// Approved time off intersects the shift.
    TimeOff,
    /// The shift intersects an already booked shift.
    Overlap(ShiftId),
    /// The gap to an already booked shift is shorter than the minimum rest.
    InsufficientRest(ShiftId),
    /// Taking the shift would exceed the weekly hours cap.
    WeeklyHoursExceeded,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingCertification(cert) => write!(f, "missing certification {cert}"),
            Rejection::TimeOff => f.write_str("approved time off"),
            Rejection::Overlap(other) => write!(f, "overlaps shift {other}"),
            Rejection::InsufficientRest(other) => write!(f, "too little rest around shift {other}"),
            Rejection::WeeklyHoursExceeded => f.write_str("weekly hours cap"),
        }
    }
}

/// Outcome of evaluating a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(Rejection),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Ineligible(rejection) => Some(rejection),
        }
    }
}

/// Evaluates every hard constraint for `staff` taking `shift`.
///
/// `state` must hold the bookings committed so far in the run. A booked
/// shift with the same id as `shift` is ignored.
pub fn evaluate(
    staff: &Staff,
    shift: &Shift,
    state: &WorkingState,
    constraints: &OptimizationConstraints,
    time_off: &TimeOffCalendar,
) -> Eligibility {
    let on = shift.start_time.date();
    for required in constraints.required_certifications(shift.shift_type) {
        if !staff.holds(required, on) {
            return Eligibility::Ineligible(Rejection::MissingCertification(required.clone()));
        }
    }

    if time_off.is_away(&staff.id, shift) {
        return Eligibility::Ineligible(Rejection::TimeOff);
    }

    for booked in state.booked_shifts(&staff.id) {
        if booked.id == shift.id {
            continue;
        }
        let gap = booked.gap_seconds(shift);
        if gap < 0 {
            return Eligibility::Ineligible(Rejection::Overlap(booked.id.clone()));
        }
        // Back-to-back shifts are never given to the same person.
        if gap == 0 || gap < constraints.min_rest_seconds() {
            return Eligibility::Ineligible(Rejection::InsufficientRest(booked.id.clone()));
        }
    }

    if state.projected_weekly_seconds(&staff.id, shift) > constraints.max_seconds_per_week() {
        return Eligibility::Ineligible(Rejection::WeeklyHoursExceeded);
    }

    Eligibility::Eligible
}

/// Returns true if `staff` passes every hard constraint for `shift`.
pub fn is_eligible(
    staff: &Staff,
    shift: &Shift,
    state: &WorkingState,
    constraints: &OptimizationConstraints,
    time_off: &TimeOffCalendar,
) -> bool {
    evaluate(staff, shift, state, constraints, time_off).is_eligible()
}
