//! Tests for hard-constraint evaluation.

use carerota_core::{
    Certification, CertificationType, OptimizationConstraints, ShiftType, TimeOffRequest,
    TimeOffStatus, WeekStart,
};
use carerota_test::{at, day, nurse, shift, shift_minutes, uncertified};

use crate::calendar::TimeOffCalendar;
use crate::evaluator::{evaluate, is_eligible, Eligibility, Rejection};
use crate::state::WorkingState;

fn constraints() -> OptimizationConstraints {
    OptimizationConstraints::new(40.0, 8.0)
        .with_requirement(ShiftType::Night, ["CPR", "FIRST_AID"])
}

fn no_time_off() -> TimeOffCalendar {
    TimeOffCalendar::default()
}

#[test]
fn test_certified_staff_eligible() {
    let c = constraints();
    let state = WorkingState::new(c.week_start);
    let night = shift("n", ShiftType::Night, 1, 22, 8);

    let result = evaluate(&nurse("a", ["CPR", "FIRST_AID"]), &night, &state, &c, &no_time_off());
    assert_eq!(result, Eligibility::Eligible);
}

#[test]
fn test_missing_certification_rejected() {
    let c = constraints();
    let state = WorkingState::new(c.week_start);
    let night = shift("n", ShiftType::Night, 1, 22, 8);

    let result = evaluate(&nurse("b", ["CPR"]), &night, &state, &c, &no_time_off());
    assert_eq!(
        result,
        Eligibility::Ineligible(Rejection::MissingCertification(CertificationType::new(
            "FIRST_AID"
        )))
    );
}

#[test]
fn test_invalid_or_expired_certification_rejected() {
    let c = constraints();
    let state = WorkingState::new(c.week_start);
    let night = shift("n", ShiftType::Night, 3, 22, 8);

    let revoked = nurse("a", ["FIRST_AID"]).with_certification(Certification::new("CPR").invalid());
    assert!(!is_eligible(&revoked, &night, &state, &c, &no_time_off()));

    let expired = nurse("b", ["FIRST_AID"])
        .with_certification(Certification::new("CPR").expiring(day(2)));
    assert!(!is_eligible(&expired, &night, &state, &c, &no_time_off()));

    let renewed = nurse("c", ["FIRST_AID"])
        .with_certification(Certification::new("CPR").expiring(day(3)));
    assert!(is_eligible(&renewed, &night, &state, &c, &no_time_off()));
}

#[test]
fn test_no_requirements_means_no_certification_check() {
    let c = constraints();
    let state = WorkingState::new(c.week_start);
    let morning = shift("m", ShiftType::Morning, 1, 6, 8);

    assert!(is_eligible(&uncertified("a"), &morning, &state, &c, &no_time_off()));
}

#[test]
fn test_approved_time_off_rejected() {
    let c = constraints();
    let state = WorkingState::new(c.week_start);
    let morning = shift("m", ShiftType::Morning, 2, 6, 8);
    let requests = [TimeOffRequest::approved("a", at(2, 0), at(3, 0))];
    let calendar = TimeOffCalendar::new(&requests);

    let result = evaluate(&uncertified("a"), &morning, &state, &c, &calendar);
    assert_eq!(result, Eligibility::Ineligible(Rejection::TimeOff));
    assert!(is_eligible(&uncertified("b"), &morning, &state, &c, &calendar));
}

#[test]
fn test_time_off_touching_endpoint_allowed() {
    let c = constraints();
    let state = WorkingState::new(c.week_start);
    let morning = shift("m", ShiftType::Morning, 2, 6, 8);
    let requests = [
        TimeOffRequest::approved("a", at(1, 0), at(2, 6)),
        TimeOffRequest::approved("a", at(2, 14), at(3, 0)),
    ];
    let calendar = TimeOffCalendar::new(&requests);

    assert!(is_eligible(&uncertified("a"), &morning, &state, &c, &calendar));
}

#[test]
fn test_unapproved_time_off_ignored() {
    let c = constraints();
    let state = WorkingState::new(c.week_start);
    let morning = shift("m", ShiftType::Morning, 2, 6, 8);
    let requests = [
        TimeOffRequest::approved("a", at(2, 0), at(3, 0)).with_status(TimeOffStatus::Pending),
        TimeOffRequest::approved("a", at(2, 0), at(3, 0)).with_status(TimeOffStatus::Rejected),
    ];
    let calendar = TimeOffCalendar::new(&requests);

    assert!(calendar.is_empty());
    assert!(is_eligible(&uncertified("a"), &morning, &state, &c, &calendar));
}

#[test]
fn test_overlap_rejected() {
    let c = constraints();
    let mut state = WorkingState::new(c.week_start);
    state.commit(&"a".into(), &shift("long", ShiftType::Morning, 1, 6, 10));
    let afternoon = shift("pm", ShiftType::Afternoon, 1, 14, 8);

    let result = evaluate(&uncertified("a"), &afternoon, &state, &c, &no_time_off());
    assert_eq!(result, Eligibility::Ineligible(Rejection::Overlap("long".into())));
}

#[test]
fn test_rest_period_in_both_directions() {
    let c = constraints();
    let mut state = WorkingState::new(c.week_start);
    state.commit(&"a".into(), &shift("pm", ShiftType::Afternoon, 2, 14, 8));

    // Ends 4h before the booked shift starts.
    let early = shift("am", ShiftType::Morning, 2, 2, 8);
    assert_eq!(
        evaluate(&uncertified("a"), &early, &state, &c, &no_time_off()),
        Eligibility::Ineligible(Rejection::InsufficientRest("pm".into()))
    );

    // Starts 4h after the booked shift ends.
    let late = shift("late", ShiftType::Night, 3, 2, 6);
    assert!(!is_eligible(&uncertified("a"), &late, &state, &c, &no_time_off()));

    // Exactly the minimum rest is fine.
    let next = shift("next", ShiftType::Morning, 3, 6, 8);
    assert!(is_eligible(&uncertified("a"), &next, &state, &c, &no_time_off()));
}

#[test]
fn test_back_to_back_rejected_without_rest_minimum() {
    let c = OptimizationConstraints::new(40.0, 0.0);
    let mut state = WorkingState::new(c.week_start);
    state.commit(&"a".into(), &shift("am", ShiftType::Morning, 1, 6, 8));
    let afternoon = shift("pm", ShiftType::Afternoon, 1, 14, 8);

    assert_eq!(
        evaluate(&uncertified("a"), &afternoon, &state, &c, &no_time_off()),
        Eligibility::Ineligible(Rejection::InsufficientRest("am".into()))
    );
}

#[test]
fn test_weekly_hours_cap() {
    let c = constraints();
    let mut state = WorkingState::new(c.week_start);
    for d in 1..=4 {
        state.commit(&"a".into(), &shift(&format!("s{d}"), ShiftType::Morning, d, 6, 8));
    }

    // 32 booked + 8 = 40, exactly at the cap.
    let fifth = shift("s5", ShiftType::Morning, 5, 6, 8);
    assert!(is_eligible(&uncertified("a"), &fifth, &state, &c, &no_time_off()));

    state.commit(&"a".into(), &fifth);
    let sixth = shift("s6", ShiftType::Morning, 6, 6, 8);
    assert_eq!(
        evaluate(&uncertified("a"), &sixth, &state, &c, &no_time_off()),
        Eligibility::Ineligible(Rejection::WeeklyHoursExceeded)
    );

    // Monday the 8th opens a new ISO week.
    let next_week = shift("s8", ShiftType::Morning, 8, 6, 8);
    assert!(is_eligible(&uncertified("a"), &next_week, &state, &c, &no_time_off()));
}

#[test]
fn test_fractional_shifts_fill_cap_exactly() {
    // Three 7h24m shifts total 22.2h, which f64 addition would overshoot.
    let c = OptimizationConstraints::new(22.2, 8.0);
    let mut state = WorkingState::new(c.week_start);
    state.commit(&"a".into(), &shift_minutes("s1", ShiftType::Morning, 1, 6, 444));
    state.commit(&"a".into(), &shift_minutes("s2", ShiftType::Morning, 2, 6, 444));

    let third = shift_minutes("s3", ShiftType::Morning, 3, 6, 444);
    assert_eq!(
        evaluate(&uncertified("a"), &third, &state, &c, &no_time_off()),
        Eligibility::Eligible
    );

    state.commit(&"a".into(), &third);
    assert_eq!(state.weekly_seconds(&"a".into(), day(1)), c.max_seconds_per_week());

    let extra = shift_minutes("s4", ShiftType::Morning, 4, 6, 1);
    assert_eq!(
        evaluate(&uncertified("a"), &extra, &state, &c, &no_time_off()),
        Eligibility::Ineligible(Rejection::WeeklyHoursExceeded)
    );
}

#[test]
fn test_weekly_hours_follow_week_start() {
    let c = OptimizationConstraints::new(16.0, 8.0).with_week_start(WeekStart::Sunday);
    let mut state = WorkingState::new(c.week_start);
    // Saturday 6th and Sunday 7th fall in different Sunday-start weeks.
    state.commit(&"a".into(), &shift("sat", ShiftType::Morning, 6, 6, 16));
    let sunday = shift("sun", ShiftType::Morning, 7, 6, 8);

    assert!(is_eligible(&uncertified("a"), &sunday, &state, &c, &no_time_off()));

    let monday_rule = OptimizationConstraints::new(16.0, 8.0);
    let mut monday_state = WorkingState::new(monday_rule.week_start);
    monday_state.commit(&"a".into(), &shift("sat", ShiftType::Morning, 6, 6, 16));
    assert!(!is_eligible(&uncertified("a"), &sunday, &monday_state, &monday_rule, &no_time_off()));
}

#[test]
fn test_certification_checked_first() {
    let c = constraints();
    let night = shift("n", ShiftType::Night, 2, 22, 8);
    let requests = [TimeOffRequest::approved("a", at(2, 0), at(4, 0))];

    let result = evaluate(
        &uncertified("a"),
        &night,
        &WorkingState::new(c.week_start),
        &c,
        &TimeOffCalendar::new(&requests),
    );
    assert!(matches!(
        result.rejection(),
        Some(Rejection::MissingCertification(_))
    ));
}
