//! Tests for domain value objects.

use chrono::{NaiveDate, NaiveDateTime};

use super::*;
use crate::error::CarerotaError;
use crate::id::CertificationType;

// 2024-01-01 is a Monday.
fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn test_certification_validity() {
    let cpr = Certification::new("CPR");
    assert!(cpr.is_valid_on(date(10)));
    assert!(!cpr.clone().invalid().is_valid_on(date(10)));

    let expiring = cpr.expiring(date(10));
    assert!(expiring.is_valid_on(date(10)));
    assert!(!expiring.is_valid_on(date(11)));
}

#[test]
fn test_staff_holds() {
    let staff = Staff::new("a", "Ada")
        .with_certifications(["CPR"])
        .with_certification(Certification::new("FIRST_AID").invalid());

    assert!(staff.holds(&CertificationType::new("CPR"), date(3)));
    assert!(!staff.holds(&CertificationType::new("FIRST_AID"), date(3)));
    assert!(!staff.holds_all(
        &[CertificationType::new("CPR"), CertificationType::new("FIRST_AID")],
        date(3)
    ));
    assert!(staff.holds_all(&[], date(3)));
}

#[test]
fn test_shift_duration_and_overlap() {
    let morning = Shift::new("m", ShiftType::Morning, at(1, 6), at(1, 14));
    let afternoon = Shift::new("a", ShiftType::Afternoon, at(1, 14), at(1, 22));
    let long = Shift::new("l", ShiftType::Morning, at(1, 10), at(1, 18));

    assert_eq!(morning.duration_hours(), 8.0);
    assert!(!morning.overlaps(&afternoon), "touching shifts do not overlap");
    assert!(morning.overlaps(&long));
    assert!(long.overlaps(&afternoon));
}

#[test]
fn test_shift_gap_either_order() {
    let first = Shift::new("1", ShiftType::Morning, at(1, 6), at(1, 14));
    let second = Shift::new("2", ShiftType::Night, at(1, 22), at(2, 6));
    let nested = Shift::new("3", ShiftType::Morning, at(1, 8), at(1, 10));

    assert_eq!(first.gap_hours(&second), 8.0);
    assert_eq!(second.gap_hours(&first), 8.0);
    assert!(first.gap_hours(&nested) < 0.0);
    assert!(nested.gap_hours(&first) < 0.0);
}

#[test]
fn test_shift_type_parse() {
    assert_eq!("NIGHT".parse::<ShiftType>(), Ok(ShiftType::Night));
    assert_eq!("morning".parse::<ShiftType>(), Ok(ShiftType::Morning));
    assert_eq!("on-call".parse::<ShiftType>(), Ok(ShiftType::OnCall));
    assert!("LUNCH".parse::<ShiftType>().is_err());
    assert_eq!(ShiftType::OnCall.to_string(), "ON_CALL");
}

#[test]
fn test_time_off_half_open() {
    let request = TimeOffRequest::approved("a", at(2, 0), at(3, 0));
    assert!(request.is_approved());
    assert!(request.intersects(at(2, 6), at(2, 14)));
    assert!(!request.intersects(at(1, 16), at(2, 0)));
    assert!(!request.intersects(at(3, 0), at(3, 8)));

    let pending = request.with_status(TimeOffStatus::Pending);
    assert!(!pending.is_approved());
}

#[test]
fn test_week_start_monday() {
    // Wednesday 2024-01-03 and Sunday 2024-01-07 share the ISO week.
    assert_eq!(WeekStart::Monday.week_of(at(3, 12)), date(1));
    assert_eq!(WeekStart::Monday.week_of(at(7, 23)), date(1));
    assert_eq!(WeekStart::Monday.week_of(at(8, 0)), date(8));
}

#[test]
fn test_week_start_sunday() {
    assert_eq!(WeekStart::Sunday.week_of(at(7, 0)), date(7));
    assert_eq!(WeekStart::Sunday.week_of(at(6, 23)), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert_eq!(WeekStart::Sunday.week_of(at(13, 9)), date(7));
}

#[test]
fn test_constraints_lookup() {
    let constraints = OptimizationConstraints::new(40.0, 8.0)
        .with_requirement(ShiftType::Night, ["CPR", "FIRST_AID", "CPR"])
        .with_preferred_shifts("a", [ShiftType::Night]);

    assert_eq!(
        constraints.required_certifications(ShiftType::Night),
        &[CertificationType::new("CPR"), CertificationType::new("FIRST_AID")]
    );
    assert!(constraints.required_certifications(ShiftType::Evening).is_empty());
    assert!(constraints.prefers(&"a".into(), ShiftType::Night));
    assert!(!constraints.prefers(&"a".into(), ShiftType::Morning));
    assert!(!constraints.prefers(&"b".into(), ShiftType::Night));
}

#[test]
fn test_fractional_hours_in_whole_seconds() {
    let shift = Shift::new(
        "s",
        ShiftType::Morning,
        at(1, 6),
        at(1, 6) + chrono::Duration::minutes(444),
    );
    assert_eq!(shift.duration_seconds(), 26_640);

    let constraints = OptimizationConstraints::new(22.2, 7.4);
    assert_eq!(constraints.max_seconds_per_week(), 3 * shift.duration_seconds());
    assert_eq!(constraints.min_rest_seconds(), shift.duration_seconds());
}

#[test]
fn test_constraints_validation() {
    assert!(OptimizationConstraints::new(40.0, 0.0).validate().is_ok());

    for (max_hours, min_rest) in [(0.0, 8.0), (-1.0, 8.0), (f64::NAN, 8.0), (40.0, -0.5)] {
        let err = OptimizationConstraints::new(max_hours, min_rest)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CarerotaError::InvalidConstraints(_)));
    }

    let backwards = OptimizationConstraints::new(40.0, 8.0)
        .with_time_off(TimeOffRequest::approved("a", at(3, 0), at(2, 0)));
    assert!(backwards.validate().is_err());
}

#[test]
fn test_date_range() {
    let range = DateRange::new(at(1, 0), at(8, 0));
    assert!(range.intersects(at(7, 22), at(8, 6)));
    assert!(!range.intersects(at(8, 0), at(8, 8)));
    assert!(!range.is_empty());
    assert!(DateRange::new(at(2, 0), at(2, 0)).is_empty());
}
