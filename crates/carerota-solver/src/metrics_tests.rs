//! Tests for schedule metrics.

use carerota_core::{Certification, OptimizationConstraints, ShiftType, WeekStart};
use carerota_test::{day, nurse, shift, shift_minutes, uncertified};

use crate::metrics::calculate_metrics;

fn constraints() -> OptimizationConstraints {
    OptimizationConstraints::new(40.0, 8.0)
        .with_requirement(ShiftType::Night, ["CPR", "FIRST_AID"])
}

#[test]
fn test_utilization_seven_of_ten() {
    let mut schedule = Vec::new();
    for d in 1..=10 {
        let s = shift(&format!("s{d}"), ShiftType::Morning, d, 6, 8);
        schedule.push(if d <= 7 { s.assigned_to(format!("staff-{d}")) } else { s });
    }

    let metrics = calculate_metrics(&schedule, &[], &constraints());
    assert_eq!(metrics.unassigned_shifts, 3);
    assert_eq!(metrics.utilization_rate, 70.0);
}

#[test]
fn test_empty_schedule_is_fully_utilized_and_compliant() {
    let metrics = calculate_metrics(&[], &[], &constraints());
    assert_eq!(metrics.utilization_rate, 100.0);
    assert_eq!(metrics.certification_compliance, 100.0);
    assert_eq!(metrics.overtime_hours, 0.0);
}

#[test]
fn test_overtime_forty_five_hours() {
    // Five 9-hour shifts, Monday to Friday of one week.
    let schedule: Vec<_> = (1..=5)
        .map(|d| shift(&format!("s{d}"), ShiftType::Morning, d, 6, 9).assigned_to("a"))
        .collect();

    let metrics = calculate_metrics(&schedule, &[uncertified("a")], &constraints());
    assert_eq!(metrics.overtime_hours, 5.0);
}

#[test]
fn test_fractional_shifts_at_cap_have_no_overtime() {
    let capped = OptimizationConstraints::new(22.2, 8.0);
    let mut schedule: Vec<_> = (1..=3)
        .map(|d| shift_minutes(&format!("s{d}"), ShiftType::Morning, d, 6, 444).assigned_to("a"))
        .collect();

    let metrics = calculate_metrics(&schedule, &[uncertified("a")], &capped);
    assert_eq!(metrics.overtime_hours, 0.0);

    // Another 36 minutes in the same week is 0.6h over.
    schedule.push(shift_minutes("s4", ShiftType::Morning, 4, 6, 36).assigned_to("a"));
    let metrics = calculate_metrics(&schedule, &[uncertified("a")], &capped);
    assert_eq!(metrics.overtime_hours, 0.6);
}

#[test]
fn test_overtime_summed_per_week_and_staff() {
    // 48h in the first week, 8h in the second for a; 44h for b.
    let mut schedule: Vec<_> = (1..=6)
        .map(|d| shift(&format!("a{d}"), ShiftType::Morning, d, 6, 8).assigned_to("a"))
        .collect();
    schedule.push(shift("a8", ShiftType::Morning, 8, 6, 8).assigned_to("a"));
    schedule.extend(
        (1..=4).map(|d| shift(&format!("b{d}"), ShiftType::Night, d, 20, 11).assigned_to("b")),
    );

    let metrics = calculate_metrics(&schedule, &[], &constraints());
    assert_eq!(metrics.overtime_hours, 12.0);
}

#[test]
fn test_week_start_changes_overtime_window() {
    // Sunday 7th to Thursday 11th, 9 hours each.
    let schedule: Vec<_> = (7..=11)
        .map(|d| shift(&format!("s{d}"), ShiftType::Morning, d, 6, 9).assigned_to("a"))
        .collect();

    let monday = calculate_metrics(&schedule, &[], &constraints());
    assert_eq!(monday.overtime_hours, 0.0);

    let sunday = constraints().with_week_start(WeekStart::Sunday);
    assert_eq!(calculate_metrics(&schedule, &[], &sunday).overtime_hours, 5.0);
}

#[test]
fn test_compliance_counts_only_requirement_bearing_shifts() {
    let staff = vec![nurse("a", ["CPR", "FIRST_AID"]), nurse("b", ["CPR"])];
    let schedule = vec![
        shift("n1", ShiftType::Night, 1, 22, 8).assigned_to("a"),
        shift("n2", ShiftType::Night, 2, 22, 8).assigned_to("b"),
        shift("n3", ShiftType::Night, 3, 22, 8),
        shift("n4", ShiftType::Night, 4, 22, 8).assigned_to("a"),
        shift("am", ShiftType::Morning, 1, 6, 8).assigned_to("b"),
    ];

    let metrics = calculate_metrics(&schedule, &staff, &constraints());
    assert_eq!(metrics.certification_compliance, 50.0);
}

#[test]
fn test_compliance_without_requirements_is_full() {
    let schedule = vec![shift("am", ShiftType::Morning, 1, 6, 8)];
    let metrics = calculate_metrics(&schedule, &[], &constraints());
    assert_eq!(metrics.certification_compliance, 100.0);
}

#[test]
fn test_compliance_uses_certification_validity_on_shift_date() {
    let staff = vec![nurse("a", ["FIRST_AID"])
        .with_certification(Certification::new("CPR").expiring(day(2)))];
    let schedule = vec![
        shift("n1", ShiftType::Night, 1, 22, 8).assigned_to("a"),
        shift("n3", ShiftType::Night, 3, 22, 8).assigned_to("a"),
    ];

    let metrics = calculate_metrics(&schedule, &staff, &constraints());
    assert_eq!(metrics.certification_compliance, 50.0);
}

#[test]
fn test_unknown_assignee_is_not_compliant() {
    let schedule = vec![shift("n1", ShiftType::Night, 1, 22, 8).assigned_to("ghost")];
    let metrics = calculate_metrics(&schedule, &[], &constraints());
    assert_eq!(metrics.certification_compliance, 0.0);
}
