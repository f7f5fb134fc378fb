//! Overall schedule score.

use carerota_core::{Conflict, ScheduleMetrics, Severity};

/// Score of a schedule with nothing to penalize.
pub const BASE_SCORE: f64 = 100.0;

pub const UNASSIGNED_PENALTY: f64 = 5.0;
pub const OVERTIME_PENALTY_PER_HOUR: f64 = 2.0;

/// Utilization percentage at which the utilization term is neutral.
pub const UTILIZATION_TARGET: f64 = 80.0;

/// Compliance percentage at which the compliance term is neutral.
pub const COMPLIANCE_TARGET: f64 = 90.0;

/// Points deducted for one conflict of the given severity.
pub fn severity_penalty(severity: Severity) -> f64 {
    match severity {
        Severity::High => 10.0,
        Severity::Medium => 5.0,
        Severity::Low => 2.0,
    }
}

/// Combines metrics and conflicts into a single score in `[0, 100]`.
pub fn calculate_score(metrics: &ScheduleMetrics, conflicts: &[Conflict]) -> f64 {
    let conflict_penalty: f64 = conflicts.iter().map(|c| severity_penalty(c.severity)).sum();

    let score = BASE_SCORE
        - UNASSIGNED_PENALTY * metrics.unassigned_shifts as f64
        - OVERTIME_PENALTY_PER_HOUR * metrics.overtime_hours
        + (metrics.utilization_rate - UTILIZATION_TARGET) / 2.0
        + (metrics.certification_compliance - COMPLIANCE_TARGET) / 2.0
        - conflict_penalty;

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carerota_core::ConflictKind;

    fn metrics(utilization: f64, overtime: f64, unassigned: usize, compliance: f64) -> ScheduleMetrics {
        ScheduleMetrics {
            utilization_rate: utilization,
            overtime_hours: overtime,
            unassigned_shifts: unassigned,
            certification_compliance: compliance,
        }
    }

    fn conflict(kind: ConflictKind) -> Conflict {
        Conflict::new(kind, "a".into(), vec!["s1".into()], "test")
    }

    #[test]
    fn test_perfect_schedule_clamps_to_100() {
        // 100 + 10 + 5 before clamping
        assert_eq!(calculate_score(&metrics(100.0, 0.0, 0, 100.0), &[]), 100.0);
    }

    #[test]
    fn test_penalties_combine() {
        // 100 - 5 - 4 + (70 - 80) / 2 + (100 - 90) / 2 - 10 - 5
        let conflicts = [
            conflict(ConflictKind::Overlap),
            conflict(ConflictKind::InsufficientRest),
        ];
        let score = calculate_score(&metrics(70.0, 2.0, 1, 100.0), &conflicts);
        assert_eq!(score, 76.0);
    }

    #[test]
    fn test_floor_is_zero() {
        let score = calculate_score(&metrics(0.0, 100.0, 40, 0.0), &[]);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_severity_penalties() {
        assert_eq!(severity_penalty(Severity::High), 10.0);
        assert_eq!(severity_penalty(Severity::Medium), 5.0);
        assert_eq!(severity_penalty(Severity::Low), 2.0);
    }
}
