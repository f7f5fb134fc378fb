//! Run statistics.
//!
//! Diagnostic counters collected while assigning shifts. They are not part
//! of the optimization result and carry no determinism guarantee.

use std::time::Duration;

use crate::evaluator::Rejection;

/// Candidates turned away, by the check that failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub certification: u64,
    pub time_off: u64,
    /// Overlaps and rest-period violations.
    pub rest: u64,
    pub weekly_hours: u64,
}

impl RejectionCounts {
    pub fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::MissingCertification(_) => self.certification += 1,
            Rejection::TimeOff => self.time_off += 1,
            Rejection::Overlap(_) | Rejection::InsufficientRest(_) => self.rest += 1,
            Rejection::WeeklyHoursExceeded => self.weekly_hours += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.certification + self.time_off + self.rest + self.weekly_hours
    }
}

/// Counters for one optimization run.
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    /// Wall time of the whole run.
    pub duration: Duration,
    /// Shifts without a staff member when the run started.
    pub open_shifts: usize,
    /// Open shifts the engine looked at before finishing or terminating.
    pub shifts_processed: usize,
    pub assignments_made: usize,
    pub eligibility_checks: u64,
    pub rejected_by: RejectionCounts,
    /// True if a termination condition stopped the engine before the queue was empty.
    pub terminated_early: bool,
}

impl RunStatistics {
    /// Processed shifts for which no candidate was eligible.
    pub fn unfillable_shifts(&self) -> usize {
        self.shifts_processed - self.assignments_made
    }

    /// Open shifts never looked at because the run terminated.
    pub fn skipped_shifts(&self) -> usize {
        self.open_shifts - self.shifts_processed
    }

    /// Eligibility checks per second of run time.
    pub fn checks_per_sec(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.eligibility_checks as f64 / secs) as u64
        } else {
            0
        }
    }
}
