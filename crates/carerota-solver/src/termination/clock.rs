//! Wall-clock limits on a rota run.

use std::time::{Duration, Instant};

use super::Termination;
use crate::scope::RunScope;

/// Stops once the run has used up its time budget.
///
/// The budget is measured from the start of the run, so a rota that is
/// re-run from scratch gets a fresh budget each time.
///
/// ```
/// use carerota_core::{OptimizationConstraints, ShiftType};
/// use carerota_solver::optimize_with;
/// use carerota_solver::termination::TimeTermination;
/// use carerota_test::{shift, uncertified};
///
/// let staff = [uncertified("ada")];
/// let shifts = [shift("mon-am", ShiftType::Morning, 1, 6, 8)];
/// let constraints = OptimizationConstraints::new(40.0, 8.0);
///
/// // A zero budget is spent before the first shift is looked at.
/// let outcome =
///     optimize_with(&staff, &shifts, &constraints, &TimeTermination::millis(0)).unwrap();
/// assert_eq!(outcome.result.metrics.unassigned_shifts, 1);
/// assert!(outcome.statistics.terminated_early);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    budget: Duration,
}

impl TimeTermination {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &RunScope) -> bool {
        scope.elapsed() >= self.budget
    }
}

/// Stops at a fixed instant, however long the run has been going.
///
/// Useful when a request handler has its own deadline and several rota
/// runs must share it.
#[derive(Debug, Clone)]
pub struct DeadlineTermination {
    deadline: Instant,
}

impl DeadlineTermination {
    pub fn new(deadline: Instant) -> Self {
        Self { deadline }
    }

    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self::new(Instant::now() + timeout)
    }
}

impl Termination for DeadlineTermination {
    fn is_terminated(&self, _scope: &RunScope) -> bool {
        Instant::now() >= self.deadline
    }
}
