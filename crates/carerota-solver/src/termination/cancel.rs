//! Cancelling a rota run from outside.

use std::sync::atomic::{AtomicBool, Ordering};

use super::Termination;
use crate::scope::RunScope;

/// Stops when a shared flag is raised, for example when a manager abandons
/// the run from another thread.
///
/// Shifts filled before the flag was seen keep their assignments.
///
/// ```
/// use std::sync::atomic::AtomicBool;
///
/// use carerota_core::{OptimizationConstraints, ShiftType};
/// use carerota_solver::optimize_with;
/// use carerota_solver::termination::ExternalTermination;
/// use carerota_test::{shift, uncertified};
///
/// let staff = [uncertified("ada")];
/// let shifts = [
///     shift("mon-am", ShiftType::Morning, 1, 6, 8),
///     shift("tue-am", ShiftType::Morning, 2, 6, 8),
/// ];
/// let constraints = OptimizationConstraints::new(40.0, 8.0);
///
/// let cancelled = AtomicBool::new(true);
/// let outcome =
///     optimize_with(&staff, &shifts, &constraints, &ExternalTermination::new(&cancelled))
///         .unwrap();
/// assert!(outcome.assignments.is_empty());
/// assert_eq!(outcome.result.metrics.unassigned_shifts, 2);
/// ```
#[derive(Debug)]
pub struct ExternalTermination<'a> {
    cancelled: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    pub fn new(cancelled: &'a AtomicBool) -> Self {
        Self { cancelled }
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self, _scope: &RunScope) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
