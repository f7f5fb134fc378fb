//! Independent runs on the rayon pool.

use std::time::Duration;

use carerota_core::{OptimizationConstraints, Result, Shift, Staff};
use rayon::prelude::*;

use crate::optimizer::{optimize_with, SolveOutcome};
use crate::termination::TimeTermination;

/// Input of one run in a batch.
#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    pub staff: Vec<Staff>,
    pub shifts: Vec<Shift>,
    pub constraints: OptimizationConstraints,
    /// Per-run time limit, measured from the start of that run.
    pub time_limit: Option<Duration>,
}

impl OptimizationRequest {
    pub fn new(staff: Vec<Staff>, shifts: Vec<Shift>, constraints: OptimizationConstraints) -> Self {
        Self {
            staff,
            shifts,
            constraints,
            time_limit: None,
        }
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    fn solve(&self) -> Result<SolveOutcome> {
        let termination = self.time_limit.map(TimeTermination::new);
        optimize_with(&self.staff, &self.shifts, &self.constraints, &termination)
    }
}

/// Solves every request in parallel.
///
/// Results are returned in request order. Runs share no state, so each
/// result equals what a sequential run of the same request returns.
pub fn solve_batch(requests: &[OptimizationRequest]) -> Vec<Result<SolveOutcome>> {
    requests.par_iter().map(OptimizationRequest::solve).collect()
}
