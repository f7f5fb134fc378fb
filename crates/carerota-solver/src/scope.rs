//! Run-level scope.

use std::time::{Duration, Instant};

use crate::statistics::RunStatistics;

/// Mutable context of one optimization run.
///
/// Terminations read it; the engine records statistics into it.
#[derive(Debug)]
pub struct RunScope {
    started: Instant,
    statistics: RunStatistics,
}

impl RunScope {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            statistics: RunStatistics::default(),
        }
    }

    /// Time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut RunStatistics {
        &mut self.statistics
    }

    /// Closes the scope and returns the statistics with the final duration.
    pub fn finish(mut self) -> RunStatistics {
        self.statistics.duration = self.started.elapsed();
        self.statistics
    }
}

impl Default for RunScope {
    fn default() -> Self {
        Self::new()
    }
}
