//! carerota Solver - greedy staff shift optimizer
//!
//! This crate provides the optimization pipeline:
//! - Constraint evaluation and candidate scoring
//! - The assignment engine with per-run working state
//! - Conflict detection, schedule metrics and the overall score
//! - Termination conditions and run statistics
//! - The scheduling service over injected repositories
//! - Parallel batch runs

pub mod batch;
pub mod calendar;
pub mod conflicts;
pub mod engine;
pub mod evaluator;
pub mod metrics;
pub mod optimizer;
pub mod scope;
pub mod score;
pub mod scorer;
pub mod service;
pub mod state;
pub mod statistics;
pub mod termination;

#[cfg(test)]
mod evaluator_tests;
#[cfg(test)]
mod metrics_tests;

pub use batch::{solve_batch, OptimizationRequest};
pub use calendar::{Absence, TimeOffCalendar};
pub use conflicts::detect_conflicts;
pub use engine::AssignmentEngine;
pub use evaluator::{evaluate, is_eligible, Eligibility, Rejection};
pub use metrics::calculate_metrics;
pub use optimizer::{assess_schedule, optimize, optimize_with, validate_input, SolveOutcome};
pub use scope::RunScope;
pub use score::{calculate_score, severity_penalty};
pub use scorer::score_candidate;
pub use service::{OptimizationRun, SchedulingService};
pub use state::{StaffLedger, WorkingState};
pub use statistics::{RejectionCounts, RunStatistics};
pub use termination::{
    AssignmentLimitTermination, DeadlineTermination, ExternalTermination, NoTermination,
    OrTermination, Termination, TimeTermination,
};
