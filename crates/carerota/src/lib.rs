//! carerota - staff shift optimization for care facilities
//!
//! Fills open shifts with eligible staff, then reports conflicts, metrics
//! and an overall score for the whole schedule.
//!
//! # Example
//!
//! ```rust
//! use carerota::prelude::*;
//!
//! let constraints = OptimizationConstraints::new(40.0, 8.0)
//!     .with_requirement(ShiftType::Night, ["CPR", "FIRST_AID"]);
//! let result = optimize(&[], &[], &constraints).unwrap();
//! assert_eq!(result.score, 100.0);
//! ```

// Domain and result types
pub use carerota_core::{
    Assignment, CarerotaError, Certification, CertificationType, Conflict, ConflictKind,
    DateRange, OptimizationConstraints, OptimizationResult, OrganizationId, RepositoryError,
    Result, ScheduleMetrics, Severity, Shift, ShiftId, ShiftType, Staff, StaffId,
    TimeOffRequest, TimeOffStatus, WeekStart,
};

// Collaborator seams
pub use carerota_core::{ShiftStore, StaffDirectory, TimeOffStore};

// Configuration
pub use carerota_config::{ConfigError, OptimizerConfig};

// Optimization
pub use carerota_solver::{
    assess_schedule, optimize, optimize_with, solve_batch, OptimizationRequest,
    OptimizationRun, RunStatistics, SchedulingService, SolveOutcome,
};

pub use carerota_solver::termination;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        Certification, Conflict, ConflictKind, OptimizationConstraints, OptimizationResult,
        ScheduleMetrics, Severity, Shift, ShiftType, Staff, TimeOffRequest, WeekStart,
    };
    pub use super::{optimize, optimize_with, OptimizerConfig, SchedulingService};
    pub use super::termination::{
        ExternalTermination, NoTermination, OrTermination, Termination, TimeTermination,
    };
}
