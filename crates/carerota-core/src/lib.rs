//! carerota Core - value types for staff shift optimization
//!
//! This crate provides the plain data the optimizer works on:
//! - Identity newtypes for staff, shifts, organizations and certifications
//! - Domain snapshots (staff roster, shifts, time off) loaded once per run
//! - The constraint bundle and the canonical week-window rule
//! - Result types (conflicts, metrics, assignments)
//! - Repository traits for the collaborators that load and persist data

pub mod domain;
pub mod error;
pub mod id;
pub mod repository;
pub mod result;

pub use domain::{
    Certification, DateRange, OptimizationConstraints, Shift, ShiftType, Staff, TimeOffRequest,
    TimeOffStatus, WeekStart,
};
pub use error::{CarerotaError, RepositoryError, Result};
pub use id::{CertificationType, OrganizationId, ShiftId, StaffId};
pub use repository::{ShiftStore, StaffDirectory, TimeOffStore};
pub use result::{
    Assignment, Conflict, ConflictKind, OptimizationResult, ScheduleMetrics, Severity,
};
