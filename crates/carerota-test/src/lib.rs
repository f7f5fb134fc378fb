//! Shared test fixtures for carerota crates.
//!
//! This crate provides data builders and in-memory collaborators. It depends
//! only on `carerota-core` so that `carerota-solver` can use it from its own
//! unit tests without a dependency cycle.
//!
//! - [`time`] - fixed calendar helpers anchored on Monday 2024-01-01
//! - [`roster`] - staff and shift builders
//! - [`memory`] - in-memory staff directory, shift store and time-off store
//! - [`care_home`] - a generated week of shifts for a small facility
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! carerota-test = { workspace = true }
//! ```
//!
//! ```
//! use carerota_test::roster::{nurse, shift};
//! use carerota_core::ShiftType;
//!
//! let ada = nurse("ada", ["CPR"]);
//! let night = shift("n1", ShiftType::Night, 1, 22, 8);
//! assert_eq!(night.duration_hours(), 8.0);
//! assert_eq!(ada.certifications.len(), 1);
//! ```

pub mod care_home;
pub mod memory;
pub mod roster;
pub mod time;

pub use memory::{InMemoryShiftStore, InMemoryStaffDirectory, InMemoryTimeOffStore};
pub use roster::{nurse, shift, shift_minutes, uncertified};
pub use time::{at, day};
