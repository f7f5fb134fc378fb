//! Staff and shift builders.

use carerota_core::{Shift, ShiftType, Staff};
use chrono::Duration;

use crate::time::at;

/// A staff member named after their id, holding valid `certifications`.
pub fn nurse<'a>(id: &str, certifications: impl IntoIterator<Item = &'a str>) -> Staff {
    Staff::new(id, format!("Nurse {id}")).with_certifications(certifications)
}

/// An unassigned shift starting on January `day` at `start_hour`, lasting `hours`.
pub fn shift(id: &str, shift_type: ShiftType, day: u32, start_hour: u32, hours: u32) -> Shift {
    let start = at(day, start_hour);
    Shift::new(id, shift_type, start, start + Duration::hours(i64::from(hours)))
}

/// Like [`shift`], but lasting `minutes` minutes.
pub fn shift_minutes(id: &str, shift_type: ShiftType, day: u32, start_hour: u32, minutes: u32) -> Shift {
    let start = at(day, start_hour);
    Shift::new(id, shift_type, start, start + Duration::minutes(i64::from(minutes)))
}

/// A staff member without any certification.
pub fn uncertified(id: &str) -> Staff {
    Staff::new(id, format!("Nurse {id}"))
}
