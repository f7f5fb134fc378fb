//! A generated care home week.
//!
//! Three shifts per day (morning, afternoon, night) over seven days, with
//! night shifts requiring `CPR` and `FIRST_AID`. Staff cycle through three
//! certification sets: `staff-00` holds both night certifications,
//! `staff-01` holds `CPR` only and `staff-02` holds `MEDICATION` only.

use carerota_core::{
    OptimizationConstraints, OrganizationId, Shift, ShiftType, Staff, TimeOffRequest,
};

use crate::roster::{nurse, shift};
use crate::time::at;

/// Input snapshot for one facility.
#[derive(Debug, Clone)]
pub struct CareHome {
    pub organization_id: OrganizationId,
    pub staff: Vec<Staff>,
    pub shifts: Vec<Shift>,
    pub time_off: Vec<TimeOffRequest>,
}

impl CareHome {
    /// Builds a week with `staff_count` staff and no pre-existing assignments.
    pub fn week(staff_count: usize) -> Self {
        let staff = (0..staff_count)
            .map(|i| {
                let id = format!("staff-{i:02}");
                match i % 3 {
                    0 => nurse(&id, ["CPR", "FIRST_AID"]),
                    1 => nurse(&id, ["CPR"]),
                    _ => nurse(&id, ["MEDICATION"]),
                }
            })
            .collect();

        let mut shifts = Vec::with_capacity(21);
        for day in 1..=7 {
            shifts.push(shift(&format!("d{day}-am"), ShiftType::Morning, day, 6, 8));
            shifts.push(shift(&format!("d{day}-pm"), ShiftType::Afternoon, day, 14, 8));
            shifts.push(shift(&format!("d{day}-night"), ShiftType::Night, day, 22, 8));
        }

        Self {
            organization_id: OrganizationId::new("sunrise-care"),
            staff,
            shifts,
            time_off: Vec::new(),
        }
    }

    /// Pre-assigns the shift `shift_id` to `staff_id`.
    pub fn with_assignment(mut self, shift_id: &str, staff_id: &str) -> Self {
        if let Some(s) = self.shifts.iter_mut().find(|s| s.id.as_str() == shift_id) {
            s.staff_id = Some(staff_id.into());
        }
        self
    }

    /// Approved time off for `staff_id` over whole days `from..=to`.
    pub fn with_days_off(mut self, staff_id: &str, from: u32, to: u32) -> Self {
        self.time_off
            .push(TimeOffRequest::approved(staff_id, at(from, 0), at(to + 1, 0)));
        self
    }

    /// The constraint bundle used with this facility: 40 hours a week,
    /// 8 hours rest, certified night cover.
    pub fn constraints(&self) -> OptimizationConstraints {
        OptimizationConstraints::new(40.0, 8.0)
            .with_requirement(ShiftType::Night, ["CPR", "FIRST_AID"])
            .with_time_off_requests(self.time_off.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use carerota_core::CertificationType;

    use super::*;
    use crate::time::day;

    #[test]
    fn test_staff_cycle_through_certification_sets() {
        let home = CareHome::week(6);
        let holds = |i: usize, cert: &str| {
            home.staff[i].holds(&CertificationType::new(cert), day(1))
        };

        for i in [0, 3] {
            assert!(holds(i, "CPR") && holds(i, "FIRST_AID"));
        }
        for i in [1, 4] {
            assert!(holds(i, "CPR") && !holds(i, "FIRST_AID"));
        }
        for i in [2, 5] {
            assert!(holds(i, "MEDICATION") && !holds(i, "CPR"));
        }
    }
}
