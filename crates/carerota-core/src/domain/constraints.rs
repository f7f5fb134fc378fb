//! The constraint bundle supplied by the caller for a run.

use std::collections::{BTreeMap, BTreeSet};

use super::{hours_to_seconds, ShiftType, TimeOffRequest, WeekStart};
use crate::error::{CarerotaError, Result};
use crate::id::{CertificationType, StaffId};

/// Hard and soft rules for a single optimization run.
///
/// There are no implicit defaults for the numeric limits; the caller must
/// state both. Everything else starts empty.
///
/// # Examples
///
/// ```
/// use carerota_core::{OptimizationConstraints, ShiftType};
///
/// let constraints = OptimizationConstraints::new(40.0, 8.0)
///     .with_requirement(ShiftType::Night, ["CPR", "FIRST_AID"])
///     .with_preferred_shifts("nurse-ada", [ShiftType::Morning]);
///
/// assert_eq!(constraints.required_certifications(ShiftType::Night).len(), 2);
/// assert!(constraints.required_certifications(ShiftType::Morning).is_empty());
/// assert!(constraints.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationConstraints {
    /// Cap on scheduled hours per staff member per calendar week.
    pub max_hours_per_week: f64,

    /// Minimum hours between the end of one shift and the start of the next
    /// for the same staff member.
    pub min_rest_between_shifts: f64,

    /// Shift types each staff member would rather work.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_shifts: BTreeMap<StaffId, BTreeSet<ShiftType>>,

    /// Certifications that must all be held to work a shift type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub certification_requirements: BTreeMap<ShiftType, Vec<CertificationType>>,

    /// Time-off requests; only approved ones are considered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_off_requests: Vec<TimeOffRequest>,

    /// Week anchoring for the weekly-hours cap.
    #[cfg_attr(feature = "serde", serde(default))]
    pub week_start: WeekStart,
}

impl OptimizationConstraints {
    pub fn new(max_hours_per_week: f64, min_rest_between_shifts: f64) -> Self {
        Self {
            max_hours_per_week,
            min_rest_between_shifts,
            preferred_shifts: BTreeMap::new(),
            certification_requirements: BTreeMap::new(),
            time_off_requests: Vec::new(),
            week_start: WeekStart::default(),
        }
    }

    /// Adds shift types to a staff member's preferences.
    pub fn with_preferred_shifts(
        mut self,
        staff_id: impl Into<StaffId>,
        shift_types: impl IntoIterator<Item = ShiftType>,
    ) -> Self {
        self.preferred_shifts
            .entry(staff_id.into())
            .or_default()
            .extend(shift_types);
        self
    }

    /// Sets the certifications required for a shift type, replacing any previous list.
    pub fn with_requirement(
        mut self,
        shift_type: ShiftType,
        cert_types: impl IntoIterator<Item = impl Into<CertificationType>>,
    ) -> Self {
        let mut required: Vec<CertificationType> = Vec::new();
        for cert_type in cert_types {
            let cert_type = cert_type.into();
            if !required.contains(&cert_type) {
                required.push(cert_type);
            }
        }
        self.certification_requirements.insert(shift_type, required);
        self
    }

    pub fn with_time_off(mut self, request: TimeOffRequest) -> Self {
        self.time_off_requests.push(request);
        self
    }

    pub fn with_time_off_requests(
        mut self,
        requests: impl IntoIterator<Item = TimeOffRequest>,
    ) -> Self {
        self.time_off_requests.extend(requests);
        self
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// The weekly cap rounded to whole seconds.
    pub fn max_seconds_per_week(&self) -> i64 {
        hours_to_seconds(self.max_hours_per_week)
    }

    /// The rest requirement rounded to whole seconds.
    pub fn min_rest_seconds(&self) -> i64 {
        hours_to_seconds(self.min_rest_between_shifts)
    }

    /// Certifications required for `shift_type`; empty when none are configured.
    pub fn required_certifications(&self, shift_type: ShiftType) -> &[CertificationType] {
        self.certification_requirements
            .get(&shift_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if `staff_id` listed `shift_type` as preferred.
    pub fn prefers(&self, staff_id: &StaffId, shift_type: ShiftType) -> bool {
        self.preferred_shifts
            .get(staff_id)
            .is_some_and(|types| types.contains(&shift_type))
    }

    /// Rejects limits that would make every assignment meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`CarerotaError::InvalidConstraints`] when `max_hours_per_week`
    /// is not a positive finite number or `min_rest_between_shifts` is negative
    /// or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.max_hours_per_week.is_finite() || self.max_hours_per_week <= 0.0 {
            return Err(CarerotaError::InvalidConstraints(format!(
                "max_hours_per_week must be positive, got {}",
                self.max_hours_per_week
            )));
        }
        if !self.min_rest_between_shifts.is_finite() || self.min_rest_between_shifts < 0.0 {
            return Err(CarerotaError::InvalidConstraints(format!(
                "min_rest_between_shifts must not be negative, got {}",
                self.min_rest_between_shifts
            )));
        }
        for request in &self.time_off_requests {
            if request.end_time < request.start_time {
                return Err(CarerotaError::InvalidConstraints(format!(
                    "time off for staff {} ends before it starts",
                    request.staff_id
                )));
            }
        }
        Ok(())
    }
}
