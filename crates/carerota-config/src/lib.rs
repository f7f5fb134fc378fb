//! Configuration system for carerota.
//!
//! Load optimizer configuration from TOML or YAML files to control the
//! constraint bundle, week anchoring and the run deadline without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use carerota_config::OptimizerConfig;
//! use carerota_core::ShiftType;
//! use std::time::Duration;
//!
//! let config = OptimizerConfig::from_toml_str(r#"
//!     week_start = "sunday"
//!
//!     [constraints]
//!     max_hours_per_week = 40.0
//!     min_rest_between_shifts = 8.0
//!
//!     [constraints.certification_requirements]
//!     NIGHT = ["CPR", "FIRST_AID"]
//!
//!     [termination]
//!     seconds_spent_limit = 5
//! "#).unwrap();
//!
//! let constraints = config.constraints().unwrap();
//! assert_eq!(constraints.required_certifications(ShiftType::Night).len(), 2);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use carerota_core::{OptimizationConstraints, ShiftType, WeekStart};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main optimizer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Week anchoring for the weekly-hours cap.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Constraint bundle. Required: the numeric limits have no defaults.
    pub constraints: ConstraintsConfig,

    /// Deadline for a single run.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl OptimizerConfig {
    /// Creates a configuration with the given limits and nothing else.
    pub fn new(max_hours_per_week: f64, min_rest_between_shifts: f64) -> Self {
        Self {
            week_start: WeekStart::default(),
            constraints: ConstraintsConfig {
                max_hours_per_week,
                min_rest_between_shifts,
                preferred_shifts: BTreeMap::new(),
                certification_requirements: BTreeMap::new(),
            },
            termination: None,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the run deadline in seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Requires `cert_types` for `shift_type`.
    pub fn with_requirement(
        mut self,
        shift_type: ShiftType,
        cert_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.constraints.certification_requirements.insert(
            shift_type.to_string(),
            cert_types.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Returns the run time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the cap on new assignments per run, if configured.
    pub fn assignment_limit(&self) -> Option<usize> {
        self.termination.as_ref().and_then(|t| t.assignment_limit)
    }

    /// Checks the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constraints().map(|_| ())
    }

    /// Builds the constraint bundle for a run.
    ///
    /// Time-off requests are left empty; they are loaded per run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unknown shift types or limits the
    /// optimizer would reject.
    pub fn constraints(&self) -> Result<OptimizationConstraints, ConfigError> {
        let c = &self.constraints;
        let mut constraints =
            OptimizationConstraints::new(c.max_hours_per_week, c.min_rest_between_shifts)
                .with_week_start(self.week_start);

        for (staff_id, shift_types) in &c.preferred_shifts {
            let parsed = shift_types
                .iter()
                .map(|t| parse_shift_type(t))
                .collect::<Result<Vec<_>, _>>()?;
            constraints = constraints.with_preferred_shifts(staff_id.as_str(), parsed);
        }

        for (shift_type, cert_types) in &c.certification_requirements {
            let shift_type = parse_shift_type(shift_type)?;
            if cert_types.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "empty certification type required for {shift_type}"
                )));
            }
            constraints =
                constraints.with_requirement(shift_type, cert_types.iter().map(String::as_str));
        }

        constraints
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(constraints)
    }
}

fn parse_shift_type(s: &str) -> Result<ShiftType, ConfigError> {
    s.parse::<ShiftType>()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

/// Constraint section of the configuration file.
///
/// Shift types are written as strings (`"NIGHT"`, `"on_call"`) and checked
/// when the bundle is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstraintsConfig {
    /// Cap on scheduled hours per staff member per week.
    pub max_hours_per_week: f64,

    /// Minimum rest in hours between two shifts of the same staff member.
    pub min_rest_between_shifts: f64,

    /// Preferred shift types keyed by staff id.
    #[serde(default)]
    pub preferred_shifts: BTreeMap<String, Vec<String>>,

    /// Required certification types keyed by shift type.
    #[serde(default)]
    pub certification_requirements: BTreeMap<String, Vec<String>>,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds a run may spend assigning shifts.
    pub seconds_spent_limit: Option<u64>,

    /// Additional milliseconds, added to the seconds limit.
    pub millis_spent_limit: Option<u64>,

    /// Most new assignments a single run may propose.
    pub assignment_limit: Option<usize>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis =
            self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
