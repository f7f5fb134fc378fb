//! Tests for optimizer configuration.

use super::*;
use carerota_core::CertificationType;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        week_start = "sunday"

        [constraints]
        max_hours_per_week = 38.5
        min_rest_between_shifts = 11

        [constraints.preferred_shifts]
        "nurse-ada" = ["MORNING", "afternoon"]

        [constraints.certification_requirements]
        NIGHT = ["CPR", "FIRST_AID"]
        ON_CALL = ["PHONE_TRIAGE"]

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500
        assignment_limit = 12
    "#;

    let config = OptimizerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.week_start, WeekStart::Sunday);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
    assert_eq!(config.assignment_limit(), Some(12));

    let constraints = config.constraints().unwrap();
    assert_eq!(constraints.max_hours_per_week, 38.5);
    assert_eq!(constraints.min_rest_between_shifts, 11.0);
    assert_eq!(constraints.week_start, WeekStart::Sunday);
    assert!(constraints.prefers(&"nurse-ada".into(), ShiftType::Afternoon));
    assert_eq!(
        constraints.required_certifications(ShiftType::OnCall),
        &[CertificationType::new("PHONE_TRIAGE")]
    );
    assert!(constraints.time_off_requests.is_empty());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        constraints:
          max_hours_per_week: 40
          min_rest_between_shifts: 8
          certification_requirements:
            NIGHT: [CPR]
    "#;

    let config = OptimizerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.week_start, WeekStart::Monday);
    assert_eq!(config.time_limit(), None);
    assert_eq!(config.assignment_limit(), None);

    let constraints = config.constraints().unwrap();
    assert_eq!(constraints.required_certifications(ShiftType::Night).len(), 1);
}

#[test]
fn test_constraints_section_required() {
    let result = OptimizerConfig::from_toml_str("week_start = \"monday\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_unknown_shift_type_rejected() {
    let config = OptimizerConfig::new(40.0, 8.0).with_requirement(ShiftType::Night, ["CPR"]);
    assert!(config.validate().is_ok());

    let mut bad = config.clone();
    bad.constraints
        .certification_requirements
        .insert("LUNCH".to_string(), vec!["CPR".to_string()]);
    assert!(matches!(bad.constraints(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_invalid_limits_rejected() {
    let config = OptimizerConfig::new(0.0, 8.0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = OptimizerConfig::new(40.0, -1.0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_builder() {
    let config = OptimizerConfig::new(40.0, 8.0)
        .with_week_start(WeekStart::Sunday)
        .with_termination_seconds(3);

    assert_eq!(config.time_limit(), Some(Duration::from_secs(3)));
    assert_eq!(config.constraints().unwrap().week_start, WeekStart::Sunday);
}

#[test]
fn test_missing_file() {
    let result = OptimizerConfig::load("does-not-exist/optimizer.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
