// ABOUTME: Integration tests for engine and logging configuration
// ABOUTME: Covers defaults, environment overrides, validation, and error conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use thrive_engine::config::{ConfigError, ReferenceSex};
use thrive_engine::constants::env_config;
use thrive_engine::errors::{AppError, ErrorCode};
use thrive_engine::logging::{LogFormat, LoggingConfig};
use thrive_engine::models::Sex;
use thrive_engine::{EngineConfig, GrowthConfig, NutrientAnalysisConfig, OtherSexPolicy};

mod common;

const ENGINE_VARS: [&str; 5] = [
    env_config::CHILD_MIN_AGE_YEARS,
    env_config::CHILD_MAX_AGE_YEARS,
    env_config::OTHER_SEX_POLICY,
    env_config::TOP_LIST_LIMIT,
    env_config::SECONDARY_EXCESS_PERCENTAGE,
];

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
];

fn clear_vars(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_defaults_validate() {
    let config = EngineConfig::default();

    assert!(config.validate().is_ok());
    assert!((config.growth.child_min_age_years - 2.0).abs() < f64::EPSILON);
    assert!((config.growth.child_max_age_years - 18.0).abs() < f64::EPSILON);
    assert_eq!(config.growth.other_sex_policy, OtherSexPolicy::MaleReference);
    assert_eq!(config.nutrient_analysis.top_list_limit, 3);
    assert_eq!(config.nutrient_analysis.secondary_excess_percentage, 150);
}

#[test]
fn test_child_age_window_is_half_open() {
    let growth = GrowthConfig::default();

    assert!(!growth.is_child_age(1.99));
    assert!(growth.is_child_age(2.0));
    assert!(growth.is_child_age(17.99));
    assert!(!growth.is_child_age(18.0));
    assert!(!growth.is_child_age(f64::NAN));
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_vars(&ENGINE_VARS);
    let config = EngineConfig::load().unwrap();

    assert_eq!(config.nutrient_analysis.top_list_limit, 3);
    assert_eq!(config.growth.other_sex_policy, OtherSexPolicy::MaleReference);
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    clear_vars(&ENGINE_VARS);
    env::set_var(env_config::CHILD_MAX_AGE_YEARS, "19.5");
    env::set_var(env_config::TOP_LIST_LIMIT, "5");
    env::set_var(env_config::SECONDARY_EXCESS_PERCENTAGE, "200");
    env::set_var(env_config::OTHER_SEX_POLICY, "female_reference");

    let config = EngineConfig::load().unwrap();
    clear_vars(&ENGINE_VARS);

    assert!((config.growth.child_max_age_years - 19.5).abs() < f64::EPSILON);
    assert_eq!(config.nutrient_analysis.top_list_limit, 5);
    assert_eq!(config.nutrient_analysis.secondary_excess_percentage, 200);
    // One policy drives both lookups
    assert_eq!(config.growth.other_sex_policy, OtherSexPolicy::FemaleReference);
    assert_eq!(
        config.nutrient_analysis.other_sex_policy,
        OtherSexPolicy::FemaleReference
    );
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_vars(&ENGINE_VARS);
    env::set_var(env_config::TOP_LIST_LIMIT, "three");

    let result = EngineConfig::load();
    clear_vars(&ENGINE_VARS);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_invalid_override_fails_validation() {
    clear_vars(&ENGINE_VARS);
    env::set_var(env_config::CHILD_MIN_AGE_YEARS, "12");
    env::set_var(env_config::CHILD_MAX_AGE_YEARS, "10");

    let result = EngineConfig::load();
    clear_vars(&ENGINE_VARS);

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_growth_bounds_must_fit_reference_tables() {
    let growth = GrowthConfig {
        child_max_age_years: 25.0,
        ..GrowthConfig::default()
    };
    assert!(matches!(
        growth.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let negative = GrowthConfig {
        child_min_age_years: -1.0,
        ..GrowthConfig::default()
    };
    assert!(matches!(
        negative.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_nutrient_analysis_validation() {
    let zero_limit = NutrientAnalysisConfig {
        top_list_limit: 0,
        ..NutrientAnalysisConfig::default()
    };
    assert!(zero_limit.validate().is_err());

    let low_threshold = NutrientAnalysisConfig {
        secondary_excess_percentage: 100,
        ..NutrientAnalysisConfig::default()
    };
    assert!(low_threshold.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error = AppError::from(ConfigError::InvalidRange("min must be < max"));

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.http_status(), 500);
    assert!(error.message.contains("min must be < max"));
    assert!(error.source.is_some());
}

// ============================================================================
// OTHER-SEX POLICY
// ============================================================================

#[test]
fn test_policy_parsing() {
    assert_eq!(
        "male_reference".parse::<OtherSexPolicy>().unwrap(),
        OtherSexPolicy::MaleReference
    );
    assert_eq!(
        " Female ".parse::<OtherSexPolicy>().unwrap(),
        OtherSexPolicy::FemaleReference
    );
    assert_eq!(
        "unsupported".parse::<OtherSexPolicy>().unwrap(),
        OtherSexPolicy::Unsupported
    );
    assert!(matches!(
        "average".parse::<OtherSexPolicy>(),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_policy_resolution() {
    common::init_test_logging();

    for policy in [
        OtherSexPolicy::MaleReference,
        OtherSexPolicy::FemaleReference,
        OtherSexPolicy::Unsupported,
    ] {
        assert_eq!(policy.growth_reference(Sex::Male), Some(ReferenceSex::Male));
        assert_eq!(
            policy.growth_reference(Sex::Female),
            Some(ReferenceSex::Female)
        );
        assert_eq!(policy.intake_reference(Sex::Female), ReferenceSex::Female);
    }

    assert_eq!(
        OtherSexPolicy::FemaleReference.growth_reference(Sex::Other),
        Some(ReferenceSex::Female)
    );
    assert_eq!(OtherSexPolicy::Unsupported.growth_reference(Sex::Other), None);
    assert_eq!(
        OtherSexPolicy::Unsupported.intake_reference(Sex::Other),
        ReferenceSex::Male
    );
}

#[test]
fn test_policy_serde_names() {
    let json = serde_json::to_value(OtherSexPolicy::FemaleReference).unwrap();
    assert_eq!(json, "female_reference");

    let parsed: OtherSexPolicy = serde_json::from_str("\"unsupported\"").unwrap();
    assert_eq!(parsed, OtherSexPolicy::Unsupported);
}

// ============================================================================
// LOGGING CONFIGURATION
// ============================================================================

#[test]
#[serial]
fn test_logging_defaults_from_empty_env() {
    clear_vars(&LOGGING_VARS);
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "thrive-engine");
}

#[test]
#[serial]
fn test_logging_env_overrides() {
    clear_vars(&LOGGING_VARS);
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "thrive-worker");

    let config = LoggingConfig::from_env();
    clear_vars(&LOGGING_VARS);

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.service_name, "thrive-worker");
}

#[test]
fn test_logging_level_override() {
    let config = LoggingConfig::default().with_level("trace");
    assert_eq!(config.level, "trace");
}
