// ABOUTME: Engine configuration for growth assessment and nutrient adequacy analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! Engine Configuration Module
//!
//! Provides typed configuration for both calculators. Defaults reproduce the
//! documented behaviour; environment variables can override individual values.
//!
//! # Module Structure
//!
//! - `growth` - Child pathway age bounds
//! - `nutrient_analysis` - Ranked list length and secondary excess threshold
//! - `sex_policy` - Mapping of the "other" sex value onto reference tables
//! - `error` - Validation and parse errors

pub mod error;
pub mod growth;
pub mod nutrient_analysis;
pub mod sex_policy;

pub use error::ConfigError;
pub use growth::GrowthConfig;
pub use nutrient_analysis::NutrientAnalysisConfig;
pub use sex_policy::{OtherSexPolicy, ReferenceSex};

use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration for the BMI / BMI-for-age pathway
    pub growth: GrowthConfig,
    /// Configuration for nutrient adequacy analysis
    pub nutrient_analysis: NutrientAnalysisConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        info!(
            child_min_age_years = config.growth.child_min_age_years,
            child_max_age_years = config.growth.child_max_age_years,
            other_sex_policy = ?config.growth.other_sex_policy,
            top_list_limit = config.nutrient_analysis.top_list_limit,
            "engine configuration loaded"
        );
        Ok(config)
    }

    /// Validate every sub-configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.growth.validate()?;
        self.nutrient_analysis.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::CHILD_MIN_AGE_YEARS,
            &mut self.growth.child_min_age_years,
        )?;
        Self::apply_env_var(
            env_config::CHILD_MAX_AGE_YEARS,
            &mut self.growth.child_max_age_years,
        )?;
        Self::apply_env_var(
            env_config::TOP_LIST_LIMIT,
            &mut self.nutrient_analysis.top_list_limit,
        )?;
        Self::apply_env_var(
            env_config::SECONDARY_EXCESS_PERCENTAGE,
            &mut self.nutrient_analysis.secondary_excess_percentage,
        )?;

        // One policy applies to both growth and intake lookups
        if let Ok(val) = env::var(env_config::OTHER_SEX_POLICY) {
            let policy = val.parse::<OtherSexPolicy>()?;
            self.growth.other_sex_policy = policy;
            self.nutrient_analysis.other_sex_policy = policy;
        }

        Ok(self)
    }
}
