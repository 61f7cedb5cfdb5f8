// ABOUTME: Growth assessment configuration for the BMI percentile pathway
// ABOUTME: Child pathway age bounds and the "other" sex reference policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use crate::config::intelligence::error::ConfigError;
use crate::config::intelligence::sex_policy::OtherSexPolicy;
use crate::constants::units::MONTHS_PER_YEAR;
use crate::physiological_constants::growth_reference_range::{
    CHILD_MAX_AGE_YEARS, CHILD_MIN_AGE_YEARS, MAX_AGE_MONTHS,
};
use serde::{Deserialize, Serialize};

/// Growth assessment configuration
///
/// Reference: CDC BMI-for-age growth charts cover ages 2 to 20 years; the child
/// pathway defaults to ages 2 up to (not including) 18.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Youngest age (years, inclusive) assessed with BMI-for-age percentiles
    pub child_min_age_years: f64,
    /// Age (years, exclusive) from which adult BMI thresholds apply
    pub child_max_age_years: f64,
    /// Reference table used for the "other" sex value
    pub other_sex_policy: OtherSexPolicy,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            child_min_age_years: CHILD_MIN_AGE_YEARS,
            child_max_age_years: CHILD_MAX_AGE_YEARS,
            other_sex_policy: OtherSexPolicy::default(),
        }
    }
}

impl GrowthConfig {
    /// Whether an age falls on the child percentile pathway
    #[must_use]
    pub fn is_child_age(&self, age_years: f64) -> bool {
        (self.child_min_age_years..self.child_max_age_years).contains(&age_years)
    }

    /// Validate the child pathway bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a bound is negative or beyond the
    /// reference tables, and `ConfigError::InvalidRange` if the bounds are not ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_table_years = MAX_AGE_MONTHS / MONTHS_PER_YEAR;
        for value in [self.child_min_age_years, self.child_max_age_years] {
            if !(0.0..=max_table_years).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(
                    "child pathway ages must be between 0 and 20 years",
                ));
            }
        }
        if self.child_min_age_years >= self.child_max_age_years {
            return Err(ConfigError::InvalidRange(
                "child_min_age_years must be < child_max_age_years",
            ));
        }
        Ok(())
    }
}
