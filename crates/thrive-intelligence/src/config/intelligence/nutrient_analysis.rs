// ABOUTME: Nutrient analysis configuration for ranking and intake-table lookups
// ABOUTME: Controls ranked list length, secondary excess threshold, and sex column policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use crate::config::intelligence::error::ConfigError;
use crate::config::intelligence::sex_policy::OtherSexPolicy;
use crate::physiological_constants::nutrient_ranking::{
    SECONDARY_EXCESS_PERCENTAGE, TOP_LIST_LIMIT,
};
use serde::{Deserialize, Serialize};

/// Nutrient analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientAnalysisConfig {
    /// Maximum entries in the deficiency and excess lists
    pub top_list_limit: usize,
    /// Target nutrients above this percentage are listed as excesses
    pub secondary_excess_percentage: u32,
    /// Intake table column used for the "other" sex value
    pub other_sex_policy: OtherSexPolicy,
}

impl Default for NutrientAnalysisConfig {
    fn default() -> Self {
        Self {
            top_list_limit: TOP_LIST_LIMIT,
            secondary_excess_percentage: SECONDARY_EXCESS_PERCENTAGE,
            other_sex_policy: OtherSexPolicy::default(),
        }
    }
}

impl NutrientAnalysisConfig {
    /// Validate ranking settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the list limit is zero or the
    /// secondary excess threshold does not exceed 100%.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_list_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "top_list_limit must be at least 1",
            ));
        }
        if self.secondary_excess_percentage <= 100 {
            return Err(ConfigError::ValueOutOfRange(
                "secondary_excess_percentage must be greater than 100",
            ));
        }
        Ok(())
    }
}
