// ABOUTME: Policy for resolving the "other" sex value onto a sex-specific reference table
// ABOUTME: Growth lookups may opt out entirely; intake lookups always resolve to a column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use crate::config::intelligence::error::ConfigError;
use crate::models::Sex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Sex column of a reference table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSex {
    /// Male reference
    Male,
    /// Female reference
    Female,
}

/// How the "other" sex value is mapped onto sex-specific reference data
///
/// The reference growth curves and intake tables only publish male and female
/// columns. Mapping "other" onto the male column is a modelling simplification
/// rather than a validated clinical choice, so it is configurable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OtherSexPolicy {
    /// Use the male reference (historical behaviour)
    #[default]
    MaleReference,
    /// Use the female reference
    FemaleReference,
    /// Report growth percentiles as unavailable; intake tables use the male column
    Unsupported,
}

impl OtherSexPolicy {
    /// Reference for growth-curve lookups, `None` when percentiles must not be computed
    #[must_use]
    pub fn growth_reference(self, sex: Sex) -> Option<ReferenceSex> {
        match (sex, self) {
            (Sex::Male, _) | (Sex::Other, Self::MaleReference) => Some(ReferenceSex::Male),
            (Sex::Female, _) | (Sex::Other, Self::FemaleReference) => Some(ReferenceSex::Female),
            (Sex::Other, Self::Unsupported) => {
                debug!("growth percentile unavailable for sex 'other' under unsupported policy");
                None
            }
        }
    }

    /// Reference column for intake tables; always resolves
    #[must_use]
    pub const fn intake_reference(self, sex: Sex) -> ReferenceSex {
        match (sex, self) {
            (Sex::Female, _) | (Sex::Other, Self::FemaleReference) => ReferenceSex::Female,
            (Sex::Male | Sex::Other, _) => ReferenceSex::Male,
        }
    }
}

impl FromStr for OtherSexPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "male_reference" => Ok(Self::MaleReference),
            "female" | "female_reference" => Ok(Self::FemaleReference),
            "unsupported" | "none" => Ok(Self::Unsupported),
            other => Err(ConfigError::Parse(format!(
                "Unknown other-sex policy '{other}', expected male_reference, female_reference, or unsupported"
            ))),
        }
    }
}
