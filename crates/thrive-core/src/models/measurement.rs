// ABOUTME: Anthropometric measurement record and biological sex enumeration
// ABOUTME: Derives chronological age in years and months from birth and measurement dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use crate::constants::units::{DAYS_PER_YEAR, MONTHS_PER_YEAR};
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex as recorded on a profile
///
/// Reference tables exist only for `Male` and `Female`; how `Other` is resolved
/// is a configuration decision made by the engine, not by this type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or unspecified
    Other,
}

impl Sex {
    /// Lower-case wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" | "o" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex '{other}', expected male, female, or other"
            ))),
        }
    }
}

/// A single height/weight measurement taken on a given day
///
/// Mirrors a row of the persisted measurements table. Age is never stored;
/// it is derived from `birth_date` and `measured_on` on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Standing height (or recumbent length) in centimetres
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Biological sex
    pub sex: Sex,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Date the measurement was taken
    pub measured_on: NaiveDate,
}

impl Measurement {
    /// Fractional age in years at the time of measurement
    ///
    /// Measurements dated before the birth date yield `0.0`.
    #[must_use]
    pub fn age_years(&self) -> f64 {
        let days = self
            .measured_on
            .signed_duration_since(self.birth_date)
            .num_days()
            .max(0);
        days as f64 / DAYS_PER_YEAR
    }

    /// Fractional age in months at the time of measurement
    #[must_use]
    pub fn age_months(&self) -> f64 {
        self.age_years() * MONTHS_PER_YEAR
    }

    /// Completed years of age (birthday-based), as used for intake bands
    #[must_use]
    pub fn completed_years(&self) -> u32 {
        self.measured_on.years_since(self.birth_date).unwrap_or(0)
    }
}
