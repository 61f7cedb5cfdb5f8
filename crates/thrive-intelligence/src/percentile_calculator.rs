// ABOUTME: BMI and BMI-for-age percentile calculation with weight-status categorisation
// ABOUTME: Child LMS percentile pathway with a total fallback to adult WHO thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! Percentile Calculator Module
//!
//! Converts height, weight, age and sex into a BMI, a BMI-for-age percentile for
//! children, and one of four weight-status categories with descriptive text.
//!
//! # Scientific References
//!
//! - Cole, T.J. (1990). The LMS method for constructing normalized growth standards.
//!   *European Journal of Clinical Nutrition*, 44(1), 45-60.
//! - Kuczmarski, R.J., et al. (2002). 2000 CDC Growth Charts for the United States.
//!   *Vital Health Stat 11*, (246), 1-190.
//! - World Health Organization (2000). Obesity: preventing and managing the global
//!   epidemic. WHO Technical Report Series 894.

use crate::algorithms::{interpolate_lms, z_score_to_percentile};
use crate::config::GrowthConfig;
use crate::constants::units::{CM_PER_METER, MONTHS_PER_YEAR};
use crate::errors::{AppError, AppResult};
use crate::growth_reference::bmi_for_age_table;
use crate::models::{Measurement, Sex};
use crate::physiological_constants::{adult_bmi, child_bmi_percentile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Weight-status category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// Below the healthy range
    Underweight,
    /// Healthy range
    Normal,
    /// Above the healthy range
    Overweight,
    /// Well above the healthy range
    Obese,
}

impl BmiCategory {
    /// All categories, lightest first
    pub const ALL: [Self; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Serialized name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// Descriptive record for the child or adult context
    #[must_use]
    pub const fn description(self, is_child: bool) -> CategoryDescription {
        if is_child {
            child_description(self)
        } else {
            adult_description(self)
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display text attached to a category
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryDescription {
    /// Short label
    pub label: &'static str,
    /// One-sentence explanation of the range
    pub description: &'static str,
    /// Colour hint for presentation (hex)
    pub color: &'static str,
    /// Suggested next step
    pub recommendation: &'static str,
}

const fn child_description(category: BmiCategory) -> CategoryDescription {
    match category {
        BmiCategory::Underweight => CategoryDescription {
            label: "Underweight",
            description: "BMI-for-age is below the 5th percentile for children of the same age and sex.",
            color: "#3b82f6",
            recommendation: "Talk with your pediatrician about growth and feeding. A low BMI-for-age with a limited diet can point to ARFID, so ask about ruling it out.",
        },
        BmiCategory::Normal => CategoryDescription {
            label: "Healthy Weight",
            description: "BMI-for-age is between the 5th and 85th percentile.",
            color: "#22c55e",
            recommendation: "Keep offering a variety of foods and track growth at regular check-ups.",
        },
        BmiCategory::Overweight => CategoryDescription {
            label: "Overweight",
            description: "BMI-for-age is between the 85th and 95th percentile.",
            color: "#f59e0b",
            recommendation: "Discuss growth trends with your pediatrician before changing portions or restricting foods.",
        },
        BmiCategory::Obese => CategoryDescription {
            label: "Obese",
            description: "BMI-for-age is at or above the 95th percentile.",
            color: "#ef4444",
            recommendation: "Schedule a visit with your pediatrician to review growth, activity and eating patterns together.",
        },
    }
}

const fn adult_description(category: BmiCategory) -> CategoryDescription {
    match category {
        BmiCategory::Underweight => CategoryDescription {
            label: "Underweight",
            description: "BMI is below 18.5.",
            color: "#3b82f6",
            recommendation: "Consider talking with a healthcare provider or dietitian about reaching a healthy weight.",
        },
        BmiCategory::Normal => CategoryDescription {
            label: "Normal Weight",
            description: "BMI is between 18.5 and 24.9.",
            color: "#22c55e",
            recommendation: "Maintain a balanced diet and regular physical activity.",
        },
        BmiCategory::Overweight => CategoryDescription {
            label: "Overweight",
            description: "BMI is between 25 and 29.9.",
            color: "#f59e0b",
            recommendation: "Small changes in diet and activity can help. A healthcare provider can suggest a plan.",
        },
        BmiCategory::Obese => CategoryDescription {
            label: "Obese",
            description: "BMI is 30 or higher.",
            color: "#ef4444",
            recommendation: "Talk with a healthcare provider about health risks and support options.",
        },
    }
}

/// BMI result with category, descriptive text and optional percentile
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BmiCategoryInfo {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Weight-status category
    pub category: BmiCategory,
    /// Descriptive record matching `category` and `is_child`
    pub category_info: CategoryDescription,
    /// BMI-for-age percentile, present only on the child pathway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    /// BMI-for-age Z-score, present only on the child pathway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
    /// Whether child percentile thresholds were used
    pub is_child: bool,
}

impl BmiCategoryInfo {
    fn child(bmi: f64, z_score: f64) -> Self {
        let percentile = z_score_to_percentile(z_score);
        let category = get_child_bmi_category(percentile);
        Self {
            bmi,
            category,
            category_info: category.description(true),
            percentile: Some(percentile),
            z_score: Some(z_score),
            is_child: true,
        }
    }

    fn adult(bmi: f64) -> Self {
        let category = get_adult_bmi_category(bmi);
        Self {
            bmi,
            category,
            category_info: category.description(false),
            percentile: None,
            z_score: None,
            is_child: false,
        }
    }
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// # Errors
///
/// Returns `AppError::invalid_measurement` if height or weight is not a
/// positive finite number.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_measurement(format!(
            "height must be greater than 0 cm, got {height_cm}"
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_measurement(format!(
            "weight must be greater than 0 kg, got {weight_kg}"
        )));
    }

    let height_m = height_cm / CM_PER_METER;
    Ok(weight_kg / (height_m * height_m))
}

/// BMI-for-age Z-score from the LMS reference tables
///
/// Returns `None` outside 24-240 months, for a non-positive BMI, or when the
/// sex policy declines to map "other" onto a reference table.
#[must_use]
pub fn calculate_bmi_z_score(
    bmi: f64,
    age_months: f64,
    sex: Sex,
    config: &GrowthConfig,
) -> Option<f64> {
    if !bmi.is_finite() || bmi <= 0.0 {
        return None;
    }
    let reference = config.other_sex_policy.growth_reference(sex)?;
    let params = interpolate_lms(bmi_for_age_table(reference), age_months)?;
    let z = params.z_score(bmi);
    debug!(
        age_months,
        sex = %sex,
        reference = ?reference,
        l = params.l,
        m = params.m,
        s = params.s,
        z,
        "BMI-for-age Z-score"
    );
    z.is_finite().then_some(z)
}

/// BMI-for-age percentile (0-100)
///
/// `None` is the defined "not applicable" result outside the 24-240 month
/// reference range; it is not an error.
#[must_use]
pub fn calculate_bmi_percentile(
    bmi: f64,
    age_months: f64,
    sex: Sex,
    config: &GrowthConfig,
) -> Option<f64> {
    calculate_bmi_z_score(bmi, age_months, sex, config).map(z_score_to_percentile)
}

/// Adult weight-status category from fixed WHO thresholds
#[must_use]
pub fn get_adult_bmi_category(bmi: f64) -> BmiCategory {
    if bmi < adult_bmi::NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < adult_bmi::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < adult_bmi::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Child weight-status category from a BMI-for-age percentile
#[must_use]
pub fn get_child_bmi_category(percentile: f64) -> BmiCategory {
    if percentile < child_bmi_percentile::NORMAL_MIN {
        BmiCategory::Underweight
    } else if percentile < child_bmi_percentile::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if percentile < child_bmi_percentile::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Full BMI assessment with child percentile pathway and adult fallback
///
/// Ages inside the configured child range use the BMI-for-age percentile when
/// one can be computed. Every other case uses the adult thresholds, so each
/// valid measurement yields exactly one category and one descriptive record.
///
/// # Errors
///
/// Returns `AppError::invalid_measurement` if height or weight is not positive.
pub fn get_bmi_category_info(
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    sex: Sex,
    config: &GrowthConfig,
) -> AppResult<BmiCategoryInfo> {
    let bmi = calculate_bmi(height_cm, weight_kg)?;

    let child_z = if config.is_child_age(age_years) {
        calculate_bmi_z_score(bmi, age_years * MONTHS_PER_YEAR, sex, config)
    } else {
        None
    };

    let info = child_z.map_or_else(
        || BmiCategoryInfo::adult(bmi),
        |z| BmiCategoryInfo::child(bmi, z),
    );

    debug!(
        bmi = info.bmi,
        age_years,
        category = %info.category,
        is_child = info.is_child,
        "BMI category assessed"
    );
    Ok(info)
}

/// Assess a stored measurement, deriving age from its dates
///
/// # Errors
///
/// Returns `AppError::invalid_measurement` if height or weight is not positive.
pub fn assess_measurement(
    measurement: &Measurement,
    config: &GrowthConfig,
) -> AppResult<BmiCategoryInfo> {
    get_bmi_category_info(
        measurement.height_cm,
        measurement.weight_kg,
        measurement.age_years(),
        measurement.sex,
        config,
    )
}
