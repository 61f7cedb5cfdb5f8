// ABOUTME: Growth-percentile and nutrient-adequacy scoring engine
// ABOUTME: Pure, synchronous calculators over fixed reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

#![deny(unsafe_code)]

//! # Thrive Intelligence
//!
//! Two independent calculators that presentation code calls with data it has
//! already fetched:
//!
//! - **Percentile calculator**: BMI, BMI-for-age percentile (LMS method) for
//!   children aged 2 to 17, and weight-status categories with descriptive text.
//! - **Nutrient adequacy analyzer**: per-nutrient percentage of the recommended
//!   daily intake, status tiers, category scores, an overall score, and ranked
//!   deficiencies and excesses.
//!
//! Neither calculator performs I/O or holds mutable state; every call is
//! independent and safe to run concurrently.

pub use thrive_core::{constants, errors, models};

/// Statistical building blocks (LMS transform, normal distribution)
pub mod algorithms;

/// Engine configuration (age bounds, sex fallback policy, ranking limits)
pub mod config;

/// Growth history evaluation for trend charts
pub mod growth_history;

/// LMS reference tables for BMI-for-age
pub mod growth_reference;

/// Nutrient adequacy scoring and aggregation
pub mod nutrient_analyzer;

/// Recommended daily intake tables by age band and sex
pub mod nutrient_recommendations;

/// BMI, BMI-for-age percentile, and weight-status categorisation
pub mod percentile_calculator;

/// Published thresholds and coefficients used by the calculators
pub mod physiological_constants;

pub use config::{EngineConfig, GrowthConfig, NutrientAnalysisConfig, OtherSexPolicy};
pub use growth_history::{
    evaluate_growth_history, GrowthHistory, GrowthPoint, GrowthTrend, RejectedMeasurement,
};
pub use nutrient_analyzer::{
    analyze_nutrition, calculate_percentage, determine_status, nutrient_score, AdequacyStatus,
    CategoryScore, CategoryScores, NutrientStatus, NutritionAnalysis, StatusCount, TrafficLight,
};
pub use nutrient_recommendations::{get_recommendations, AgeBand, NutritionRecommendation};
pub use percentile_calculator::{
    assess_measurement, calculate_bmi, calculate_bmi_percentile, calculate_bmi_z_score,
    get_adult_bmi_category, get_bmi_category_info, get_child_bmi_category, BmiCategory,
    BmiCategoryInfo, CategoryDescription,
};
