// ABOUTME: Main library entry point for the Thrive growth and nutrition scoring engine
// ABOUTME: Re-exports the engine crates and provides structured logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

#![deny(unsafe_code)]

//! # Thrive Engine
//!
//! Growth-percentile and nutrient-adequacy scoring for an app that tracks
//! nutrition and growth for children with selective eating (including ARFID)
//! and their parents.
//!
//! ## Features
//!
//! - **BMI and BMI-for-age percentiles**: LMS method against reference growth
//!   curves for ages 2 to 17, adult WHO thresholds otherwise
//! - **Growth history**: chronological assessment of stored measurements
//! - **Recommended intakes**: 27 nutrient targets across five age bands
//! - **Nutrient adequacy**: per-nutrient status, category scores, an overall
//!   score, and ranked deficiencies and excesses
//!
//! ## Architecture
//!
//! - `thrive-core`: errors, domain models, shared constants
//! - `thrive-intelligence`: reference tables, algorithms, calculators, configuration
//! - this crate: facade, logging, and the `thrive-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use thrive_engine::models::{Nutrient, NutrientTotals, Sex};
//! use thrive_engine::{analyze_nutrition, get_bmi_category_info, get_recommendations};
//! use thrive_engine::{GrowthConfig, NutrientAnalysisConfig};
//!
//! let bmi = get_bmi_category_info(140.0, 32.0, 10.0, Sex::Female, &GrowthConfig::default())?;
//! println!("{} ({:?})", bmi.category, bmi.percentile);
//!
//! let config = NutrientAnalysisConfig::default();
//! let targets = get_recommendations(10.0, Sex::Female, &config);
//! let totals = NutrientTotals::new()
//!     .with(Nutrient::Energy, 1500.0)
//!     .with(Nutrient::Calcium, 900.0);
//! let analysis = analyze_nutrition(&totals, &targets, &config);
//! println!("overall score {}", analysis.overall_score);
//! # Ok::<(), thrive_engine::errors::AppError>(())
//! ```

/// Structured logging configuration
pub mod logging;

pub use thrive_core::{constants, errors, models};
pub use thrive_intelligence::{
    algorithms, config, growth_history, growth_reference, nutrient_analyzer,
    nutrient_recommendations, percentile_calculator, physiological_constants,
};

pub use thrive_intelligence::{
    analyze_nutrition, assess_measurement, calculate_bmi, calculate_bmi_percentile,
    calculate_bmi_z_score, calculate_percentage, determine_status, evaluate_growth_history,
    get_adult_bmi_category, get_bmi_category_info, get_child_bmi_category, get_recommendations,
    nutrient_score, AdequacyStatus, AgeBand, BmiCategory, BmiCategoryInfo, CategoryDescription,
    CategoryScore, CategoryScores, EngineConfig, GrowthConfig, GrowthHistory, GrowthPoint,
    GrowthTrend, NutrientAnalysisConfig, NutrientStatus, NutritionAnalysis,
    NutritionRecommendation, OtherSexPolicy, RejectedMeasurement, StatusCount, TrafficLight,
};
