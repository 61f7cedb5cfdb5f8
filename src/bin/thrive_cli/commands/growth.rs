// ABOUTME: Growth commands for thrive-cli
// ABOUTME: Single BMI assessments and multi-measurement growth histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use std::path::Path;
use thrive_engine::errors::AppResult;
use thrive_engine::logging::EngineLogger;
use thrive_engine::models::{Measurement, Sex};
use thrive_engine::{evaluate_growth_history, get_bmi_category_info, GrowthConfig};
use tracing::info;

use super::load_json;
use crate::helpers::display::{display_bmi_info, display_growth_history, print_json};

/// Assess a single measurement
pub fn bmi(
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    sex: Sex,
    config: &GrowthConfig,
    json: bool,
) -> AppResult<()> {
    let info = get_bmi_category_info(height_cm, weight_kg, age_years, sex, config)?;
    EngineLogger::log_bmi_assessment(
        info.bmi,
        info.category.as_str(),
        info.percentile,
        info.is_child,
    );

    if json {
        print_json(&info)
    } else {
        display_bmi_info(&info);
        Ok(())
    }
}

/// Assess every measurement in a JSON file
pub fn history(path: &Path, config: &GrowthConfig, json: bool) -> AppResult<()> {
    let measurements: Vec<Measurement> = load_json(path)?;
    info!(count = measurements.len(), "Evaluating growth history");

    let history = evaluate_growth_history(&measurements, config);

    if json {
        print_json(&history)
    } else {
        display_growth_history(&history);
        Ok(())
    }
}
