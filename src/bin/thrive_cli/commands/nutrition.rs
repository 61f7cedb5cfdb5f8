// ABOUTME: Nutrition commands for thrive-cli
// ABOUTME: Intake target lookup and adequacy analysis of measured daily totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use std::path::Path;
use thrive_engine::errors::AppResult;
use thrive_engine::logging::EngineLogger;
use thrive_engine::models::{NutrientTotals, Sex};
use thrive_engine::{analyze_nutrition, get_recommendations, AgeBand, NutrientAnalysisConfig};

use super::load_json;
use crate::helpers::display::{display_analysis, display_recommendations, print_json};

/// Print the intake targets for an age and sex
pub fn recommendations(
    age_years: f64,
    sex: Sex,
    config: &NutrientAnalysisConfig,
    json: bool,
) -> AppResult<()> {
    let targets = get_recommendations(age_years, sex, config);

    if json {
        print_json(&targets)
    } else {
        display_recommendations(AgeBand::from_age(age_years), sex, &targets);
        Ok(())
    }
}

/// Analyze a JSON file of measured daily totals
pub fn analyze(
    path: &Path,
    age_years: f64,
    sex: Sex,
    config: &NutrientAnalysisConfig,
    json: bool,
) -> AppResult<()> {
    let totals: NutrientTotals = load_json(path)?;
    let targets = get_recommendations(age_years, sex, config);
    let analysis = analyze_nutrition(&totals, &targets, config);
    EngineLogger::log_nutrition_analysis(
        analysis.traffic_light.total,
        analysis.overall_score,
        analysis.traffic_light.red,
    );

    if json {
        print_json(&analysis)
    } else {
        display_analysis(&analysis);
        Ok(())
    }
}
