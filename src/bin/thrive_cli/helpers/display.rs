// ABOUTME: Output formatting helpers for thrive-cli
// ABOUTME: Human-readable reports for assessments and analyses plus JSON printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use serde::Serialize;
use thrive_engine::errors::AppResult;
use thrive_engine::models::{Nutrient, NutrientCategory, Sex};
use thrive_engine::{
    AgeBand, BmiCategoryInfo, GrowthHistory, NutrientStatus, NutritionAnalysis,
    NutritionRecommendation,
};

const RULE_WIDTH: usize = 60;

/// Print any result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a BMI assessment
pub fn display_bmi_info(info: &BmiCategoryInfo) {
    println!("\nBMI Assessment");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   BMI: {:.1}", info.bmi);
    if let Some(percentile) = info.percentile {
        println!("   BMI-for-age percentile: {percentile:.1}");
    }
    println!(
        "   Category: {} ({})",
        info.category_info.label,
        if info.is_child {
            "child percentile thresholds"
        } else {
            "adult thresholds"
        }
    );
    println!("   {}", info.category_info.description);
    println!("\n   {}", info.category_info.recommendation);
}

/// Display a growth history
pub fn display_growth_history(history: &GrowthHistory) {
    println!("\nGrowth History");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "{:<12} {:>6} {:>7} {:>7} {:>6} {:>10}  Category",
        "Date", "Age", "Height", "Weight", "BMI", "Percentile"
    );
    for point in &history.points {
        let percentile = point
            .percentile
            .map_or_else(|| "-".to_owned(), |p| format!("{p:.1}"));
        println!(
            "{:<12} {:>6.1} {:>7.1} {:>7.1} {:>6.1} {:>10}  {}",
            point.measured_on,
            point.age_years,
            point.height_cm,
            point.weight_kg,
            point.bmi,
            percentile,
            point.category
        );
    }

    if let Some(trend) = &history.trend {
        println!("\nTrend {} to {}", trend.from, trend.to);
        println!("   BMI change: {:+.1}", trend.bmi_change);
        if let Some(change) = trend.percentile_change {
            println!("   Percentile change: {change:+.1}");
        }
    }

    for rejected in &history.rejected {
        println!(
            "\nSkipped record {} ({}): {}",
            rejected.index, rejected.measured_on, rejected.reason
        );
    }
}

/// Display intake targets
pub fn display_recommendations(band: AgeBand, sex: Sex, targets: &NutritionRecommendation) {
    println!("\nRecommended Daily Intake (ages {band}, {sex})");
    println!("{}", "=".repeat(RULE_WIDTH));
    for nutrient in Nutrient::ALL {
        let limit = if nutrient.is_max_value() {
            " (max)"
        } else {
            ""
        };
        println!(
            "   {:<22} {:>8} {}{limit}",
            nutrient.display_name(),
            targets.get(nutrient),
            nutrient.unit()
        );
    }
}

fn display_status_line(status: &NutrientStatus) {
    println!(
        "   {:<22} {:>9.1} / {:<8} {:<5} {:>4}%  {}",
        status.name,
        status.actual,
        status.recommended,
        status.unit,
        status.percentage,
        status.status
    );
}

/// Display a nutrient analysis
pub fn display_analysis(analysis: &NutritionAnalysis) {
    println!("\nNutrition Analysis");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Overall score: {}/100", analysis.overall_score);
    println!(
        "   Traffic light: {} green, {} yellow, {} red ({} measured)",
        analysis.traffic_light.green,
        analysis.traffic_light.yellow,
        analysis.traffic_light.red,
        analysis.traffic_light.total
    );

    for category in NutrientCategory::ALL {
        let score = analysis.categories.get(category);
        println!("\n{category:?}: {}/100", score.score);
        for status in analysis.nutrients_in(category) {
            display_status_line(status);
        }
    }

    if !analysis.top_deficiencies.is_empty() {
        println!("\nTop deficiencies:");
        for status in &analysis.top_deficiencies {
            display_status_line(status);
        }
    }
    if !analysis.top_excesses.is_empty() {
        println!("\nTop excesses:");
        for status in &analysis.top_excesses {
            display_status_line(status);
        }
    }
}
