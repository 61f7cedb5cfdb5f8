// ABOUTME: Integration tests for nutrient adequacy scoring and aggregation
// ABOUTME: Covers percentage, status tiers, stepped scores, category means, and ranked lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors
//! Nutrient analyzer tests
//!
//! - `calculate_percentage` guards and rounding
//! - Status tiers and numeric scores as separate rubrics
//! - Category and overall scores
//! - Deficiency and excess ranking
//! - Traffic light tally and empty input baseline

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use thrive_engine::models::{Nutrient, NutrientCategory, NutrientTotals, Sex};
use thrive_engine::{
    analyze_nutrition, calculate_percentage, determine_status, get_recommendations,
    nutrient_score, AdequacyStatus, NutrientAnalysisConfig, NutrientStatus, NutritionAnalysis,
    NutritionRecommendation,
};

mod common;

fn targets() -> NutritionRecommendation {
    get_recommendations(6.0, Sex::Male, &NutrientAnalysisConfig::default())
}

fn analyze(totals: &NutrientTotals) -> NutritionAnalysis {
    common::init_test_logging();
    analyze_nutrition(totals, &targets(), &NutrientAnalysisConfig::default())
}

/// Min-value nutrients at target, sugar and sodium at half their limit
fn ideal_day(targets: &NutritionRecommendation) -> NutrientTotals {
    Nutrient::ALL
        .iter()
        .map(|nutrient| {
            let target = targets.get(*nutrient);
            let amount = if nutrient.is_max_value() {
                target / 2.0
            } else {
                target
            };
            (*nutrient, amount)
        })
        .collect()
}

fn ids(statuses: &[NutrientStatus]) -> Vec<Nutrient> {
    statuses.iter().map(|status| status.nutrient).collect()
}

// ============================================================================
// PERCENTAGE
// ============================================================================

#[test]
fn test_percentage_guards() {
    assert_eq!(calculate_percentage(None, 100.0), 0);
    assert_eq!(calculate_percentage(Some(50.0), 0.0), 0);
    assert_eq!(calculate_percentage(Some(0.0), 100.0), 0);
    assert_eq!(calculate_percentage(Some(-5.0), 100.0), 0);
    assert_eq!(calculate_percentage(Some(f64::NAN), 100.0), 0);
    assert_eq!(calculate_percentage(Some(50.0), -10.0), 0);
}

#[test]
fn test_percentage_rounds() {
    assert_eq!(calculate_percentage(Some(150.0), 100.0), 150);
    assert_eq!(calculate_percentage(Some(2.0), 3.0), 67);
    assert_eq!(calculate_percentage(Some(1.0), 3.0), 33);
    assert_eq!(calculate_percentage(Some(0.4), 1.0), 40);
    assert_eq!(calculate_percentage(Some(1.005), 200.0), 1);
}

// ============================================================================
// STATUS AND SCORE RUBRICS
// ============================================================================

#[test]
fn test_status_max_value_tiers() {
    assert_eq!(determine_status(0, true), AdequacyStatus::Met);
    assert_eq!(determine_status(80, true), AdequacyStatus::Met);
    assert_eq!(determine_status(81, true), AdequacyStatus::Adequate);
    assert_eq!(determine_status(100, true), AdequacyStatus::Adequate);
    assert_eq!(determine_status(101, true), AdequacyStatus::Excessive);
}

#[test]
fn test_status_min_value_tiers() {
    assert_eq!(determine_status(400, false), AdequacyStatus::Met);
    assert_eq!(determine_status(100, false), AdequacyStatus::Met);
    assert_eq!(determine_status(99, false), AdequacyStatus::Adequate);
    assert_eq!(determine_status(75, false), AdequacyStatus::Adequate);
    assert_eq!(determine_status(74, false), AdequacyStatus::Low);
    assert_eq!(determine_status(0, false), AdequacyStatus::Low);
}

#[test]
fn test_score_max_value_steps() {
    let cases = [
        (0, 100),
        (80, 100),
        (81, 85),
        (100, 85),
        (101, 70),
        (120, 70),
        (121, 50),
        (150, 50),
        (151, 30),
        (900, 30),
    ];
    for (percentage, expected) in cases {
        assert_eq!(nutrient_score(percentage, true), expected, "{percentage}%");
    }
}

#[test]
fn test_score_min_value_steps() {
    let cases = [
        (250, 100),
        (100, 100),
        (99, 95),
        (90, 95),
        (89, 85),
        (75, 85),
        (74, 60),
        (50, 60),
        (49, 40),
        (25, 40),
        (24, 20),
        (0, 20),
    ];
    for (percentage, expected) in cases {
        assert_eq!(nutrient_score(percentage, false), expected, "{percentage}%");
    }
}

#[test]
fn test_status_and_score_are_independent() {
    // Adequate status but a score below 100
    assert_eq!(determine_status(80, false), AdequacyStatus::Adequate);
    assert_eq!(nutrient_score(80, false), 85);
    // Met status but a score below 100
    assert_eq!(determine_status(0, true), AdequacyStatus::Met);
    assert_eq!(nutrient_score(95, true), 85);
    assert_eq!(determine_status(95, true), AdequacyStatus::Adequate);
}

// ============================================================================
// WHOLE-DAY ANALYSIS
// ============================================================================

#[test]
fn test_ideal_day_scores_full_marks() {
    let analysis = analyze(&ideal_day(&targets()));

    assert_eq!(analysis.overall_score, 100);
    assert!(analysis
        .nutrients
        .iter()
        .all(|status| status.status == AdequacyStatus::Met));
    assert_eq!(analysis.traffic_light.red, 0);
    assert_eq!(analysis.traffic_light.green, Nutrient::ALL.len());
    assert_eq!(analysis.traffic_light.total, Nutrient::ALL.len());
    assert!(analysis.top_deficiencies.is_empty());
    assert!(analysis.top_excesses.is_empty());
}

#[test]
fn test_every_nutrient_exactly_at_target() {
    let analysis = analyze(&common::totals_at_target(&targets()));

    for status in &analysis.nutrients {
        assert_eq!(status.percentage, 100);
        let expected = if status.is_max_value {
            AdequacyStatus::Adequate
        } else {
            AdequacyStatus::Met
        };
        assert_eq!(status.status, expected, "{}", status.name);
    }
    assert_eq!(analysis.traffic_light.red, 0);
    assert_eq!(analysis.traffic_light.yellow, 2);
    // Sugar and sodium at their limit score 85, pulling macronutrients to 95
    assert_eq!(analysis.categories.macronutrients.score, 95);
    assert_eq!(analysis.overall_score, 99);
}

#[test]
fn test_sugar_excess() {
    let targets = targets();
    let mut totals = common::totals_at_target(&targets);
    totals.set(Nutrient::Sugar, targets.sugar * 2.0);

    let analysis = analyze(&totals);
    let sugar = analysis
        .nutrients
        .iter()
        .find(|status| status.nutrient == Nutrient::Sugar)
        .unwrap();

    assert_eq!(sugar.percentage, 200);
    assert_eq!(sugar.status, AdequacyStatus::Excessive);
    assert_eq!(sugar.score, 30);
    assert_eq!(ids(&analysis.top_excesses), vec![Nutrient::Sugar]);
    assert!(analysis.overall_score < 100);
}

#[test]
fn test_empty_totals_baseline() {
    let analysis = analyze(&NutrientTotals::new());

    assert_eq!(analysis.overall_score, 0);
    for category in NutrientCategory::ALL {
        let score = analysis.categories.get(category);
        assert_eq!(score.score, 0);
        assert_eq!(score.count.total(), 0);
    }
    assert!(analysis.top_deficiencies.is_empty());
    assert!(analysis.top_excesses.is_empty());
    assert!(analysis.nutrients.is_empty());
    assert_eq!(analysis.traffic_light.total, 0);
}

#[test]
fn test_absent_nutrients_are_skipped() {
    let totals = NutrientTotals::new().with(Nutrient::Energy, targets().energy);
    let analysis = analyze(&totals);

    assert_eq!(analysis.nutrients.len(), 1);
    assert_eq!(analysis.categories.energy.score, 100);
    assert_eq!(analysis.categories.vitamins.score, 0);
    assert_eq!(analysis.categories.vitamins.count.total(), 0);
    // Empty categories still count in the overall mean
    assert_eq!(analysis.overall_score, 25);
    assert_eq!(analysis.traffic_light.total, 1);
}

#[test]
fn test_recorded_zero_is_scored() {
    let totals = NutrientTotals::new().with(Nutrient::Iron, 0.0);
    let analysis = analyze(&totals);

    let iron = &analysis.nutrients[0];
    assert_eq!(iron.percentage, 0);
    assert_eq!(iron.status, AdequacyStatus::Low);
    assert_eq!(iron.score, 20);
    assert_eq!(analysis.categories.minerals.count.low, 1);
    assert_eq!(ids(&analysis.top_deficiencies), vec![Nutrient::Iron]);
}

#[test]
fn test_category_score_is_rounded_mean() {
    let targets = targets();
    let mut totals = common::totals_at_target(&targets);
    totals.set(Nutrient::VitaminD, targets.vitamin_d * 0.6);

    let analysis = analyze(&totals);

    // (10 x 100 + 60) / 11 = 96.36
    assert_eq!(analysis.categories.vitamins.score, 96);
    assert_eq!(analysis.categories.vitamins.count.low, 1);
    assert_eq!(analysis.categories.vitamins.count.met, 10);
}

#[test]
fn test_overall_score_uses_unrounded_category_means() {
    let targets = targets();
    let totals = NutrientTotals::new()
        .with(Nutrient::Energy, targets.energy)
        .with(Nutrient::Protein, targets.protein)
        .with(Nutrient::Fiber, targets.fiber * 0.95)
        .with(Nutrient::VitaminA, targets.vitamin_a)
        .with(Nutrient::VitaminC, targets.vitamin_c * 0.95)
        .with(Nutrient::Calcium, targets.calcium)
        .with(Nutrient::Iron, targets.iron * 0.95);

    let analysis = analyze(&totals);

    // Three categories average (100 + 95) / 2 = 97.5 and report 98
    assert_eq!(analysis.categories.energy.score, 100);
    assert_eq!(analysis.categories.macronutrients.score, 98);
    assert_eq!(analysis.categories.vitamins.score, 98);
    assert_eq!(analysis.categories.minerals.score, 98);
    // (100 + 3 x 97.5) / 4 = 98.125, not (100 + 3 x 98) / 4 = 98.5
    assert_eq!(analysis.overall_score, 98);
}

#[test]
fn test_deficiencies_sorted_worst_first_and_limited() {
    let targets = targets();
    let mut totals = ideal_day(&targets);
    totals.set(Nutrient::Calcium, targets.calcium * 0.6);
    totals.set(Nutrient::VitaminD, targets.vitamin_d * 0.2);
    totals.set(Nutrient::Zinc, targets.zinc * 0.7);
    totals.set(Nutrient::Iron, targets.iron * 0.4);

    let analysis = analyze(&totals);

    assert_eq!(
        ids(&analysis.top_deficiencies),
        vec![Nutrient::VitaminD, Nutrient::Iron, Nutrient::Calcium]
    );
    assert_eq!(analysis.traffic_light.red, 4);
}

#[test]
fn test_deficiency_ties_keep_canonical_order() {
    let targets = targets();
    let mut totals = ideal_day(&targets);
    totals.set(Nutrient::Iron, targets.iron * 0.5);
    totals.set(Nutrient::Protein, targets.protein * 0.5);

    let analysis = analyze(&totals);

    assert_eq!(
        ids(&analysis.top_deficiencies),
        vec![Nutrient::Protein, Nutrient::Iron]
    );
}

#[test]
fn test_secondary_excess_for_target_nutrients() {
    let targets = targets();
    let mut totals = ideal_day(&targets);
    totals.set(Nutrient::VitaminC, targets.vitamin_c * 3.0);
    totals.set(Nutrient::VitaminA, targets.vitamin_a * 1.6);
    totals.set(Nutrient::Fiber, targets.fiber * 1.51);
    totals.set(Nutrient::Sodium, targets.sodium * 1.3);
    totals.set(Nutrient::Calcium, targets.calcium * 1.5);

    let analysis = analyze(&totals);

    assert_eq!(
        ids(&analysis.top_excesses),
        vec![Nutrient::VitaminC, Nutrient::VitaminA, Nutrient::Fiber]
    );
    let vitamin_c = &analysis.top_excesses[0];
    assert_eq!(vitamin_c.status, AdequacyStatus::Met);
    assert_eq!(vitamin_c.percentage, 300);
}

#[test]
fn test_exactly_150_percent_is_not_an_excess() {
    let targets = targets();
    let mut totals = ideal_day(&targets);
    totals.set(Nutrient::Calcium, targets.calcium * 1.5);

    let analysis = analyze(&totals);
    assert!(analysis.top_excesses.is_empty());
}

#[test]
fn test_traffic_light_buckets() {
    let targets = targets();
    let totals = NutrientTotals::new()
        .with(Nutrient::Protein, targets.protein)
        .with(Nutrient::Fiber, targets.fiber * 0.8)
        .with(Nutrient::Iron, targets.iron * 0.3)
        .with(Nutrient::Sodium, targets.sodium * 1.4);

    let light = analyze(&totals).traffic_light;

    assert_eq!(light.green, 1);
    assert_eq!(light.yellow, 1);
    assert_eq!(light.red, 2);
    assert_eq!(light.total, light.green + light.yellow + light.red);
}

#[test]
fn test_nutrients_grouped_by_category() {
    let analysis = analyze(&common::totals_at_target(&targets()));

    assert_eq!(analysis.nutrients_in(NutrientCategory::Energy).count(), 1);
    assert_eq!(analysis.nutrients_in(NutrientCategory::Macronutrients).count(), 6);
    assert_eq!(analysis.nutrients_in(NutrientCategory::Vitamins).count(), 11);
    assert_eq!(analysis.nutrients_in(NutrientCategory::Minerals).count(), 9);
    assert_eq!(
        analysis
            .nutrients
            .iter()
            .map(|status| status.nutrient)
            .collect::<Vec<_>>(),
        Nutrient::ALL.to_vec()
    );
}

#[test]
fn test_configured_list_limit_and_threshold() {
    let targets = targets();
    let config = NutrientAnalysisConfig {
        top_list_limit: 5,
        secondary_excess_percentage: 250,
        ..NutrientAnalysisConfig::default()
    };
    let mut totals = totals_at_half(&targets);
    totals.set(Nutrient::VitaminC, targets.vitamin_c * 2.0);
    totals.set(Nutrient::VitaminA, targets.vitamin_a * 3.0);

    let analysis = analyze_nutrition(&totals, &targets, &config);

    assert_eq!(analysis.top_deficiencies.len(), 5);
    assert_eq!(ids(&analysis.top_excesses), vec![Nutrient::VitaminA]);
}

fn totals_at_half(targets: &NutritionRecommendation) -> NutrientTotals {
    common::totals_at_percent(targets, 50.0)
}

#[test]
fn test_analysis_serializes_for_service_boundary() {
    let targets = targets();
    let mut totals = common::totals_at_target(&targets);
    totals.set(Nutrient::Iron, targets.iron * 0.5);

    let json = serde_json::to_value(analyze(&totals)).unwrap();

    assert!(json["overallScore"].is_number());
    assert_eq!(json["topDeficiencies"][0]["nutrient"], "iron");
    assert_eq!(json["topDeficiencies"][0]["status"], "low");
    assert_eq!(json["topDeficiencies"][0]["isMaxValue"], false);
    assert!(json["categories"]["macronutrients"]["count"]["adequate"].is_number());
    assert!(json["trafficLight"]["total"].is_number());
}
