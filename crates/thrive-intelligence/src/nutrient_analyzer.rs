// ABOUTME: Nutrient adequacy scoring comparing measured daily totals against intake targets
// ABOUTME: Per-nutrient status and score, category averages, overall score, and ranked lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! Nutrient Adequacy Analyzer
//!
//! Each measured nutrient gets two independent ratings from its percentage of
//! target: a status tier (`met`, `adequate`, `low`, `excessive`) for display,
//! and a stepped 0-100 score used for averaging. Sugar and sodium are upper
//! limits, so both ratings invert for them.

use crate::config::NutrientAnalysisConfig;
use crate::constants::units::PERCENT;
use crate::models::{Nutrient, NutrientCategory, NutrientTotals};
use crate::nutrient_recommendations::NutritionRecommendation;
use crate::physiological_constants::nutrient_score::{
    MAX_VALUE_FLOOR, MAX_VALUE_STEPS, MIN_VALUE_FLOOR, MIN_VALUE_STEPS,
};
use crate::physiological_constants::nutrient_status::{
    MAX_VALUE_ADEQUATE_PERCENT, MAX_VALUE_MET_PERCENT, MIN_VALUE_ADEQUATE_PERCENT,
    MIN_VALUE_MET_PERCENT,
};
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;
use tracing::debug;

/// Adequacy status tier
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdequacyStatus {
    /// Target met (or comfortably under an upper limit)
    Met,
    /// Close to target (or just under an upper limit)
    Adequate,
    /// Well short of target
    Low,
    /// Over an upper limit
    Excessive,
}

impl AdequacyStatus {
    /// Serialized name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Adequate => "adequate",
            Self::Low => "low",
            Self::Excessive => "excessive",
        }
    }
}

impl fmt::Display for AdequacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluation of one measured nutrient
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutrientStatus {
    /// Nutrient identifier
    pub nutrient: Nutrient,
    /// Display name
    pub name: &'static str,
    /// Unit of `actual` and `recommended`
    pub unit: &'static str,
    /// Measured amount
    pub actual: f64,
    /// Target amount
    pub recommended: f64,
    /// Rounded percentage of target
    pub percentage: u32,
    /// Status tier
    pub status: AdequacyStatus,
    /// Whether the target is an upper limit
    pub is_max_value: bool,
    /// Stepped 0-100 score used for category averages
    pub score: u32,
}

/// Status tally within a category
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCount {
    /// Nutrients with status `met`
    pub met: usize,
    /// Nutrients with status `adequate`
    pub adequate: usize,
    /// Nutrients with status `low`
    pub low: usize,
    /// Nutrients with status `excessive`
    pub excessive: usize,
}

impl StatusCount {
    fn record(&mut self, status: AdequacyStatus) {
        match status {
            AdequacyStatus::Met => self.met += 1,
            AdequacyStatus::Adequate => self.adequate += 1,
            AdequacyStatus::Low => self.low += 1,
            AdequacyStatus::Excessive => self.excessive += 1,
        }
    }

    /// Nutrients counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.met + self.adequate + self.low + self.excessive
    }
}

/// Aggregate for one category
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CategoryScore {
    /// Rounded mean of the per-nutrient scores, 0 when nothing was measured
    pub score: u32,
    /// Status tally
    pub count: StatusCount,
}

/// The four category aggregates
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CategoryScores {
    /// Energy
    pub energy: CategoryScore,
    /// Macronutrients, fiber, sugar and sodium
    pub macronutrients: CategoryScore,
    /// Vitamins
    pub vitamins: CategoryScore,
    /// Minerals
    pub minerals: CategoryScore,
}

impl CategoryScores {
    /// Aggregate for a category
    #[must_use]
    pub const fn get(&self, category: NutrientCategory) -> &CategoryScore {
        match category {
            NutrientCategory::Energy => &self.energy,
            NutrientCategory::Macronutrients => &self.macronutrients,
            NutrientCategory::Vitamins => &self.vitamins,
            NutrientCategory::Minerals => &self.minerals,
        }
    }

    fn get_mut(&mut self, category: NutrientCategory) -> &mut CategoryScore {
        match category {
            NutrientCategory::Energy => &mut self.energy,
            NutrientCategory::Macronutrients => &mut self.macronutrients,
            NutrientCategory::Vitamins => &mut self.vitamins,
            NutrientCategory::Minerals => &mut self.minerals,
        }
    }
}

/// Green/yellow/red tally over all measured nutrients
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct TrafficLight {
    /// `met`
    pub green: usize,
    /// `adequate`
    pub yellow: usize,
    /// `low` or `excessive`
    pub red: usize,
    /// Sum of the three buckets
    pub total: usize,
}

impl TrafficLight {
    fn record(&mut self, status: AdequacyStatus) {
        match status {
            AdequacyStatus::Met => self.green += 1,
            AdequacyStatus::Adequate => self.yellow += 1,
            AdequacyStatus::Low | AdequacyStatus::Excessive => self.red += 1,
        }
        self.total += 1;
    }
}

/// Complete adequacy analysis for one day of intake
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    /// Mean of the four unrounded category means, rounded once
    pub overall_score: u32,
    /// Category aggregates
    pub categories: CategoryScores,
    /// Most deficient nutrients, worst first
    pub top_deficiencies: Vec<NutrientStatus>,
    /// Most excessive nutrients, highest percentage first
    pub top_excesses: Vec<NutrientStatus>,
    /// Status tally
    pub traffic_light: TrafficLight,
    /// Every evaluated nutrient in canonical order
    pub nutrients: Vec<NutrientStatus>,
}

impl NutritionAnalysis {
    /// Evaluated nutrients belonging to a category
    pub fn nutrients_in(
        &self,
        category: NutrientCategory,
    ) -> impl Iterator<Item = &NutrientStatus> + '_ {
        self.nutrients
            .iter()
            .filter(move |status| status.nutrient.category() == category)
    }
}

/// Rounded percentage of target
///
/// Returns 0 when nothing positive was measured or the target is not positive,
/// so a missing or zero target never divides by zero.
#[must_use]
pub fn calculate_percentage(actual: Option<f64>, recommended: f64) -> u32 {
    let Some(actual) = actual.filter(|a| a.is_finite() && *a > 0.0) else {
        return 0;
    };
    if !recommended.is_finite() || recommended <= 0.0 {
        return 0;
    }
    (actual / recommended * PERCENT).round() as u32
}

/// Status tier for a percentage of target
///
/// Upper-limit nutrients: <=80 met, <=100 adequate, otherwise excessive.
/// Target nutrients: >=100 met, >=75 adequate, otherwise low.
#[must_use]
pub const fn determine_status(percentage: u32, is_max_value: bool) -> AdequacyStatus {
    if is_max_value {
        if percentage <= MAX_VALUE_MET_PERCENT {
            AdequacyStatus::Met
        } else if percentage <= MAX_VALUE_ADEQUATE_PERCENT {
            AdequacyStatus::Adequate
        } else {
            AdequacyStatus::Excessive
        }
    } else if percentage >= MIN_VALUE_MET_PERCENT {
        AdequacyStatus::Met
    } else if percentage >= MIN_VALUE_ADEQUATE_PERCENT {
        AdequacyStatus::Adequate
    } else {
        AdequacyStatus::Low
    }
}

/// Stepped 0-100 score for a percentage of target
///
/// Independent of [`determine_status`]; the breakpoints differ.
#[must_use]
pub fn nutrient_score(percentage: u32, is_max_value: bool) -> u32 {
    if is_max_value {
        MAX_VALUE_STEPS
            .iter()
            .find(|(limit, _)| percentage <= *limit)
            .map_or(MAX_VALUE_FLOOR, |(_, score)| *score)
    } else {
        MIN_VALUE_STEPS
            .iter()
            .find(|(threshold, _)| percentage >= *threshold)
            .map_or(MIN_VALUE_FLOOR, |(_, score)| *score)
    }
}

fn evaluate(nutrient: Nutrient, actual: f64, recommended: f64) -> NutrientStatus {
    let is_max_value = nutrient.is_max_value();
    let percentage = calculate_percentage(Some(actual), recommended);
    NutrientStatus {
        nutrient,
        name: nutrient.display_name(),
        unit: nutrient.unit(),
        actual,
        recommended,
        percentage,
        status: determine_status(percentage, is_max_value),
        is_max_value,
        score: nutrient_score(percentage, is_max_value),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / f64::from(count)
}

/// Analyze measured totals against intake targets
///
/// Only nutrients present in `totals` are evaluated; absent nutrients are
/// skipped rather than scored as zero. Empty totals produce zero scores and
/// empty lists, which is a valid result.
#[must_use]
pub fn analyze_nutrition(
    totals: &NutrientTotals,
    recommendations: &NutritionRecommendation,
    config: &NutrientAnalysisConfig,
) -> NutritionAnalysis {
    let nutrients: Vec<NutrientStatus> = totals
        .measured()
        .map(|(nutrient, actual)| evaluate(nutrient, actual, recommendations.get(nutrient)))
        .collect();

    let mut categories = CategoryScores::default();
    let mut traffic_light = TrafficLight::default();
    for status in &nutrients {
        categories
            .get_mut(status.nutrient.category())
            .count
            .record(status.status);
        traffic_light.record(status.status);
    }
    let category_means = NutrientCategory::ALL.map(|category| {
        let category_mean = mean(
            nutrients
                .iter()
                .filter(|status| status.nutrient.category() == category)
                .map(|status| f64::from(status.score)),
        );
        categories.get_mut(category).score = category_mean.round() as u32;
        category_mean
    });

    // Every category counts equally, including empty ones. Rounding happens
    // once, on the unrounded category means.
    let overall_score = mean(category_means.into_iter()).round() as u32;

    let mut top_deficiencies: Vec<NutrientStatus> = nutrients
        .iter()
        .filter(|status| status.status == AdequacyStatus::Low && !status.is_max_value)
        .cloned()
        .collect();
    top_deficiencies.sort_by_key(|status| status.percentage);
    top_deficiencies.truncate(config.top_list_limit);

    let mut top_excesses: Vec<NutrientStatus> = nutrients
        .iter()
        .filter(|status| {
            status.status == AdequacyStatus::Excessive
                || (!status.is_max_value
                    && status.percentage > config.secondary_excess_percentage)
        })
        .cloned()
        .collect();
    top_excesses.sort_by_key(|status| Reverse(status.percentage));
    top_excesses.truncate(config.top_list_limit);

    debug!(
        measured = nutrients.len(),
        overall_score,
        deficiencies = top_deficiencies.len(),
        excesses = top_excesses.len(),
        "Nutrition analysis complete"
    );

    NutritionAnalysis {
        overall_score,
        categories,
        top_deficiencies,
        top_excesses,
        traffic_light,
        nutrients,
    }
}
