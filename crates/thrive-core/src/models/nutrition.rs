// ABOUTME: Nutrient identifiers, reporting categories, and measured daily nutrient totals
// ABOUTME: Keeps "not measured" distinct from zero so analysis only scores what was recorded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reporting category a nutrient is aggregated under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum NutrientCategory {
    /// Energy (calories) only
    Energy,
    /// Protein, carbohydrates, fat, fiber, sugar, and sodium
    Macronutrients,
    /// Tracked vitamins
    Vitamins,
    /// Tracked minerals
    Minerals,
}

impl NutrientCategory {
    /// All categories in reporting order
    pub const ALL: [Self; 4] = [
        Self::Energy,
        Self::Macronutrients,
        Self::Vitamins,
        Self::Minerals,
    ];
}

/// A tracked nutrient
///
/// Declaration order is the canonical reporting order used for tables and
/// for breaking ties when ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    /// Energy (kcal)
    Energy,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbohydrates,
    /// Total fat (g)
    Fat,
    /// Dietary fiber (g)
    Fiber,
    /// Added sugar (g), an upper limit
    Sugar,
    /// Sodium (mg), an upper limit
    Sodium,
    /// Vitamin A (mcg RAE)
    VitaminA,
    /// Vitamin C (mg)
    VitaminC,
    /// Vitamin D (mcg)
    VitaminD,
    /// Vitamin E (mg)
    VitaminE,
    /// Vitamin K (mcg)
    VitaminK,
    /// Thiamin, B1 (mg)
    Thiamin,
    /// Riboflavin, B2 (mg)
    Riboflavin,
    /// Niacin, B3 (mg)
    Niacin,
    /// Vitamin B6 (mg)
    VitaminB6,
    /// Vitamin B12 (mcg)
    VitaminB12,
    /// Folate (mcg DFE)
    Folate,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Magnesium (mg)
    Magnesium,
    /// Phosphorus (mg)
    Phosphorus,
    /// Potassium (mg)
    Potassium,
    /// Zinc (mg)
    Zinc,
    /// Copper (mg)
    Copper,
    /// Manganese (mg)
    Manganese,
    /// Selenium (mcg)
    Selenium,
}

impl Nutrient {
    /// Every tracked nutrient in canonical order
    pub const ALL: [Self; 27] = [
        Self::Energy,
        Self::Protein,
        Self::Carbohydrates,
        Self::Fat,
        Self::Fiber,
        Self::Sugar,
        Self::Sodium,
        Self::VitaminA,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
        Self::VitaminK,
        Self::Thiamin,
        Self::Riboflavin,
        Self::Niacin,
        Self::VitaminB6,
        Self::VitaminB12,
        Self::Folate,
        Self::Calcium,
        Self::Iron,
        Self::Magnesium,
        Self::Phosphorus,
        Self::Potassium,
        Self::Zinc,
        Self::Copper,
        Self::Manganese,
        Self::Selenium,
    ];

    /// Human-readable name shown in comparison tables
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Protein => "Protein",
            Self::Carbohydrates => "Carbohydrates",
            Self::Fat => "Fat",
            Self::Fiber => "Fiber",
            Self::Sugar => "Sugar",
            Self::Sodium => "Sodium",
            Self::VitaminA => "Vitamin A",
            Self::VitaminC => "Vitamin C",
            Self::VitaminD => "Vitamin D",
            Self::VitaminE => "Vitamin E",
            Self::VitaminK => "Vitamin K",
            Self::Thiamin => "Thiamin (B1)",
            Self::Riboflavin => "Riboflavin (B2)",
            Self::Niacin => "Niacin (B3)",
            Self::VitaminB6 => "Vitamin B6",
            Self::VitaminB12 => "Vitamin B12",
            Self::Folate => "Folate",
            Self::Calcium => "Calcium",
            Self::Iron => "Iron",
            Self::Magnesium => "Magnesium",
            Self::Phosphorus => "Phosphorus",
            Self::Potassium => "Potassium",
            Self::Zinc => "Zinc",
            Self::Copper => "Copper",
            Self::Manganese => "Manganese",
            Self::Selenium => "Selenium",
        }
    }

    /// Unit the amount is expressed in
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Energy => "kcal",
            Self::Protein | Self::Carbohydrates | Self::Fat | Self::Fiber | Self::Sugar => "g",
            Self::VitaminA
            | Self::VitaminD
            | Self::VitaminK
            | Self::VitaminB12
            | Self::Folate
            | Self::Selenium => "mcg",
            Self::Sodium
            | Self::VitaminC
            | Self::VitaminE
            | Self::Thiamin
            | Self::Riboflavin
            | Self::Niacin
            | Self::VitaminB6
            | Self::Calcium
            | Self::Iron
            | Self::Magnesium
            | Self::Phosphorus
            | Self::Potassium
            | Self::Zinc
            | Self::Copper
            | Self::Manganese => "mg",
        }
    }

    /// Reporting category this nutrient is scored under
    #[must_use]
    pub const fn category(self) -> NutrientCategory {
        match self {
            Self::Energy => NutrientCategory::Energy,
            Self::Protein
            | Self::Carbohydrates
            | Self::Fat
            | Self::Fiber
            | Self::Sugar
            | Self::Sodium => NutrientCategory::Macronutrients,
            Self::VitaminA
            | Self::VitaminC
            | Self::VitaminD
            | Self::VitaminE
            | Self::VitaminK
            | Self::Thiamin
            | Self::Riboflavin
            | Self::Niacin
            | Self::VitaminB6
            | Self::VitaminB12
            | Self::Folate => NutrientCategory::Vitamins,
            Self::Calcium
            | Self::Iron
            | Self::Magnesium
            | Self::Phosphorus
            | Self::Potassium
            | Self::Zinc
            | Self::Copper
            | Self::Manganese
            | Self::Selenium => NutrientCategory::Minerals,
        }
    }

    /// Whether the recommendation is an upper limit (lower intake is better)
    #[must_use]
    pub const fn is_max_value(self) -> bool {
        matches!(self, Self::Sugar | Self::Sodium)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Measured daily nutrient totals
///
/// Only nutrients that were actually measured are present. A nutrient recorded
/// as `0.0` is present (and scores as an unmet target); an absent nutrient is
/// skipped entirely by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientTotals(BTreeMap<Nutrient, f64>);

impl NutrientTotals {
    /// Create empty totals
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, amount: f64) -> Self {
        self.set(nutrient, amount);
        self
    }

    /// Record an amount, replacing any previous value
    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.0.insert(nutrient, amount);
    }

    /// Measured amount, `None` when the nutrient was not recorded
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied()
    }

    /// Number of measured nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no nutrient was measured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Measured nutrients in canonical order
    pub fn measured(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(nutrient, amount)| (*nutrient, *amount))
    }

    /// Add another set of totals into this one
    ///
    /// Nutrients measured on either side are present in the result; a nutrient
    /// absent on both sides stays absent.
    pub fn merge(&mut self, other: &Self) {
        for (nutrient, amount) in other.measured() {
            *self.0.entry(nutrient).or_insert(0.0) += amount;
        }
    }

    /// Sum the totals of several food entries into one daily total
    #[must_use]
    pub fn sum<'a>(entries: impl IntoIterator<Item = &'a Self>) -> Self {
        entries.into_iter().fold(Self::new(), |mut acc, entry| {
            acc.merge(entry);
            acc
        })
    }
}

impl FromIterator<(Nutrient, f64)> for NutrientTotals {
    fn from_iter<I: IntoIterator<Item = (Nutrient, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
