// ABOUTME: Recommended daily intake tables for five age bands and two sex columns
// ABOUTME: Maps a numeric age and sex onto the 27-nutrient target set used for adequacy scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! Nutrient Recommendation Tables
//!
//! Targets are Recommended Dietary Allowances where one exists and Adequate
//! Intakes otherwise. Sugar and sodium are upper limits rather than targets.
//!
//! # Scientific References
//!
//! - Institute of Medicine (2006). *Dietary Reference Intakes: The Essential Guide to
//!   Nutrient Requirements*. National Academies Press. <https://doi.org/10.17226/11537>
//! - National Academies of Sciences, Engineering, and Medicine (2019). *Dietary Reference
//!   Intakes for Sodium and Potassium*. <https://doi.org/10.17226/25353>
//! - Vos, M.B., et al. (2017). Added sugars and cardiovascular disease risk in children.
//!   *Circulation*, 135(19), e1017-e1034.

use crate::config::{NutrientAnalysisConfig, ReferenceSex};
use crate::models::{Nutrient, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Age band of the intake tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeBand {
    /// 1 to 3 years (and younger)
    #[serde(rename = "1-3")]
    Toddler,
    /// 4 to 8 years
    #[serde(rename = "4-8")]
    Child,
    /// 9 to 13 years
    #[serde(rename = "9-13")]
    Preteen,
    /// 14 to 18 years
    #[serde(rename = "14-18")]
    Teen,
    /// 19 years and older
    #[serde(rename = "19+")]
    Adult,
}

impl AgeBand {
    /// Band for an age in years
    ///
    /// Breakpoints are inclusive upper bounds (3, 8, 13, 18), so a fractional
    /// age such as 3.5 belongs to the 4-8 band. Ages below 1 use the youngest
    /// band. A NaN age matches no breakpoint and falls through to 19+.
    #[must_use]
    pub fn from_age(age_years: f64) -> Self {
        if age_years <= 3.0 {
            Self::Toddler
        } else if age_years <= 8.0 {
            Self::Child
        } else if age_years <= 13.0 {
            Self::Preteen
        } else if age_years <= 18.0 {
            Self::Teen
        } else {
            Self::Adult
        }
    }

    /// Display label, e.g. "4-8"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Toddler => "1-3",
            Self::Child => "4-8",
            Self::Preteen => "9-13",
            Self::Teen => "14-18",
            Self::Adult => "19+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily intake targets for one age band and sex column
///
/// Units follow [`Nutrient::unit`]: kcal for energy, g for macronutrients and
/// fiber and sugar, mg or mcg for micronutrients and sodium.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecommendation {
    /// Energy (kcal)
    pub energy: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbohydrates: f64,
    /// Total fat (g)
    pub fat: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Sugar upper limit (g)
    pub sugar: f64,
    /// Sodium upper limit (mg)
    pub sodium: f64,
    /// Vitamin A (mcg RAE)
    pub vitamin_a: f64,
    /// Vitamin C (mg)
    pub vitamin_c: f64,
    /// Vitamin D (mcg)
    pub vitamin_d: f64,
    /// Vitamin E (mg)
    pub vitamin_e: f64,
    /// Vitamin K (mcg)
    pub vitamin_k: f64,
    /// Thiamin (mg)
    pub thiamin: f64,
    /// Riboflavin (mg)
    pub riboflavin: f64,
    /// Niacin (mg)
    pub niacin: f64,
    /// Vitamin B6 (mg)
    pub vitamin_b6: f64,
    /// Vitamin B12 (mcg)
    pub vitamin_b12: f64,
    /// Folate (mcg DFE)
    pub folate: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Magnesium (mg)
    pub magnesium: f64,
    /// Phosphorus (mg)
    pub phosphorus: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Zinc (mg)
    pub zinc: f64,
    /// Copper (mg)
    pub copper: f64,
    /// Manganese (mg)
    pub manganese: f64,
    /// Selenium (mcg)
    pub selenium: f64,
}

impl NutritionRecommendation {
    /// Build from values in [`Nutrient::ALL`] order
    #[must_use]
    pub const fn from_values(values: [f64; 27]) -> Self {
        let [
            energy,
            protein,
            carbohydrates,
            fat,
            fiber,
            sugar,
            sodium,
            vitamin_a,
            vitamin_c,
            vitamin_d,
            vitamin_e,
            vitamin_k,
            thiamin,
            riboflavin,
            niacin,
            vitamin_b6,
            vitamin_b12,
            folate,
            calcium,
            iron,
            magnesium,
            phosphorus,
            potassium,
            zinc,
            copper,
            manganese,
            selenium,
        ] = values;
        Self {
            energy,
            protein,
            carbohydrates,
            fat,
            fiber,
            sugar,
            sodium,
            vitamin_a,
            vitamin_c,
            vitamin_d,
            vitamin_e,
            vitamin_k,
            thiamin,
            riboflavin,
            niacin,
            vitamin_b6,
            vitamin_b12,
            folate,
            calcium,
            iron,
            magnesium,
            phosphorus,
            potassium,
            zinc,
            copper,
            manganese,
            selenium,
        }
    }

    /// Target for a nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminE => self.vitamin_e,
            Nutrient::VitaminK => self.vitamin_k,
            Nutrient::Thiamin => self.thiamin,
            Nutrient::Riboflavin => self.riboflavin,
            Nutrient::Niacin => self.niacin,
            Nutrient::VitaminB6 => self.vitamin_b6,
            Nutrient::VitaminB12 => self.vitamin_b12,
            Nutrient::Folate => self.folate,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
            Nutrient::Zinc => self.zinc,
            Nutrient::Copper => self.copper,
            Nutrient::Manganese => self.manganese,
            Nutrient::Selenium => self.selenium,
        }
    }
}

// Row layout: energy, protein, carbohydrates, fat, fiber, sugar, sodium |
// A, C, D, E, K, thiamin, riboflavin, niacin, B6, B12, folate |
// calcium, iron, magnesium, phosphorus, potassium, zinc, copper, manganese, selenium

#[rustfmt::skip]
const AGE_1_3: NutritionRecommendation = NutritionRecommendation::from_values([
    1000.0, 13.0, 130.0, 35.0, 14.0, 25.0, 1200.0,
    300.0, 15.0, 15.0, 6.0, 30.0, 0.5, 0.5, 6.0, 0.5, 0.9, 150.0,
    700.0, 7.0, 80.0, 460.0, 2000.0, 3.0, 0.34, 1.2, 20.0,
]);

#[rustfmt::skip]
const MALE_4_8: NutritionRecommendation = NutritionRecommendation::from_values([
    1400.0, 19.0, 130.0, 45.0, 20.0, 25.0, 1500.0,
    400.0, 25.0, 15.0, 7.0, 55.0, 0.6, 0.6, 8.0, 0.6, 1.2, 200.0,
    1000.0, 10.0, 130.0, 500.0, 2300.0, 5.0, 0.44, 1.5, 30.0,
]);

#[rustfmt::skip]
const FEMALE_4_8: NutritionRecommendation = NutritionRecommendation::from_values([
    1300.0, 19.0, 130.0, 42.0, 18.0, 25.0, 1500.0,
    400.0, 25.0, 15.0, 7.0, 55.0, 0.6, 0.6, 8.0, 0.6, 1.2, 200.0,
    1000.0, 10.0, 130.0, 500.0, 2300.0, 5.0, 0.44, 1.5, 30.0,
]);

#[rustfmt::skip]
const MALE_9_13: NutritionRecommendation = NutritionRecommendation::from_values([
    1800.0, 34.0, 130.0, 62.0, 25.0, 25.0, 1800.0,
    600.0, 45.0, 15.0, 11.0, 60.0, 0.9, 0.9, 12.0, 1.0, 1.8, 300.0,
    1300.0, 8.0, 240.0, 1250.0, 2500.0, 8.0, 0.7, 1.9, 40.0,
]);

#[rustfmt::skip]
const FEMALE_9_13: NutritionRecommendation = NutritionRecommendation::from_values([
    1600.0, 34.0, 130.0, 55.0, 22.0, 25.0, 1800.0,
    600.0, 45.0, 15.0, 11.0, 60.0, 0.9, 0.9, 12.0, 1.0, 1.8, 300.0,
    1300.0, 8.0, 240.0, 1250.0, 2300.0, 8.0, 0.7, 1.6, 40.0,
]);

#[rustfmt::skip]
const MALE_14_18: NutritionRecommendation = NutritionRecommendation::from_values([
    2200.0, 52.0, 130.0, 73.0, 31.0, 25.0, 2300.0,
    900.0, 75.0, 15.0, 15.0, 75.0, 1.2, 1.3, 16.0, 1.3, 2.4, 400.0,
    1300.0, 11.0, 410.0, 1250.0, 3000.0, 11.0, 0.89, 2.2, 55.0,
]);

#[rustfmt::skip]
const FEMALE_14_18: NutritionRecommendation = NutritionRecommendation::from_values([
    1800.0, 46.0, 130.0, 62.0, 26.0, 25.0, 2300.0,
    700.0, 65.0, 15.0, 15.0, 75.0, 1.0, 1.0, 14.0, 1.2, 2.4, 400.0,
    1300.0, 15.0, 360.0, 1250.0, 2300.0, 9.0, 0.89, 1.6, 55.0,
]);

#[rustfmt::skip]
const MALE_ADULT: NutritionRecommendation = NutritionRecommendation::from_values([
    2400.0, 56.0, 130.0, 80.0, 38.0, 36.0, 2300.0,
    900.0, 90.0, 15.0, 15.0, 120.0, 1.2, 1.3, 16.0, 1.3, 2.4, 400.0,
    1000.0, 8.0, 400.0, 700.0, 3400.0, 11.0, 0.9, 2.3, 55.0,
]);

#[rustfmt::skip]
const FEMALE_ADULT: NutritionRecommendation = NutritionRecommendation::from_values([
    2000.0, 46.0, 130.0, 67.0, 25.0, 25.0, 2300.0,
    700.0, 75.0, 15.0, 15.0, 90.0, 1.1, 1.1, 14.0, 1.3, 2.4, 400.0,
    1000.0, 18.0, 310.0, 700.0, 2600.0, 8.0, 0.9, 1.8, 55.0,
]);

/// Table entry for a band and sex column
#[must_use]
pub const fn recommendation_for(
    band: AgeBand,
    sex: ReferenceSex,
) -> &'static NutritionRecommendation {
    match (band, sex) {
        // Toddler targets are not sex-specific
        (AgeBand::Toddler, _) => &AGE_1_3,
        (AgeBand::Child, ReferenceSex::Male) => &MALE_4_8,
        (AgeBand::Child, ReferenceSex::Female) => &FEMALE_4_8,
        (AgeBand::Preteen, ReferenceSex::Male) => &MALE_9_13,
        (AgeBand::Preteen, ReferenceSex::Female) => &FEMALE_9_13,
        (AgeBand::Teen, ReferenceSex::Male) => &MALE_14_18,
        (AgeBand::Teen, ReferenceSex::Female) => &FEMALE_14_18,
        (AgeBand::Adult, ReferenceSex::Male) => &MALE_ADULT,
        (AgeBand::Adult, ReferenceSex::Female) => &FEMALE_ADULT,
    }
}

/// Recommended daily intakes for an age and sex
///
/// Total and deterministic: every age maps to a band and every sex to a
/// column, with "other" resolved by the configured policy.
#[must_use]
pub fn get_recommendations(
    age_years: f64,
    sex: Sex,
    config: &NutrientAnalysisConfig,
) -> NutritionRecommendation {
    let band = AgeBand::from_age(age_years);
    let column = config.other_sex_policy.intake_reference(sex);
    debug!(age_years, sex = %sex, band = %band, column = ?column, "Selected intake table");
    *recommendation_for(band, column)
}
