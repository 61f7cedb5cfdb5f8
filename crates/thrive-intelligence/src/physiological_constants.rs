// ABOUTME: Published thresholds and coefficients for growth and nutrient-adequacy scoring
// ABOUTME: WHO/CDC BMI cut-offs, normal-CDF coefficients, and nutrient status/score breakpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! Constants used by the calculators
//!
//! Threshold tables are kept here as data so the calculators stay small pure
//! functions over them.

/// Adult BMI thresholds (kg/m²), lower edge inclusive for the next category
///
/// References:
/// - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
///   WHO Technical Report Series 894.
pub mod adult_bmi {
    /// BMI at or above this is at least "normal"
    pub const NORMAL_MIN: f64 = 18.5;

    /// BMI at or above this is at least "overweight"
    pub const OVERWEIGHT_MIN: f64 = 25.0;

    /// BMI at or above this is "obese"
    pub const OBESE_MIN: f64 = 30.0;
}

/// Child BMI-for-age percentile thresholds, lower edge inclusive
///
/// References:
/// - Barlow, S.E. & Expert Committee (2007). Expert committee recommendations regarding the
///   prevention, assessment, and treatment of child and adolescent overweight and obesity.
///   *Pediatrics*, 120(Suppl 4), S164-S192.
pub mod child_bmi_percentile {
    /// Percentile at or above this is at least "normal"
    pub const NORMAL_MIN: f64 = 5.0;

    /// Percentile at or above this is at least "overweight"
    pub const OVERWEIGHT_MIN: f64 = 85.0;

    /// Percentile at or above this is "obese"
    pub const OBESE_MIN: f64 = 95.0;
}

/// Age coverage of the BMI-for-age reference tables
pub mod growth_reference_range {
    /// First table checkpoint (months)
    pub const MIN_AGE_MONTHS: f64 = 24.0;

    /// Last table checkpoint (months)
    pub const MAX_AGE_MONTHS: f64 = 240.0;

    /// Default lower bound (years, inclusive) of the child pathway
    pub const CHILD_MIN_AGE_YEARS: f64 = 2.0;

    /// Default upper bound (years, exclusive) of the child pathway
    pub const CHILD_MAX_AGE_YEARS: f64 = 18.0;
}

/// Standard normal CDF approximation coefficients
///
/// Reference: Zelen, M. & Severo, N.C. (1964), in Abramowitz & Stegun,
/// *Handbook of Mathematical Functions*, formula 26.2.17 (|error| < 7.5e-8).
pub mod normal_distribution {
    /// Rational approximation parameter `p`
    pub const P: f64 = 0.231_641_9;
    /// Polynomial coefficient b1
    pub const B1: f64 = 0.319_381_530;
    /// Polynomial coefficient b2
    pub const B2: f64 = -0.356_563_782;
    /// Polynomial coefficient b3
    pub const B3: f64 = 1.781_477_937;
    /// Polynomial coefficient b4
    pub const B4: f64 = -1.821_255_978;
    /// Polynomial coefficient b5
    pub const B5: f64 = 1.330_274_429;
    /// 1 / sqrt(2π)
    pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
}

/// Status tier breakpoints (percent of recommendation)
pub mod nutrient_status {
    /// Upper-limit nutrients at or below this percentage are "met"
    pub const MAX_VALUE_MET_PERCENT: u32 = 80;

    /// Upper-limit nutrients at or below this percentage are "adequate", above is "excessive"
    pub const MAX_VALUE_ADEQUATE_PERCENT: u32 = 100;

    /// Target nutrients at or above this percentage are "met"
    pub const MIN_VALUE_MET_PERCENT: u32 = 100;

    /// Target nutrients at or above this percentage are "adequate", below is "low"
    pub const MIN_VALUE_ADEQUATE_PERCENT: u32 = 75;
}

/// Numeric score steps used for category averaging
///
/// Breakpoints are independent of the status tiers; below the target the score
/// decays in finer steps than the status does.
pub mod nutrient_score {
    /// Upper-limit nutrients: (highest percentage, score), checked in order
    pub const MAX_VALUE_STEPS: [(u32, u32); 4] = [(80, 100), (100, 85), (120, 70), (150, 50)];

    /// Upper-limit nutrients above the last step
    pub const MAX_VALUE_FLOOR: u32 = 30;

    /// Target nutrients: (lowest percentage, score), checked in order
    pub const MIN_VALUE_STEPS: [(u32, u32); 5] =
        [(100, 100), (90, 95), (75, 85), (50, 60), (25, 40)];

    /// Target nutrients below the last step
    pub const MIN_VALUE_FLOOR: u32 = 20;
}

/// Ranked list defaults
pub mod nutrient_ranking {
    /// Length of the deficiency and excess lists
    pub const TOP_LIST_LIMIT: usize = 3;

    /// Target nutrients above this percentage are reported as excesses
    pub const SECONDARY_EXCESS_PERCENTAGE: u32 = 150;
}
