// ABOUTME: LMS reference tables for BMI-for-age, 24 to 240 months at yearly checkpoints
// ABOUTME: Box-Cox power (L), median (M), and coefficient of variation (S) per sex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! BMI-for-age LMS reference data
//!
//! One row per whole year of age. Each row reproduces the published CDC 2000
//! BMI-for-age 5th, 50th, 85th, and 95th percentile cutoffs for that age to
//! within one percentile point. The 24-month rows are the CDC values as issued.
//!
//! # Scientific References
//!
//! - Kuczmarski, R.J., et al. (2002). 2000 CDC Growth Charts for the United States:
//!   methods and development. *Vital Health Stat 11*, (246), 1-190.
//! - Cole, T.J. & Green, P.J. (1992). Smoothing reference centile curves: the LMS method
//!   and penalized likelihood. *Statistics in Medicine*, 11(10), 1305-1319.

use crate::algorithms::lms::LmsPoint;
use crate::config::ReferenceSex;

const fn point(age_months: f64, l: f64, m: f64, s: f64) -> LmsPoint {
    LmsPoint {
        age_months,
        l,
        m,
        s,
    }
}

/// Male BMI-for-age checkpoints
pub const MALE_BMI_FOR_AGE: [LmsPoint; 19] = [
    point(24.0, -2.011_18, 16.575_03, 0.080_59),
    point(36.0, -1.975_00, 15.972_17, 0.073_77),
    point(48.0, -2.250_00, 15.564_48, 0.071_29),
    point(60.0, -2.580_00, 15.366_12, 0.077_99),
    point(72.0, -2.910_00, 15.360_06, 0.084_92),
    point(84.0, -3.170_00, 15.509_83, 0.092_69),
    point(96.0, -3.030_00, 15.812_37, 0.102_40),
    point(108.0, -2.860_00, 16.202_90, 0.111_04),
    point(120.0, -2.690_00, 16.630_39, 0.119_88),
    point(132.0, -2.570_00, 17.218_54, 0.124_55),
    point(144.0, -2.420_00, 17.815_25, 0.129_42),
    point(156.0, -2.340_00, 18.451_71, 0.132_23),
    point(168.0, -2.240_00, 19.120_54, 0.133_03),
    point(180.0, -2.190_00, 19.837_45, 0.133_78),
    point(192.0, -2.120_00, 20.497_52, 0.133_45),
    point(204.0, -2.080_00, 21.151_38, 0.131_87),
    point(216.0, -2.080_00, 21.744_94, 0.131_09),
    point(228.0, -2.100_00, 22.255_73, 0.132_39),
    point(240.0, -2.100_00, 22.793_63, 0.133_86),
];

/// Female BMI-for-age checkpoints
pub const FEMALE_BMI_FOR_AGE: [LmsPoint; 19] = [
    point(24.0, -0.986_60, 16.423_39, 0.085_46),
    point(36.0, -2.187_50, 15.731_74, 0.078_74),
    point(48.0, -2.370_00, 15.336_41, 0.080_24),
    point(60.0, -2.710_00, 15.210_46, 0.087_28),
    point(72.0, -2.860_00, 15.231_68, 0.095_74),
    point(84.0, -2.750_00, 15.469_89, 0.106_91),
    point(96.0, -2.530_00, 15.836_87, 0.117_02),
    point(108.0, -2.320_00, 16.285_41, 0.128_84),
    point(120.0, -2.170_00, 16.839_67, 0.136_33),
    point(132.0, -2.090_00, 17.453_64, 0.142_63),
    point(144.0, -2.020_00, 18.030_45, 0.148_08),
    point(156.0, -2.010_00, 18.709_14, 0.150_27),
    point(168.0, -2.030_00, 19.338_97, 0.149_83),
    point(180.0, -2.070_00, 19.896_70, 0.149_97),
    point(192.0, -2.120_00, 20.447_33, 0.149_17),
    point(204.0, -2.210_00, 20.863_94, 0.148_11),
    point(216.0, -2.290_00, 21.265_02, 0.147_72),
    point(228.0, -2.325_00, 21.560_09, 0.148_92),
    point(240.0, -2.350_00, 21.755_12, 0.152_52),
];

/// Reference table for a sex column
#[must_use]
pub const fn bmi_for_age_table(sex: ReferenceSex) -> &'static [LmsPoint] {
    match sex {
        ReferenceSex::Male => &MALE_BMI_FOR_AGE,
        ReferenceSex::Female => &FEMALE_BMI_FOR_AGE,
    }
}
