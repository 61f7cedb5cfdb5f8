// ABOUTME: Standard normal cumulative distribution via the Zelen-Severo approximation
// ABOUTME: Converts Z-scores into percentiles clamped to the 0-100 range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use crate::constants::units::PERCENT;
use crate::physiological_constants::normal_distribution::{
    B1, B2, B3, B4, B5, INV_SQRT_2PI, P,
};

/// Standard normal CDF, Φ(z)
///
/// Abramowitz & Stegun 26.2.17, absolute error below 7.5e-8. Non-finite
/// input saturates: `+inf` gives 1, `-inf` gives 0, NaN stays NaN.
#[must_use]
pub fn normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z.is_infinite() {
        return if z > 0.0 { 1.0 } else { 0.0 };
    }

    let x = z.abs();
    let t = 1.0 / P.mul_add(x, 1.0);
    let poly = t * B5.mul_add(t, B4).mul_add(t, B3).mul_add(t, B2).mul_add(t, B1);
    let density = INV_SQRT_2PI * (-0.5 * x * x).exp();
    let upper_tail = density * poly;

    if z >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

/// Percentile (0-100) of a Z-score, clamped
#[must_use]
pub fn z_score_to_percentile(z: f64) -> f64 {
    (normal_cdf(z) * PERCENT).clamp(0.0, PERCENT)
}
