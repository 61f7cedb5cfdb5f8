// ABOUTME: Growth history evaluation turning stored measurements into chart-ready points
// ABOUTME: Parallel per-measurement assessment with per-row rejection and a first-to-last trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

use crate::config::GrowthConfig;
use crate::models::Measurement;
use crate::percentile_calculator::{assess_measurement, BmiCategory};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

/// One assessed measurement on the growth chart
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    /// Date the measurement was taken
    pub measured_on: NaiveDate,
    /// Fractional age in years
    pub age_years: f64,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body mass index
    pub bmi: f64,
    /// Weight-status category
    pub category: BmiCategory,
    /// BMI-for-age percentile when on the child pathway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    /// Whether child thresholds were used
    pub is_child: bool,
}

/// A measurement that could not be assessed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedMeasurement {
    /// Position in the input slice
    pub index: usize,
    /// Date the measurement was taken
    pub measured_on: NaiveDate,
    /// Why it was rejected
    pub reason: String,
}

/// Change between the earliest and latest assessed points
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTrend {
    /// Earliest measurement date
    pub from: NaiveDate,
    /// Latest measurement date
    pub to: NaiveDate,
    /// BMI at the earliest point
    pub start_bmi: f64,
    /// BMI at the latest point
    pub end_bmi: f64,
    /// `end_bmi - start_bmi`
    pub bmi_change: f64,
    /// Percentile difference, only when both ends are on the child pathway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile_change: Option<f64>,
}

/// Evaluated growth history
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthHistory {
    /// Assessed points, oldest first
    pub points: Vec<GrowthPoint>,
    /// Measurements that failed validation, in input order
    pub rejected: Vec<RejectedMeasurement>,
    /// Trend across the assessed points, `None` with fewer than two points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<GrowthTrend>,
}

impl GrowthTrend {
    fn between(first: &GrowthPoint, last: &GrowthPoint) -> Self {
        let percentile_change = first
            .percentile
            .zip(last.percentile)
            .map(|(start, end)| end - start);
        Self {
            from: first.measured_on,
            to: last.measured_on,
            start_bmi: first.bmi,
            end_bmi: last.bmi,
            bmi_change: last.bmi - first.bmi,
            percentile_change,
        }
    }
}

/// Assess every measurement and order the results chronologically
///
/// Measurements are independent, so assessment runs in parallel. An invalid
/// measurement is recorded in `rejected` and does not abort the batch.
#[must_use]
pub fn evaluate_growth_history(
    measurements: &[Measurement],
    config: &GrowthConfig,
) -> GrowthHistory {
    let results: Vec<_> = measurements
        .par_iter()
        .enumerate()
        .map(|(index, measurement)| {
            assess_measurement(measurement, config)
                .map(|info| GrowthPoint {
                    measured_on: measurement.measured_on,
                    age_years: measurement.age_years(),
                    height_cm: measurement.height_cm,
                    weight_kg: measurement.weight_kg,
                    bmi: info.bmi,
                    category: info.category,
                    percentile: info.percentile,
                    is_child: info.is_child,
                })
                .map_err(|e| RejectedMeasurement {
                    index,
                    measured_on: measurement.measured_on,
                    reason: e.to_string(),
                })
        })
        .collect();

    let mut history = GrowthHistory::default();
    for result in results {
        match result {
            Ok(point) => history.points.push(point),
            Err(rejected) => {
                warn!(
                    index = rejected.index,
                    measured_on = %rejected.measured_on,
                    reason = %rejected.reason,
                    "Skipping invalid measurement"
                );
                history.rejected.push(rejected);
            }
        }
    }

    history.points.sort_by_key(|point| point.measured_on);

    if let [first, .., last] = history.points.as_slice() {
        history.trend = Some(GrowthTrend::between(first, last));
    }

    debug!(
        points = history.points.len(),
        rejected = history.rejected.len(),
        "Growth history evaluated"
    );
    history
}
