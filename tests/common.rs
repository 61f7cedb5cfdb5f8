// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, measurement builders, and nutrient total fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `thrive_engine`

use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use thrive_engine::models::{Measurement, Nutrient, NutrientTotals, Sex};
use thrive_engine::NutritionRecommendation;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Measurement taken on `measured_on` for a child born on `birth_date`
pub fn measurement(
    height_cm: f64,
    weight_kg: f64,
    sex: Sex,
    birth_date: NaiveDate,
    measured_on: NaiveDate,
) -> Measurement {
    Measurement {
        height_cm,
        weight_kg,
        sex,
        birth_date,
        measured_on,
    }
}

/// Height (cm) giving `bmi` for `weight_kg`
pub fn height_for_bmi(bmi: f64, weight_kg: f64) -> f64 {
    (weight_kg / bmi).sqrt() * 100.0
}

/// Every nutrient measured at exactly its target
pub fn totals_at_target(targets: &NutritionRecommendation) -> NutrientTotals {
    Nutrient::ALL
        .iter()
        .map(|nutrient| (*nutrient, targets.get(*nutrient)))
        .collect()
}

/// Every nutrient measured at a percentage of its target
pub fn totals_at_percent(targets: &NutritionRecommendation, percent: f64) -> NutrientTotals {
    Nutrient::ALL
        .iter()
        .map(|nutrient| (*nutrient, targets.get(*nutrient) * percent / 100.0))
        .collect()
}
