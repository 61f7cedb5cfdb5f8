// ABOUTME: Criterion benchmarks for growth percentile and nutrient adequacy scoring
// ABOUTME: Measures single assessments, full-day analysis, and batched growth history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! Criterion benchmarks for the scoring engine.
//!
//! Measures LMS percentile lookups, whole-day nutrient analysis, and the
//! parallel growth history pipeline over growing measurement batches.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use thrive_engine::models::{Measurement, Nutrient, NutrientTotals, Sex};
use thrive_engine::{
    analyze_nutrition, calculate_bmi_percentile, evaluate_growth_history, get_bmi_category_info,
    get_recommendations, GrowthConfig, NutrientAnalysisConfig,
};

/// Measurement batch sizes for the growth history benchmark
const HISTORY_SIZES: [usize; 3] = [10, 100, 1000];

/// Generate monthly measurements for a child born in 2010
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_measurements(count: usize) -> Vec<Measurement> {
    let birth_date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default();
    let first_visit = birth_date + Duration::days(2 * 365);
    (0..count)
        .map(|index| {
            let months = (index % 180) as f64;
            let sex = if index % 2 == 0 { Sex::Male } else { Sex::Female };
            Measurement {
                height_cm: 0.5f64.mul_add(months, 85.0),
                weight_kg: 0.25f64.mul_add(months, 12.0) + (index % 7) as f64 * 0.3,
                sex,
                birth_date,
                measured_on: first_visit + Duration::days((index % 180) as i64 * 30),
            }
        })
        .collect()
}

/// A varied day of intake at 40-160% of each target
#[allow(clippy::cast_precision_loss)]
fn generate_totals(age_years: f64, sex: Sex) -> NutrientTotals {
    let targets = get_recommendations(age_years, sex, &NutrientAnalysisConfig::default());
    Nutrient::ALL
        .iter()
        .enumerate()
        .map(|(index, nutrient)| {
            let factor = 0.4 + ((index * 37) % 120) as f64 / 100.0;
            (*nutrient, targets.get(*nutrient) * factor)
        })
        .collect()
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmi_percentile");
    let config = GrowthConfig::default();

    group.bench_function("calculate_bmi_percentile", |b| {
        b.iter(|| {
            calculate_bmi_percentile(
                black_box(17.3),
                black_box(125.5),
                black_box(Sex::Female),
                &config,
            )
        });
    });

    group.bench_function("get_bmi_category_info_child", |b| {
        b.iter(|| {
            get_bmi_category_info(
                black_box(138.0),
                black_box(33.0),
                black_box(10.4),
                black_box(Sex::Male),
                &config,
            )
        });
    });

    group.bench_function("get_bmi_category_info_adult", |b| {
        b.iter(|| {
            get_bmi_category_info(
                black_box(170.0),
                black_box(65.0),
                black_box(30.0),
                black_box(Sex::Female),
                &config,
            )
        });
    });

    group.finish();
}

fn bench_nutrition_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("nutrition_analysis");
    let config = NutrientAnalysisConfig::default();

    group.bench_function("get_recommendations", |b| {
        b.iter(|| get_recommendations(black_box(11.5), black_box(Sex::Female), &config));
    });

    for (age, sex) in [(2.5, Sex::Male), (7.0, Sex::Female), (16.0, Sex::Male)] {
        let totals = generate_totals(age, sex);
        let targets = get_recommendations(age, sex, &config);
        group.bench_with_input(
            BenchmarkId::new("analyze_nutrition", format!("{age}y_{sex}")),
            &totals,
            |b, totals| {
                b.iter(|| analyze_nutrition(black_box(totals), &targets, &config));
            },
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_growth_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth_history");
    let config = GrowthConfig::default();

    for count in HISTORY_SIZES {
        let measurements = generate_measurements(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("evaluate_growth_history", count),
            &measurements,
            |b, measurements| {
                b.iter(|| evaluate_growth_history(black_box(measurements), &config));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_percentile,
    bench_nutrition_analysis,
    bench_growth_history
);
criterion_main!(benches);
