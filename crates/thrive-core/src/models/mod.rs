// ABOUTME: Core data models shared between the growth and nutrition engines
// ABOUTME: Re-exports measurement, sex, nutrient, and nutrient-total types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

/// Anthropometric measurements and biological sex
pub mod measurement;

/// Nutrient identifiers, categories, and measured daily totals
pub mod nutrition;

pub use measurement::{Measurement, Sex};
pub use nutrition::{Nutrient, NutrientCategory, NutrientTotals};
