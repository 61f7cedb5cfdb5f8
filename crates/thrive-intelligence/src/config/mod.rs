// ABOUTME: Configuration module for thrive-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

/// Engine configuration (growth pathway, nutrient analysis, sex fallback policy)
pub mod intelligence;

pub use intelligence::{
    ConfigError, EngineConfig, GrowthConfig, NutrientAnalysisConfig, OtherSexPolicy, ReferenceSex,
};
