// ABOUTME: Core types and constants for the Thrive growth and nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

#![deny(unsafe_code)]

//! # Thrive Core
//!
//! Foundation crate providing shared types and constants for the Thrive growth
//! and nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Unit conversions and environment variable names
//! - **models**: Anthropometric measurements, sex, nutrients, and nutrient totals

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Measurement, Sex, Nutrient, NutrientTotals)
pub mod models;
