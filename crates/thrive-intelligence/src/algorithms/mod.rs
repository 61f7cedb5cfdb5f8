// ABOUTME: Statistical building blocks shared by the growth calculators
// ABOUTME: LMS interpolation and Z-score transform plus the standard normal CDF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

//! Algorithm Module
//!
//! Small pure functions over the fixed reference tables. Callers decide which
//! table to pass; nothing here knows about sex or age bands.

pub mod lms;
pub mod normal_cdf;

pub use lms::{interpolate_lms, LmsParameters, LmsPoint};
pub use normal_cdf::{normal_cdf, z_score_to_percentile};
