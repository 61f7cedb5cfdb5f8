// ABOUTME: Shared constants for unit conversion and environment-based configuration
// ABOUTME: Organized into small domain modules referenced by the engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

/// Unit conversion factors
pub mod units {
    /// Centimetres per metre
    pub const CM_PER_METER: f64 = 100.0;

    /// Months per year, used to convert ages for the LMS tables
    pub const MONTHS_PER_YEAR: f64 = 12.0;

    /// Average days per year including leap years
    pub const DAYS_PER_YEAR: f64 = 365.25;

    /// Percentage scale
    pub const PERCENT: f64 = 100.0;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Lower age bound (years, inclusive) of the child percentile path
    pub const CHILD_MIN_AGE_YEARS: &str = "THRIVE_CHILD_MIN_AGE_YEARS";

    /// Upper age bound (years, exclusive) of the child percentile path
    pub const CHILD_MAX_AGE_YEARS: &str = "THRIVE_CHILD_MAX_AGE_YEARS";

    /// Reference used for the "other" sex value
    pub const OTHER_SEX_POLICY: &str = "THRIVE_OTHER_SEX_POLICY";

    /// Length of the ranked deficiency/excess lists
    pub const TOP_LIST_LIMIT: &str = "THRIVE_TOP_LIST_LIMIT";

    /// Percentage above which a min-value nutrient counts as an excess
    pub const SECONDARY_EXCESS_PERCENTAGE: &str = "THRIVE_SECONDARY_EXCESS_PERCENTAGE";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Engine service name
    pub const THRIVE_ENGINE: &str = "thrive-engine";
}
