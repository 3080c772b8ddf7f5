// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Baker's-percentage safe ranges, solver tolerances, and preset literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.
//! All percentages are baker's percentages (relative to total flour weight).

/// Safe/sane ranges used by the input validator
pub mod ranges {
    /// Minimum dough hydration (percent)
    pub const HYDRATION_MIN_PERCENT: f64 = 40.0;
    /// Maximum dough hydration (percent)
    pub const HYDRATION_MAX_PERCENT: f64 = 110.0;
    /// Minimum salt (percent)
    pub const SALT_MIN_PERCENT: f64 = 0.5;
    /// Maximum salt (percent)
    pub const SALT_MAX_PERCENT: f64 = 3.0;
    /// Minimum levain (percent)
    pub const LEVAIN_MIN_PERCENT: f64 = 0.0;
    /// Maximum levain (percent)
    pub const LEVAIN_MAX_PERCENT: f64 = 50.0;
    /// Minimum levain hydration (percent)
    pub const LEVAIN_HYDRATION_MIN_PERCENT: f64 = 50.0;
    /// Maximum levain hydration (percent)
    pub const LEVAIN_HYDRATION_MAX_PERCENT: f64 = 125.0;
}

/// Tolerances applied by the validator and the solve strategies
pub mod tolerances {
    /// Flour blend percentages must sum to this value
    pub const BLEND_TARGET_PERCENT: f64 = 100.0;
    /// Absolute tolerance on the flour blend sum (percentage points)
    pub const BLEND_SUM_TOLERANCE: f64 = 0.01;
    /// Implied vs configured levain percent difference that triggers an adjustment report
    pub const LEVAIN_MISMATCH_PERCENT: f64 = 0.5;
}

/// Default solver inputs used when the caller supplies nothing
pub mod defaults {
    /// Default dough hydration (percent)
    pub const HYDRATION_PERCENT: f64 = 75.0;
    /// Default salt (percent)
    pub const SALT_PERCENT: f64 = 2.0;
    /// Default levain (percent)
    pub const LEVAIN_PERCENT: f64 = 20.0;
    /// Default levain hydration (percent)
    pub const LEVAIN_HYDRATION_PERCENT: f64 = 100.0;
    /// Default loaf count
    pub const NUMBER_OF_LOAVES: u32 = 1;
}

/// Literal values of the canned presets
pub mod presets {
    /// Henry's Foolproof: hydration (percent)
    pub const HENRYS_HYDRATION_PERCENT: f64 = 75.0;
    /// Henry's Foolproof: salt (percent)
    pub const HENRYS_SALT_PERCENT: f64 = 2.0;
    /// Henry's Foolproof: levain (percent)
    pub const HENRYS_LEVAIN_PERCENT: f64 = 20.0;
    /// Henry's Foolproof: levain hydration (percent)
    pub const HENRYS_LEVAIN_HYDRATION_PERCENT: f64 = 100.0;
    /// Henry's Foolproof: loaf count
    pub const HENRYS_NUMBER_OF_LOAVES: u32 = 1;
    /// Henry's Foolproof: target weight per loaf (grams)
    pub const HENRYS_PER_LOAF_WEIGHT_GRAMS: f64 = 900.0;
    /// Henry's Foolproof: flour blend as (name, percent)
    pub const HENRYS_FLOUR_BLEND: [(&str, f64); 2] = [("Bread Flour", 90.0), ("Whole Wheat", 10.0)];
}
