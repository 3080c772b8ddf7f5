// ABOUTME: Advisory range checks on baker's-percentage solver inputs
// ABOUTME: Reports every violation as a human-readable string, never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Input Validator
//!
//! Violations are advisory: the UI shows them as warnings, and nothing stops
//! a caller from solving with out-of-range inputs anyway. Each rule is
//! checked independently so the caller sees every problem at once.

use levain_core::constants::tolerances::BLEND_TARGET_PERCENT;
use levain_core::models::SolverInputs;
use tracing::debug;

use crate::config::{FormulaConfig, PercentRange, ValidationRangesConfig};

/// Validate inputs against the process-wide ranges
///
/// Returns an empty list when the inputs are within every range.
#[must_use]
pub fn validate_inputs(inputs: &SolverInputs) -> Vec<String> {
    validate_inputs_with(inputs, &FormulaConfig::global().validation)
}

/// Validate inputs against explicit ranges
#[must_use]
pub fn validate_inputs_with(inputs: &SolverInputs, ranges: &ValidationRangesConfig) -> Vec<String> {
    let mut violations = Vec::new();

    check_range(
        &mut violations,
        "Hydration",
        inputs.hydration_percent,
        ranges.hydration,
    );
    check_range(&mut violations, "Salt", inputs.salt_percent, ranges.salt);
    check_range(&mut violations, "Levain", inputs.levain_percent, ranges.levain);
    check_range(
        &mut violations,
        "Levain hydration",
        inputs.levain_hydration,
        ranges.levain_hydration,
    );

    if !inputs.flour_blend.is_empty() {
        let blend_sum: f64 = inputs.flour_blend.iter().map(|flour| flour.percentage).sum();
        if (blend_sum - BLEND_TARGET_PERCENT).abs() > ranges.blend_sum_tolerance {
            violations.push(format!(
                "Flour blend percentages must sum to 100% (currently {blend_sum:.1}%)"
            ));
        }
    }

    debug!(
        violation_count = violations.len(),
        "validated solver inputs"
    );

    violations
}

fn check_range(violations: &mut Vec<String>, label: &str, value: f64, range: PercentRange) {
    // NaN fails `contains` and is reported like any other out-of-range value
    if !range.contains(value) {
        violations.push(format!(
            "{label} must be between {}% and {}%",
            range.min, range.max
        ));
    }
}
