// ABOUTME: Flour blend calculator expanding a flour total into named sub-flours
// ABOUTME: Resolves each blend percentage to whole grams in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use levain_core::models::{FlourBlendEntry, FlourComponent};

use crate::rounding::round_grams;

/// Resolve each blend component to grams of `flour_total`
///
/// No validation: a blend that does not sum to 100% simply yields grams that
/// do not sum to `flour_total`. Run the validator first if that matters.
#[must_use]
pub fn calculate_flour_blend(flour_total: f64, blend: &[FlourComponent]) -> Vec<FlourBlendEntry> {
    blend
        .iter()
        .map(|flour| FlourBlendEntry {
            name: flour.name.clone(),
            percentage: flour.percentage,
            grams: round_grams(flour_total * flour.percentage / 100.0),
        })
        .collect()
}

/// Sum of the resolved grams of a blend
#[must_use]
pub fn blend_total_grams(entries: &[FlourBlendEntry]) -> f64 {
    entries.iter().map(|entry| entry.grams).sum()
}
