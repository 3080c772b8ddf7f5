// ABOUTME: Per-loaf calculator dividing a solved recipe evenly across loaves
// ABOUTME: Rounds each divided field to whole grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use levain_core::models::{BreadRecipe, PerLoafWeights};

use crate::rounding::round_grams;

/// Divide a recipe evenly across `loaf_count` loaves
///
/// A zero `loaf_count` is a caller error and is not guarded: the division
/// yields infinite or NaN weights.
#[must_use]
pub fn calculate_per_loaf_weights(recipe: &BreadRecipe, loaf_count: u32) -> PerLoafWeights {
    let loaves = f64::from(loaf_count);

    PerLoafWeights {
        flour_per_loaf: round_grams(recipe.flour_total / loaves),
        water_per_loaf: round_grams(recipe.water_total / loaves),
        salt_per_loaf: round_grams(recipe.salt_grams / loaves),
        levain_per_loaf: round_grams(recipe.levain_total / loaves),
        total_per_loaf: round_grams(recipe.dough_total / loaves),
    }
}
