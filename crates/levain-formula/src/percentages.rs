// ABOUTME: Effective baker's percentages of a solved recipe after rounding
// ABOUTME: Reports achieved hydration, salt, levain, and levain hydration to one decimal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use levain_core::models::{BakersPercentages, BreadRecipe};

use crate::rounding::round_to_tenth;

/// Baker's percentages actually achieved by `recipe`
///
/// Useful after `solve_from_total_levain`, which gives up hydration accuracy
/// to hit the dough total. A zero flour total (or zero levain flour) yields
/// non-finite percentages.
#[must_use]
pub fn calculate_bakers_percentages(recipe: &BreadRecipe) -> BakersPercentages {
    let of_flour = |grams: f64| round_to_tenth(grams / recipe.flour_total * 100.0);

    BakersPercentages {
        hydration_percent: of_flour(recipe.water_total),
        salt_percent: of_flour(recipe.salt_grams),
        levain_percent: of_flour(recipe.levain_flour),
        levain_hydration: round_to_tenth(recipe.levain_water / recipe.levain_flour * 100.0),
    }
}
