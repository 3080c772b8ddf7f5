// ABOUTME: The five algebraic inversions of the baker's-percentage system
// ABOUTME: One solver per pair of known quantities, each rounding every field to whole grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Solve Strategies
//!
//! Every percentage is relative to the total flour weight `F`:
//!
//! ```text
//! water       = F x H
//! salt        = F x S
//! levainFlour = F x L
//! levainWater = levainFlour x LH
//! doughTotal  = F + water + salt
//! ```
//!
//! where `H`, `S`, `L` and `LH` are hydration, salt, levain and levain
//! hydration divided by 100. Levain flour and water are part of `F` and
//! `water`, never added on top.
//!
//! Each strategy rounds every intermediate field as it goes. The resulting
//! drift (e.g. `solve_from_total_hydration` returning a dough total a gram or
//! two away from the target) is part of the observed numbers and must not be
//! "fixed" with a single final rounding pass.

use levain_core::constants::tolerances::LEVAIN_MISMATCH_PERCENT;
use levain_core::errors::{AppError, AppResult};
use levain_core::models::{BreadRecipe, SolvedRecipe, SolverInputs};
use tracing::debug;

use crate::rounding::{round_grams, round_to_tenth};

/// Baker's percentages of the inputs as fractions of flour weight
#[derive(Debug, Clone, Copy)]
struct Fractions {
    salt: f64,
    levain: f64,
    levain_hydration: f64,
}

impl Fractions {
    fn of(inputs: &SolverInputs) -> Self {
        Self {
            salt: inputs.salt_percent / 100.0,
            levain: inputs.levain_percent / 100.0,
            levain_hydration: inputs.levain_hydration / 100.0,
        }
    }

    /// Split a levain weight into its (flour, water) parts
    fn split_levain(&self, levain_total: f64) -> (f64, f64) {
        let levain_flour = round_grams(levain_total / (1.0 + self.levain_hydration));
        let levain_water = round_grams(levain_flour * self.levain_hydration);
        (levain_flour, levain_water)
    }

    /// Recover total flour from the flour inside the levain
    #[allow(clippy::float_cmp)] // Exact zero is the only undefined divisor
    fn flour_from_levain(&self, levain_flour: f64) -> AppResult<f64> {
        // Also catches -0.0
        if self.levain == 0.0 {
            return Err(AppError::value_out_of_range(
                "Levain percent must be non-zero to recover flour from levain weight",
            )
            .with_field("levainPercent"));
        }
        Ok(round_grams(levain_flour / self.levain))
    }
}

/// Fill in water, salt and levain from a known flour total and hydration
fn recipe_from_flour(flour_total: f64, hydration: f64, fractions: Fractions) -> BreadRecipe {
    let water_total = round_grams(flour_total * hydration);
    let salt_grams = round_grams(flour_total * fractions.salt);
    let levain_flour = round_grams(flour_total * fractions.levain);
    let levain_water = round_grams(levain_flour * fractions.levain_hydration);

    BreadRecipe {
        flour_total,
        water_total,
        salt_grams,
        levain_total: levain_flour + levain_water,
        levain_flour,
        levain_water,
        dough_total: flour_total + water_total + salt_grams,
    }
}

/// Solve from a known flour total and hydration
///
/// The direct direction of the formula; every other strategy reduces to the
/// same arithmetic once it has recovered a flour total.
///
/// # Arguments
/// * `flour_total` - Total flour in grams, levain flour included
/// * `hydration_percent` - Dough hydration (percent)
/// * `inputs` - Salt, levain and levain hydration percentages
#[must_use]
pub fn solve_from_flour_hydration(
    flour_total: f64,
    hydration_percent: f64,
    inputs: &SolverInputs,
) -> BreadRecipe {
    recipe_from_flour(flour_total, hydration_percent / 100.0, Fractions::of(inputs))
}

/// Solve from a known levain weight and hydration
///
/// Inverts `levain_total = levain_flour x (1 + LH)`, then recovers the flour
/// total from `levain_flour = F x L`.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` if the levain percent is zero, since
/// no flour total can be recovered from the levain in that case
pub fn solve_from_levain_hydration(
    levain_total: f64,
    hydration_percent: f64,
    inputs: &SolverInputs,
) -> AppResult<BreadRecipe> {
    let fractions = Fractions::of(inputs);
    let (levain_flour, levain_water) = fractions.split_levain(levain_total);
    let flour_total = fractions.flour_from_levain(levain_flour)?;

    // Levain parts come from the known levain weight, not from F x L
    Ok(BreadRecipe {
        levain_total: levain_flour + levain_water,
        levain_flour,
        levain_water,
        ..recipe_from_flour(flour_total, hydration_percent / 100.0, fractions)
    })
}

/// Solve from a target dough weight and hydration
///
/// Inverts `T = F x (1 + H + S)`. The returned `dough_total` is recomputed
/// from the rounded parts and may differ from `dough_total` by a few grams.
#[must_use]
pub fn solve_from_total_hydration(
    dough_total: f64,
    hydration_percent: f64,
    inputs: &SolverInputs,
) -> BreadRecipe {
    let fractions = Fractions::of(inputs);
    let hydration = hydration_percent / 100.0;
    let flour_total = round_grams(dough_total / (1.0 + hydration + fractions.salt));

    recipe_from_flour(flour_total, hydration, fractions)
}

/// Solve from a known flour total and levain weight
///
/// Hydration comes from `inputs`. When the levain weight implies a levain
/// percent more than half a point away from the configured one, the implied
/// percent (one decimal) is returned as `adjusted_levain_percent`. That is
/// advisory output, not an error.
#[must_use]
pub fn solve_from_flour_levain(
    flour_total: f64,
    levain_total: f64,
    inputs: &SolverInputs,
) -> SolvedRecipe {
    let fractions = Fractions::of(inputs);
    let (levain_flour, levain_water) = fractions.split_levain(levain_total);
    let water_total = round_grams(flour_total * (inputs.hydration_percent / 100.0));
    let salt_grams = round_grams(flour_total * fractions.salt);

    let actual_levain_percent = levain_flour / flour_total * 100.0;
    let adjusted_levain_percent = ((actual_levain_percent - inputs.levain_percent).abs()
        > LEVAIN_MISMATCH_PERCENT)
        .then(|| round_to_tenth(actual_levain_percent));

    if let Some(adjusted) = adjusted_levain_percent {
        debug!(
            configured = inputs.levain_percent,
            adjusted, "levain weight disagrees with configured levain percent"
        );
    }

    SolvedRecipe {
        recipe: BreadRecipe {
            flour_total,
            water_total,
            salt_grams,
            levain_total: levain_flour + levain_water,
            levain_flour,
            levain_water,
            dough_total: flour_total + water_total + salt_grams,
        },
        adjusted_levain_percent,
    }
}

/// Solve from a target dough weight and levain weight
///
/// Water is solved last as the residual `T - F - salt`, so the returned
/// dough total reproduces the target exactly at the cost of hydration
/// accuracy.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` if the levain percent is zero
pub fn solve_from_total_levain(
    dough_total: f64,
    levain_total: f64,
    inputs: &SolverInputs,
) -> AppResult<BreadRecipe> {
    let fractions = Fractions::of(inputs);
    let (levain_flour, levain_water) = fractions.split_levain(levain_total);
    let flour_total = fractions.flour_from_levain(levain_flour)?;
    let salt_grams = round_grams(flour_total * fractions.salt);
    let water_total = round_grams(dough_total - flour_total - salt_grams);

    Ok(BreadRecipe {
        flour_total,
        water_total,
        salt_grams,
        levain_total: levain_flour + levain_water,
        levain_flour,
        levain_water,
        dough_total: flour_total + water_total + salt_grams,
    })
}
