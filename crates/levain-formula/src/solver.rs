// ABOUTME: Solver router dispatching a known-values pair to its solve strategy
// ABOUTME: Applies the per-loaf target override before dispatch for dough-total pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Solver Router
//!
//! The variant of [`KnownValues`] selects the strategy, so an unknown
//! strategy cannot reach this module through the typed API. Callers that
//! hold an untyped `(type, value1, value2)` record go through
//! [`solve_bread_recipe_tagged`], which fails on an unrecognized tag.

use levain_core::errors::AppResult;
use levain_core::models::{KnownValues, SolvedRecipe, SolverInputs};
use tracing::debug;

use crate::strategies::{
    solve_from_flour_hydration, solve_from_flour_levain, solve_from_levain_hydration,
    solve_from_total_hydration, solve_from_total_levain,
};

/// Solve a recipe from any supported pair of known quantities
///
/// When `inputs.per_loaf_weight` is set, `number_of_loaves x per_loaf_weight`
/// replaces the dough total of `TotalHydration` and `TotalLevain` pairs,
/// whatever total the caller passed.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` if a levain-based strategy is asked
/// to recover flour with a zero levain percent
pub fn solve_bread_recipe(known: &KnownValues, inputs: &SolverInputs) -> AppResult<SolvedRecipe> {
    let known = apply_per_loaf_target(*known, inputs);

    debug!(
        strategy = known.kind().as_str(),
        value1 = known.value1(),
        value2 = known.value2(),
        "solving bread recipe"
    );

    match known {
        KnownValues::FlourHydration {
            flour_total,
            hydration_percent,
        } => Ok(SolvedRecipe::plain(solve_from_flour_hydration(
            flour_total,
            hydration_percent,
            inputs,
        ))),
        KnownValues::LevainHydration {
            levain_total,
            hydration_percent,
        } => solve_from_levain_hydration(levain_total, hydration_percent, inputs)
            .map(SolvedRecipe::plain),
        KnownValues::TotalHydration {
            dough_total,
            hydration_percent,
        } => Ok(SolvedRecipe::plain(solve_from_total_hydration(
            dough_total,
            hydration_percent,
            inputs,
        ))),
        KnownValues::FlourLevain {
            flour_total,
            levain_total,
        } => Ok(solve_from_flour_levain(flour_total, levain_total, inputs)),
        KnownValues::TotalLevain {
            dough_total,
            levain_total,
        } => solve_from_total_levain(dough_total, levain_total, inputs).map(SolvedRecipe::plain),
    }
}

/// Solve a recipe from an untyped `(type, value1, value2)` record
///
/// # Errors
///
/// Returns `ErrorCode::InvalidKnownValuesType` if `tag` is not one of
/// `flour-hydration`, `levain-hydration`, `total-hydration`, `flour-levain`,
/// `total-levain`, and otherwise the errors of [`solve_bread_recipe`]
pub fn solve_bread_recipe_tagged(
    tag: &str,
    value1: f64,
    value2: f64,
    inputs: &SolverInputs,
) -> AppResult<SolvedRecipe> {
    let known = KnownValues::from_tagged(tag, value1, value2)?;
    solve_bread_recipe(&known, inputs)
}

fn apply_per_loaf_target(known: KnownValues, inputs: &SolverInputs) -> KnownValues {
    let kind = known.kind();
    let Some(target_total) = inputs.per_loaf_target_total() else {
        return known;
    };
    if !kind.has_dough_total() {
        return known;
    }

    // Both dough-total pairs carry the total as value1
    debug!(
        requested = known.value1(),
        target_total, "per-loaf target overrides dough total"
    );
    KnownValues::from_kind(kind, target_total, known.value2())
}
