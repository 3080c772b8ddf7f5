// ABOUTME: Recipe command implementations for solve, validate, and preset
// ABOUTME: Runs the solver and renders the report as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use levain::errors::AppResult;
use levain::formula::{
    calculate_bakers_percentages, calculate_flour_blend, calculate_per_loaf_weights,
    create_henrys_foolproof_preset, solve_bread_recipe_tagged, validate_inputs,
};
use levain::models::{
    BakersPercentages, BreadRecipe, FlourBlendEntry, PerLoafWeights, SolverInputs,
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::args::OutputFormat;
use crate::helpers::display;

/// Everything derived from one solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub recipe: BreadRecipe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_levain_percent: Option<f64>,
    pub bakers_percentages: BakersPercentages,
    pub flour_blend: Vec<FlourBlendEntry>,
    pub number_of_loaves: u32,
    pub per_loaf: PerLoafWeights,
    pub warnings: Vec<String>,
}

/// Solve from a tagged known pair and print the report
///
/// Validation violations are reported as warnings; the solve still runs.
pub fn solve(
    known: &str,
    value1: f64,
    value2: f64,
    inputs: &SolverInputs,
    format: OutputFormat,
) -> AppResult<()> {
    let warnings = validate_inputs(inputs);
    for violation in &warnings {
        warn!(violation = %violation, "Recipe input outside recommended range");
    }

    let solved = solve_bread_recipe_tagged(known, value1, value2, inputs)?;
    let recipe = solved.recipe;

    let report = SolveReport {
        recipe,
        adjusted_levain_percent: solved.adjusted_levain_percent,
        bakers_percentages: calculate_bakers_percentages(&recipe),
        flour_blend: calculate_flour_blend(recipe.flour_total, &inputs.flour_blend),
        number_of_loaves: inputs.number_of_loaves,
        per_loaf: calculate_per_loaf_weights(&recipe, inputs.number_of_loaves),
        warnings,
    };

    info!(
        known = %known,
        dough_total = report.recipe.dough_total,
        "Recipe solved"
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => display::display_solve_report(&report),
    }

    Ok(())
}

/// Validate inputs and print the violations; returns `true` when clean
pub fn validate(inputs: &SolverInputs, format: OutputFormat) -> AppResult<bool> {
    let violations = validate_inputs(inputs);

    match format {
        OutputFormat::Json => {
            let body = json!({
                "valid": violations.is_empty(),
                "errors": violations,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => display::display_validation(&violations),
    }

    Ok(violations.is_empty())
}

/// Print the Henry's Foolproof preset
pub fn preset(format: OutputFormat) -> AppResult<()> {
    let inputs = create_henrys_foolproof_preset();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inputs)?),
        OutputFormat::Text => display::display_inputs("Henry's Foolproof", &inputs),
    }

    Ok(())
}
