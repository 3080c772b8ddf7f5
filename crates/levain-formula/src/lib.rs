// ABOUTME: Baker's-percentage formula solver for sourdough bread recipes
// ABOUTME: Validator, five algebraic solve strategies, router, blend and per-loaf calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Levain Formula
//!
//! Given any two known quantities of a consistent baking formula, recovers
//! every other quantity in whole grams.
//!
//! ```text
//! caller -> validate_inputs (advisory)
//!        -> solve_bread_recipe -> one of five strategies
//!        -> calculate_flour_blend / calculate_per_loaf_weights
//! ```
//!
//! Every operation is a pure function of its arguments. The only shared
//! state is the read-only validation range configuration.

/// Validation range configuration loaded from the environment
pub mod config;
/// Flour blend expansion into grams per named flour
pub mod flour_blend;
/// Effective baker's percentages of a solved recipe
pub mod percentages;
/// Per-loaf division of a solved recipe
pub mod per_loaf;
/// Canned, known-good parameter sets
pub mod presets;
/// Whole-gram rounding shared by every calculator
pub mod rounding;
/// Tag-dispatching solver entry point
pub mod solver;
/// The five algebraic inversions
pub mod strategies;
/// Advisory range checks on solver inputs
pub mod validation;

pub use config::{ConfigError, FormulaConfig, ValidationRangesConfig};
pub use flour_blend::{blend_total_grams, calculate_flour_blend};
pub use percentages::calculate_bakers_percentages;
pub use per_loaf::calculate_per_loaf_weights;
pub use presets::create_henrys_foolproof_preset;
pub use rounding::{round_grams, round_to_tenth};
pub use solver::{solve_bread_recipe, solve_bread_recipe_tagged};
pub use strategies::{
    solve_from_flour_hydration, solve_from_flour_levain, solve_from_levain_hydration,
    solve_from_total_hydration, solve_from_total_levain,
};
pub use validation::{validate_inputs, validate_inputs_with};

pub use levain_core::models::{
    BakersPercentages, BreadRecipe, FlourBlendEntry, FlourComponent, KnownValues,
    KnownValuesType, PerLoafWeights, SolvedRecipe, SolverInputs,
};
