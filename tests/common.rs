// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and canonical solver inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::float_cmp
)]
//! Shared test utilities for `levain`

use levain::models::{BreadRecipe, SolverInputs};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 75% hydration, 2% salt, 20% levain at 100% levain hydration, one loaf
pub fn default_inputs() -> SolverInputs {
    SolverInputs::default()
}

/// Default inputs with one field changed through a closure
pub fn inputs_with(edit: impl FnOnce(&mut SolverInputs)) -> SolverInputs {
    let mut inputs = SolverInputs::default();
    edit(&mut inputs);
    inputs
}

/// The recipe every strategy should agree on for the default inputs
pub const REFERENCE_RECIPE: BreadRecipe = BreadRecipe {
    flour_total: 1000.0,
    water_total: 750.0,
    salt_grams: 20.0,
    levain_total: 400.0,
    levain_flour: 200.0,
    levain_water: 200.0,
    dough_total: 1770.0,
};

/// Assert two recipes match field by field
pub fn assert_recipe_eq(actual: &BreadRecipe, expected: &BreadRecipe) {
    assert_eq!(actual.flour_total, expected.flour_total, "flour_total");
    assert_eq!(actual.water_total, expected.water_total, "water_total");
    assert_eq!(actual.salt_grams, expected.salt_grams, "salt_grams");
    assert_eq!(actual.levain_total, expected.levain_total, "levain_total");
    assert_eq!(actual.levain_flour, expected.levain_flour, "levain_flour");
    assert_eq!(actual.levain_water, expected.levain_water, "levain_water");
    assert_eq!(actual.dough_total, expected.dough_total, "dough_total");
}

/// Whole-gram check for every field
pub fn assert_whole_grams(recipe: &BreadRecipe) {
    for (name, value) in [
        ("flour_total", recipe.flour_total),
        ("water_total", recipe.water_total),
        ("salt_grams", recipe.salt_grams),
        ("levain_total", recipe.levain_total),
        ("levain_flour", recipe.levain_flour),
        ("levain_water", recipe.levain_water),
        ("dough_total", recipe.dough_total),
    ] {
        assert_eq!(value.fract(), 0.0, "{name} should be whole grams, got {value}");
    }
}
