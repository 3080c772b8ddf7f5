// ABOUTME: Preset factory for canned, known-good solver inputs
// ABOUTME: Builds Henry's Foolproof sourdough parameters from literal constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use levain_core::constants::presets::{
    HENRYS_FLOUR_BLEND, HENRYS_HYDRATION_PERCENT, HENRYS_LEVAIN_HYDRATION_PERCENT,
    HENRYS_LEVAIN_PERCENT, HENRYS_NUMBER_OF_LOAVES, HENRYS_PER_LOAF_WEIGHT_GRAMS,
    HENRYS_SALT_PERCENT,
};
use levain_core::models::{FlourComponent, SolverInputs};

/// Henry's Foolproof sourdough
///
/// 75% hydration, 2% salt, 20% levain at 100% hydration, one 900 g loaf,
/// 90% bread flour and 10% whole wheat.
#[must_use]
pub fn create_henrys_foolproof_preset() -> SolverInputs {
    SolverInputs {
        hydration_percent: HENRYS_HYDRATION_PERCENT,
        salt_percent: HENRYS_SALT_PERCENT,
        levain_percent: HENRYS_LEVAIN_PERCENT,
        levain_hydration: HENRYS_LEVAIN_HYDRATION_PERCENT,
        number_of_loaves: HENRYS_NUMBER_OF_LOAVES,
        per_loaf_weight: Some(HENRYS_PER_LOAF_WEIGHT_GRAMS),
        flour_blend: HENRYS_FLOUR_BLEND
            .iter()
            .map(|&(name, percentage)| FlourComponent::new(name, percentage))
            .collect(),
    }
}
