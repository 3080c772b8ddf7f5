// ABOUTME: Core data models shared by the solver and its callers
// ABOUTME: Re-exports bread formula value records and the known-values tagged union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Bread formula models (`BreadRecipe`, `SolverInputs`, `KnownValues`, etc.)
pub mod bread;

pub use bread::{
    BakersPercentages, BreadRecipe, FlourBlendEntry, FlourComponent, KnownValues,
    KnownValuesType, PerLoafWeights, SolvedRecipe, SolverInputs,
};
