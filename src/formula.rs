// ABOUTME: Formula solver module re-exports from the levain-formula crate
// ABOUTME: Preserves crate::formula import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Formula Module
//!
//! Baker's-percentage recipe solving. This module re-exports the
//! `levain-formula` crate so callers depend on a single facade.

pub use levain_formula::*;

// Re-export submodules for path-based access (e.g., crate::formula::strategies::solve_from_flour_levain)
pub use levain_formula::{
    config, flour_blend, per_loaf, percentages, presets, rounding, solver, strategies, validation,
};
