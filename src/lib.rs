// ABOUTME: Main library entry point for the Levain baking formula solver
// ABOUTME: Facade over levain-core and levain-formula plus logging setup for binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Levain
//!
//! A baker's-percentage recipe solver. Given any two known quantities of a
//! sourdough formula (flour, hydration, levain, dough total), it recovers
//! every other quantity in whole grams.
//!
//! ## Architecture
//!
//! - **`levain-core`**: errors, constants, and plain data models
//! - **`levain-formula`**: validator, solve strategies, router, calculators
//! - **this crate**: a single import surface plus logging for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use levain::formula::{solve_bread_recipe, KnownValues, SolverInputs};
//!
//! # fn main() -> levain::errors::AppResult<()> {
//! let known = KnownValues::FlourHydration {
//!     flour_total: 1000.0,
//!     hydration_percent: 75.0,
//! };
//! let solved = solve_bread_recipe(&known, &SolverInputs::default())?;
//!
//! assert_eq!(solved.recipe.dough_total, 1770.0);
//! assert_eq!(solved.recipe.levain_total, 400.0);
//! # Ok(())
//! # }
//! ```

/// Application constants and service identifiers
pub mod constants;

/// Unified error handling (re-exported from `levain-core`)
pub mod errors;

/// Baker's-percentage solver (re-exported from `levain-formula`)
pub mod formula;

/// Structured logging setup for binaries
pub mod logging;

/// Recipe data models (re-exported from `levain-core`)
pub mod models;
