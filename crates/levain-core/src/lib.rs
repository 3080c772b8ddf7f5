// ABOUTME: Core types and constants for the Levain baker's-percentage solver
// ABOUTME: Foundation crate with error handling, baking constants, and recipe models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Levain Core
//!
//! Foundation crate providing shared types and constants for the Levain
//! baking formula solver. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Baker's-percentage ranges, tolerances, and preset literals
//! - **models**: Plain value records exchanged with the solver

/// Unified error handling system with standard error codes
pub mod errors;

/// Baking constants organized by domain
pub mod constants;

/// Core data models (`BreadRecipe`, `SolverInputs`, `KnownValues`, etc.)
pub mod models;
