// ABOUTME: Application constants for the Levain facade crate and binaries
// ABOUTME: Re-exports baking constants from levain-core and adds service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Constants Module
//!
//! Baking constants live in `levain-core`; this module re-exports them and
//! adds the identifiers used by logging.

pub use levain_core::constants::*;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line solver
    pub const LEVAIN_CLI: &str = "levain-cli";
}
