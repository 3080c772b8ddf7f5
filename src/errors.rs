// ABOUTME: Error types re-exported from levain-core
// ABOUTME: Preserves the crate::errors path for the facade crate and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling System
//!
//! See `levain_core::errors` for the definitions.

pub use levain_core::errors::*;
