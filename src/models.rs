// ABOUTME: Data models re-exported from levain-core
// ABOUTME: Plain value records for recipes, solver inputs, and known-value pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub use levain_core::models::*;
