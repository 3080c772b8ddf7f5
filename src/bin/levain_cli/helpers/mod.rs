// ABOUTME: Helper modules for levain-cli
// ABOUTME: Terminal rendering of solved recipes and validation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod display;
