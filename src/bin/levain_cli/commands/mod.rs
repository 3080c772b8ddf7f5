// ABOUTME: Command implementations for levain-cli
// ABOUTME: Each submodule handles one family of subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod recipe;
