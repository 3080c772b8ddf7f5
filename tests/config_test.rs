// ABOUTME: Integration tests for validation range configuration loaded from LEVAIN_* variables
// ABOUTME: Runs serially because every test mutates the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use levain::errors::{AppError, ErrorCode};
use levain::formula::config::{ConfigError, FormulaConfig, ValidationRangesConfig};
use levain::formula::validate_inputs_with;
use serial_test::serial;

mod common;

use common::inputs_with;

#[test]
#[serial]
fn test_env_widens_hydration_range() {
    common::init_test_logging();

    env::set_var("LEVAIN_HYDRATION_MAX", "130");
    env::set_var("LEVAIN_BLEND_TOLERANCE", "0.5");
    let config = FormulaConfig::load();
    env::remove_var("LEVAIN_HYDRATION_MAX");
    env::remove_var("LEVAIN_BLEND_TOLERANCE");

    let config = config.unwrap();
    assert!((config.validation.hydration.max - 130.0).abs() < f64::EPSILON);
    assert!((config.validation.blend_sum_tolerance - 0.5).abs() < f64::EPSILON);

    let inputs = inputs_with(|i| i.hydration_percent = 120.0);
    assert!(validate_inputs_with(&inputs, &config.validation).is_empty());
}

#[test]
#[serial]
fn test_env_without_overrides_matches_defaults() {
    let config = FormulaConfig::load().unwrap();
    assert_eq!(config.validation, ValidationRangesConfig::default());
}

#[test]
#[serial]
fn test_unparsable_env_value_fails_load() {
    env::set_var("LEVAIN_LEVAIN_HYDRATION_MIN", "stiff");
    let result = FormulaConfig::load();
    env::remove_var("LEVAIN_LEVAIN_HYDRATION_MIN");

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains("LEVAIN_LEVAIN_HYDRATION_MIN"));
}

#[test]
#[serial]
fn test_config_error_maps_to_config_invalid() {
    env::set_var("LEVAIN_SALT_MAX", "0.1");
    let result = FormulaConfig::load();
    env::remove_var("LEVAIN_SALT_MAX");

    let error: AppError = result.unwrap_err().into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
#[serial]
fn test_fallback_discards_invalid_environment() {
    env::set_var("LEVAIN_LEVAIN_MIN", "60");
    let fallback = FormulaConfig::load_or_default();
    env::remove_var("LEVAIN_LEVAIN_MIN");

    assert_eq!(fallback, FormulaConfig::default());
}

#[test]
#[serial]
fn test_fallback_keeps_valid_environment() {
    env::set_var("LEVAIN_HYDRATION_MAX", "125");
    let config = FormulaConfig::load_or_default();
    env::remove_var("LEVAIN_HYDRATION_MAX");

    assert!((config.validation.hydration.max - 125.0).abs() < f64::EPSILON);
}
