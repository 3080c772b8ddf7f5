// ABOUTME: Validation range configuration for the formula solver
// ABOUTME: Defaults from levain-core constants with environment variable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Formula Configuration
//!
//! Only the advisory validator reads configuration; the solve strategies
//! never do, so a recipe is a function of its inputs alone.
//!
//! Overrides are read from `LEVAIN_*` environment variables once, on first
//! use of [`FormulaConfig::global`].

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use levain_core::constants::{ranges, tolerances};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static FORMULA_CONFIG: OnceLock<FormulaConfig> = OnceLock::new();

/// Inclusive range of acceptable percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    /// Lowest acceptable value (percent)
    pub min: f64,
    /// Highest acceptable value (percent)
    pub max: f64,
}

impl PercentRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range (bounds included)
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange(format!(
                "{name} min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Safe ranges checked by the input validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRangesConfig {
    /// Dough hydration range
    pub hydration: PercentRange,
    /// Salt range
    pub salt: PercentRange,
    /// Levain range
    pub levain: PercentRange,
    /// Levain hydration range
    pub levain_hydration: PercentRange,
    /// Absolute tolerance on a flour blend summing to 100%
    pub blend_sum_tolerance: f64,
}

impl Default for ValidationRangesConfig {
    fn default() -> Self {
        Self {
            hydration: PercentRange::new(ranges::HYDRATION_MIN_PERCENT, ranges::HYDRATION_MAX_PERCENT),
            salt: PercentRange::new(ranges::SALT_MIN_PERCENT, ranges::SALT_MAX_PERCENT),
            levain: PercentRange::new(ranges::LEVAIN_MIN_PERCENT, ranges::LEVAIN_MAX_PERCENT),
            levain_hydration: PercentRange::new(
                ranges::LEVAIN_HYDRATION_MIN_PERCENT,
                ranges::LEVAIN_HYDRATION_MAX_PERCENT,
            ),
            blend_sum_tolerance: tolerances::BLEND_SUM_TOLERANCE,
        }
    }
}

impl ValidationRangesConfig {
    /// Check that every range is ordered and the tolerance is usable
    ///
    /// # Errors
    ///
    /// Returns an error if a range is inverted or non-finite, or if the
    /// blend tolerance is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hydration.validate("hydration")?;
        self.salt.validate("salt")?;
        self.levain.validate("levain")?;
        self.levain_hydration.validate("levain_hydration")?;

        if !self.blend_sum_tolerance.is_finite() || self.blend_sum_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "blend_sum_tolerance must be a non-negative number, got {}",
                self.blend_sum_tolerance
            )));
        }

        Ok(())
    }
}

/// Main formula configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaConfig {
    /// Ranges used by the advisory validator
    pub validation: ValidationRangesConfig,
}

impl FormulaConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        FORMULA_CONFIG.get_or_init(Self::load_or_default)
    }

    /// Load configuration, falling back to defaults when loading fails
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load formula config: {}, using defaults", e);
            Self::default()
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable does not parse or the
    /// resulting ranges fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validation.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let ranges = &mut self.validation;

        Self::apply_env_var("LEVAIN_HYDRATION_MIN", &mut ranges.hydration.min)?;
        Self::apply_env_var("LEVAIN_HYDRATION_MAX", &mut ranges.hydration.max)?;
        Self::apply_env_var("LEVAIN_SALT_MIN", &mut ranges.salt.min)?;
        Self::apply_env_var("LEVAIN_SALT_MAX", &mut ranges.salt.max)?;
        Self::apply_env_var("LEVAIN_LEVAIN_MIN", &mut ranges.levain.min)?;
        Self::apply_env_var("LEVAIN_LEVAIN_MAX", &mut ranges.levain.max)?;
        Self::apply_env_var(
            "LEVAIN_LEVAIN_HYDRATION_MIN",
            &mut ranges.levain_hydration.min,
        )?;
        Self::apply_env_var(
            "LEVAIN_LEVAIN_HYDRATION_MAX",
            &mut ranges.levain_hydration.max,
        )?;
        Self::apply_env_var("LEVAIN_BLEND_TOLERANCE", &mut ranges.blend_sum_tolerance)?;

        Ok(self)
    }
}
