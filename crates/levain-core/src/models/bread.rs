// ABOUTME: Bread formula models exchanged between the solver and the UI layer
// ABOUTME: FlourComponent, BreadRecipe, SolverInputs, KnownValues, and solver outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Bread Formula Models
//!
//! Plain immutable value records. Every percentage is a baker's percentage,
//! i.e. relative to the total flour weight (the 100% base). Levain flour and
//! water are carved out of the total flour and water, never added on top.
//!
//! All records serialize with `camelCase` field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};

/// A named fraction of the total flour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlourComponent {
    /// Flour name (e.g. "Bread Flour")
    pub name: String,
    /// Share of the total flour (percent)
    pub percentage: f64,
}

impl FlourComponent {
    /// Create a blend component
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }
}

/// A blend component with its weight resolved against a flour total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlourBlendEntry {
    /// Flour name
    pub name: String,
    /// Share of the total flour (percent)
    pub percentage: f64,
    /// Resolved weight (whole grams)
    pub grams: f64,
}

/// Solver output: every quantity of the formula in whole grams
///
/// `levain_flour` and `levain_water` are already part of `flour_total` and
/// `water_total`; `dough_total` is `flour_total + water_total + salt_grams`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadRecipe {
    /// Total flour, including the flour inside the levain
    pub flour_total: f64,
    /// Total water, including the water inside the levain
    pub water_total: f64,
    /// Salt
    pub salt_grams: f64,
    /// Levain weight (`levain_flour + levain_water`)
    pub levain_total: f64,
    /// Flour portion of the levain
    pub levain_flour: f64,
    /// Water portion of the levain
    pub levain_water: f64,
    /// Total dough weight
    pub dough_total: f64,
}

/// Baker's-percentage parameters for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverInputs {
    /// Water as a percentage of flour
    pub hydration_percent: f64,
    /// Salt as a percentage of flour
    pub salt_percent: f64,
    /// Levain flour as a percentage of total flour
    pub levain_percent: f64,
    /// Water-to-flour ratio inside the levain (percent)
    pub levain_hydration: f64,
    /// Number of loaves the dough is divided into
    pub number_of_loaves: u32,
    /// Target weight per loaf; overrides any dough total when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_loaf_weight: Option<f64>,
    /// Optional split of the total flour into named flours
    #[serde(default)]
    pub flour_blend: Vec<FlourComponent>,
}

impl Default for SolverInputs {
    fn default() -> Self {
        Self {
            hydration_percent: defaults::HYDRATION_PERCENT,
            salt_percent: defaults::SALT_PERCENT,
            levain_percent: defaults::LEVAIN_PERCENT,
            levain_hydration: defaults::LEVAIN_HYDRATION_PERCENT,
            number_of_loaves: defaults::NUMBER_OF_LOAVES,
            per_loaf_weight: None,
            flour_blend: Vec::new(),
        }
    }
}

impl SolverInputs {
    /// Dough total implied by the per-loaf target, if one is set
    #[must_use]
    pub fn per_loaf_target_total(&self) -> Option<f64> {
        self.per_loaf_weight
            .map(|weight| f64::from(self.number_of_loaves) * weight)
    }
}

/// Tag naming which pair of quantities is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KnownValuesType {
    /// Flour total and hydration
    FlourHydration,
    /// Levain total and hydration
    LevainHydration,
    /// Dough total and hydration
    TotalHydration,
    /// Flour total and levain total
    FlourLevain,
    /// Dough total and levain total
    TotalLevain,
}

impl KnownValuesType {
    /// Every recognized tag
    pub const ALL: [Self; 5] = [
        Self::FlourHydration,
        Self::LevainHydration,
        Self::TotalHydration,
        Self::FlourLevain,
        Self::TotalLevain,
    ];

    /// Wire name of the tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FlourHydration => "flour-hydration",
            Self::LevainHydration => "levain-hydration",
            Self::TotalHydration => "total-hydration",
            Self::FlourLevain => "flour-levain",
            Self::TotalLevain => "total-levain",
        }
    }

    /// Whether the known pair includes a dough total
    #[must_use]
    pub const fn has_dough_total(&self) -> bool {
        matches!(self, Self::TotalHydration | Self::TotalLevain)
    }
}

impl fmt::Display for KnownValuesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownValuesType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::invalid_known_values_type(s))
    }
}

/// The two known quantities and, through the variant, the solve strategy
///
/// Weights are in grams, hydration in percent. On the wire this is the
/// untyped record `{ "type": "...", "value1": ..., "value2": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaggedKnownValues", into = "TaggedKnownValues")]
pub enum KnownValues {
    /// Known flour total and hydration
    FlourHydration {
        /// Total flour (grams)
        flour_total: f64,
        /// Dough hydration (percent)
        hydration_percent: f64,
    },
    /// Known levain total and hydration
    LevainHydration {
        /// Levain weight (grams)
        levain_total: f64,
        /// Dough hydration (percent)
        hydration_percent: f64,
    },
    /// Known dough total and hydration
    TotalHydration {
        /// Target dough weight (grams)
        dough_total: f64,
        /// Dough hydration (percent)
        hydration_percent: f64,
    },
    /// Known flour total and levain total
    FlourLevain {
        /// Total flour (grams)
        flour_total: f64,
        /// Levain weight (grams)
        levain_total: f64,
    },
    /// Known dough total and levain total
    TotalLevain {
        /// Target dough weight (grams)
        dough_total: f64,
        /// Levain weight (grams)
        levain_total: f64,
    },
}

impl KnownValues {
    /// Build from an untyped `(type, value1, value2)` record
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidKnownValuesType` if `tag` names no strategy
    pub fn from_tagged(tag: &str, value1: f64, value2: f64) -> AppResult<Self> {
        let kind: KnownValuesType = tag.parse()?;
        Ok(Self::from_kind(kind, value1, value2))
    }

    /// Build from an already-parsed tag
    #[must_use]
    pub const fn from_kind(kind: KnownValuesType, value1: f64, value2: f64) -> Self {
        match kind {
            KnownValuesType::FlourHydration => Self::FlourHydration {
                flour_total: value1,
                hydration_percent: value2,
            },
            KnownValuesType::LevainHydration => Self::LevainHydration {
                levain_total: value1,
                hydration_percent: value2,
            },
            KnownValuesType::TotalHydration => Self::TotalHydration {
                dough_total: value1,
                hydration_percent: value2,
            },
            KnownValuesType::FlourLevain => Self::FlourLevain {
                flour_total: value1,
                levain_total: value2,
            },
            KnownValuesType::TotalLevain => Self::TotalLevain {
                dough_total: value1,
                levain_total: value2,
            },
        }
    }

    /// Tag of this known pair
    #[must_use]
    pub const fn kind(&self) -> KnownValuesType {
        match self {
            Self::FlourHydration { .. } => KnownValuesType::FlourHydration,
            Self::LevainHydration { .. } => KnownValuesType::LevainHydration,
            Self::TotalHydration { .. } => KnownValuesType::TotalHydration,
            Self::FlourLevain { .. } => KnownValuesType::FlourLevain,
            Self::TotalLevain { .. } => KnownValuesType::TotalLevain,
        }
    }

    /// First known quantity, in wire order
    #[must_use]
    pub const fn value1(&self) -> f64 {
        match *self {
            Self::FlourHydration { flour_total, .. } | Self::FlourLevain { flour_total, .. } => {
                flour_total
            }
            Self::LevainHydration { levain_total, .. } => levain_total,
            Self::TotalHydration { dough_total, .. } | Self::TotalLevain { dough_total, .. } => {
                dough_total
            }
        }
    }

    /// Second known quantity, in wire order
    #[must_use]
    pub const fn value2(&self) -> f64 {
        match *self {
            Self::FlourHydration {
                hydration_percent, ..
            }
            | Self::LevainHydration {
                hydration_percent, ..
            }
            | Self::TotalHydration {
                hydration_percent, ..
            } => hydration_percent,
            Self::FlourLevain { levain_total, .. } | Self::TotalLevain { levain_total, .. } => {
                levain_total
            }
        }
    }
}

/// Wire shape of `KnownValues`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaggedKnownValues {
    #[serde(rename = "type")]
    kind: String,
    value1: f64,
    value2: f64,
}

impl TryFrom<TaggedKnownValues> for KnownValues {
    type Error = AppError;

    fn try_from(tagged: TaggedKnownValues) -> Result<Self, Self::Error> {
        Self::from_tagged(&tagged.kind, tagged.value1, tagged.value2)
    }
}

impl From<KnownValues> for TaggedKnownValues {
    fn from(known: KnownValues) -> Self {
        Self {
            kind: known.kind().as_str().to_owned(),
            value1: known.value1(),
            value2: known.value2(),
        }
    }
}

/// Router output: the recipe plus any advisory levain adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedRecipe {
    /// The solved recipe
    pub recipe: BreadRecipe,
    /// Levain percent actually implied by the inputs, when it disagrees with the configured one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_levain_percent: Option<f64>,
}

impl SolvedRecipe {
    /// Wrap a recipe with no advisory output
    #[must_use]
    pub const fn plain(recipe: BreadRecipe) -> Self {
        Self {
            recipe,
            adjusted_levain_percent: None,
        }
    }
}

/// A recipe divided evenly across loaves (whole grams)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerLoafWeights {
    /// Flour per loaf
    pub flour_per_loaf: f64,
    /// Water per loaf
    pub water_per_loaf: f64,
    /// Salt per loaf
    pub salt_per_loaf: f64,
    /// Levain per loaf
    pub levain_per_loaf: f64,
    /// Dough per loaf
    pub total_per_loaf: f64,
}

/// Effective baker's percentages of a solved recipe (one decimal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakersPercentages {
    /// Water relative to flour
    pub hydration_percent: f64,
    /// Salt relative to flour
    pub salt_percent: f64,
    /// Levain flour relative to flour
    pub levain_percent: f64,
    /// Levain water relative to levain flour
    pub levain_hydration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_wire_shape() {
        let known = KnownValues::TotalLevain {
            dough_total: 1800.0,
            levain_total: 360.0,
        };
        let json = serde_json::to_value(known).unwrap();

        assert_eq!(json["type"], "total-levain");
        assert_eq!(json["value1"], 1800.0);
        assert_eq!(json["value2"], 360.0);

        let parsed: KnownValues = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, known);
    }

    #[test]
    fn test_unknown_tag_rejected_on_deserialize() {
        let json = r#"{"type":"salt-hydration","value1":1.0,"value2":2.0}"#;
        let error = serde_json::from_str::<KnownValues>(json).unwrap_err();

        assert!(error.to_string().contains("Invalid known values type"));
    }

    #[test]
    fn test_only_total_pairs_have_dough_total() {
        let with_total: Vec<KnownValuesType> = KnownValuesType::ALL
            .into_iter()
            .filter(KnownValuesType::has_dough_total)
            .collect();

        assert_eq!(
            with_total,
            vec![KnownValuesType::TotalHydration, KnownValuesType::TotalLevain]
        );
    }

    #[test]
    fn test_per_loaf_target_total() {
        let inputs = SolverInputs {
            number_of_loaves: 3,
            per_loaf_weight: Some(750.0),
            ..SolverInputs::default()
        };
        assert_eq!(inputs.per_loaf_target_total(), Some(2250.0));
        assert_eq!(SolverInputs::default().per_loaf_target_total(), None);
    }
}
