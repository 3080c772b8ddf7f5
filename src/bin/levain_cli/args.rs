// ABOUTME: Shared clap arguments for recipe parameters and output selection
// ABOUTME: Folds preset, percentage overrides, and --blend pairs into SolverInputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use clap::{Args, ValueEnum};
use levain::errors::{AppError, AppResult};
use levain::formula::create_henrys_foolproof_preset;
use levain::models::{FlourComponent, SolverInputs};

/// Output format for command results
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Named starting points for recipe parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetName {
    /// Henry's Foolproof sourdough
    Henrys,
}

/// Recipe parameters; explicit flags override the preset (or the defaults)
#[derive(Args, Debug, Clone, Default)]
pub struct RecipeArgs {
    /// Start from a named preset
    #[arg(long, value_enum)]
    pub preset: Option<PresetName>,

    /// Total hydration (% of flour)
    #[arg(long)]
    pub hydration: Option<f64>,

    /// Salt (% of flour)
    #[arg(long)]
    pub salt: Option<f64>,

    /// Levain flour (% of total flour)
    #[arg(long)]
    pub levain: Option<f64>,

    /// Levain hydration (% of levain flour)
    #[arg(long)]
    pub levain_hydration: Option<f64>,

    /// Number of loaves
    #[arg(long)]
    pub loaves: Option<u32>,

    /// Target weight of each loaf in grams
    #[arg(long)]
    pub per_loaf: Option<f64>,

    /// Flour blend component as "Name:percent" (repeatable)
    #[arg(long = "blend", value_parser = parse_flour_component)]
    pub blend: Vec<FlourComponent>,
}

impl RecipeArgs {
    /// Resolve into solver inputs
    pub fn into_inputs(self) -> SolverInputs {
        let mut inputs = match self.preset {
            Some(PresetName::Henrys) => create_henrys_foolproof_preset(),
            None => SolverInputs::default(),
        };

        if let Some(hydration) = self.hydration {
            inputs.hydration_percent = hydration;
        }
        if let Some(salt) = self.salt {
            inputs.salt_percent = salt;
        }
        if let Some(levain) = self.levain {
            inputs.levain_percent = levain;
        }
        if let Some(levain_hydration) = self.levain_hydration {
            inputs.levain_hydration = levain_hydration;
        }
        if let Some(loaves) = self.loaves {
            inputs.number_of_loaves = loaves;
        }
        if self.per_loaf.is_some() {
            inputs.per_loaf_weight = self.per_loaf;
        }
        if !self.blend.is_empty() {
            inputs.flour_blend = self.blend;
        }

        inputs
    }
}

/// Parse a `--blend` value of the form `Name:percent`
///
/// The split is on the last colon so flour names may contain colons.
pub fn parse_flour_component(raw: &str) -> AppResult<FlourComponent> {
    let (name, percentage) = raw.rsplit_once(':').ok_or_else(|| {
        AppError::invalid_input(format!("Blend entry '{raw}' must look like Name:percent"))
            .with_field("blend")
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(
            AppError::invalid_input(format!("Blend entry '{raw}' has no flour name"))
                .with_field("blend"),
        );
    }

    let percentage = percentage.trim().parse::<f64>().map_err(|e| {
        AppError::invalid_input(format!("Blend entry '{raw}' has an invalid percentage: {e}"))
            .with_field("blend")
    })?;

    Ok(FlourComponent::new(name, percentage))
}
