// ABOUTME: Levain CLI - solve, validate, and inspect baker's-percentage recipes
// ABOUTME: Thin command-line surface over the levain-formula solver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Solve from 1000 g flour at 75% hydration with default percentages
//! levain-cli solve --known flour-hydration 1000 75
//!
//! # Two 900 g loaves of Henry's Foolproof, as JSON
//! levain-cli --format json solve --known total-hydration 0 75 --preset henrys --loaves 2
//!
//! # Check custom percentages without solving
//! levain-cli validate --hydration 115 --salt 2 --blend "Bread Flour:80" --blend "Rye:15"
//!
//! # Print the Henry's Foolproof preset
//! levain-cli preset
//! ```

mod args;
mod commands;
mod helpers;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use levain::logging::LoggingConfig;
use tracing::debug;

use args::{OutputFormat, RecipeArgs};

#[derive(Parser)]
#[command(
    name = "levain-cli",
    about = "Baker's-percentage recipe solver",
    long_about = "Recover every quantity of a sourdough formula from any two known values."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Solve a recipe from two known quantities
    Solve {
        /// Known pair: flour-hydration, levain-hydration, total-hydration, flour-levain, total-levain
        #[arg(long)]
        known: String,

        /// First known value (grams)
        value1: f64,

        /// Second known value (percent for hydration pairs, grams for levain pairs)
        value2: f64,

        #[command(flatten)]
        recipe: RecipeArgs,
    },

    /// Check baker's percentages against the safe ranges
    Validate {
        #[command(flatten)]
        recipe: RecipeArgs,
    },

    /// Print the Henry's Foolproof preset
    Preset,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    match cli.command {
        Command::Solve {
            known,
            value1,
            value2,
            recipe,
        } => {
            let inputs = recipe.into_inputs();
            debug!(known = %known, "levain-cli solve");
            commands::recipe::solve(&known, value1, value2, &inputs, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { recipe } => {
            let inputs = recipe.into_inputs();
            let valid = commands::recipe::validate(&inputs, cli.format)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Preset => {
            commands::recipe::preset(cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
