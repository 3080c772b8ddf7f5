// ABOUTME: Output formatting helpers for levain-cli
// ABOUTME: Prints solved recipes, blends, per-loaf weights, and validation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use levain::models::SolverInputs;

use crate::commands::recipe::SolveReport;

const RULE_WIDTH: usize = 44;

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Display a solved recipe with its derived tables
pub fn display_solve_report(report: &SolveReport) {
    let recipe = &report.recipe;

    heading("RECIPE");
    println!("   Flour:        {:>8} g", recipe.flour_total);
    println!("   Water:        {:>8} g", recipe.water_total);
    println!("   Salt:         {:>8} g", recipe.salt_grams);
    println!(
        "   Levain:       {:>8} g  ({} g flour + {} g water)",
        recipe.levain_total, recipe.levain_flour, recipe.levain_water
    );
    println!("   Dough total:  {:>8} g", recipe.dough_total);

    if let Some(adjusted) = report.adjusted_levain_percent {
        println!("\n   Levain % adjusted to {adjusted}% to match the given levain weight");
    }

    let pct = &report.bakers_percentages;
    heading("BAKER'S PERCENTAGES");
    println!("   Hydration:        {}%", pct.hydration_percent);
    println!("   Salt:             {}%", pct.salt_percent);
    println!("   Levain:           {}%", pct.levain_percent);
    println!("   Levain hydration: {}%", pct.levain_hydration);

    if !report.flour_blend.is_empty() {
        heading("FLOUR BLEND");
        for entry in &report.flour_blend {
            println!(
                "   {:<20} {:>6}%  {:>8} g",
                entry.name, entry.percentage, entry.grams
            );
        }
    }

    if report.number_of_loaves > 1 {
        let per_loaf = &report.per_loaf;
        heading(&format!("PER LOAF (x{})", report.number_of_loaves));
        println!("   Flour:   {:>8} g", per_loaf.flour_per_loaf);
        println!("   Water:   {:>8} g", per_loaf.water_per_loaf);
        println!("   Salt:    {:>8} g", per_loaf.salt_per_loaf);
        println!("   Levain:  {:>8} g", per_loaf.levain_per_loaf);
        println!("   Total:   {:>8} g", per_loaf.total_per_loaf);
    }

    if !report.warnings.is_empty() {
        heading("WARNINGS");
        for warning in &report.warnings {
            println!("   - {warning}");
        }
    }
}

/// Display validation results
pub fn display_validation(violations: &[String]) {
    if violations.is_empty() {
        println!("All percentages are within the recommended ranges.");
        return;
    }

    heading("VALIDATION ERRORS");
    for violation in violations {
        println!("   - {violation}");
    }
}

/// Display a set of solver inputs
pub fn display_inputs(title: &str, inputs: &SolverInputs) {
    heading(&title.to_uppercase());
    println!("   Hydration:        {}%", inputs.hydration_percent);
    println!("   Salt:             {}%", inputs.salt_percent);
    println!("   Levain:           {}%", inputs.levain_percent);
    println!("   Levain hydration: {}%", inputs.levain_hydration);
    println!("   Loaves:           {}", inputs.number_of_loaves);
    if let Some(weight) = inputs.per_loaf_weight {
        println!("   Per-loaf weight:  {weight} g");
    }
    for component in &inputs.flour_blend {
        println!("   {:<17} {}%", format!("{}:", component.name), component.percentage);
    }
}
