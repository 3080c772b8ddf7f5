// ABOUTME: Criterion benchmarks for the baker's-percentage solver
// ABOUTME: Measures each solve strategy, the tag router, and the blend calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the formula solver.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use levain::formula::{
    calculate_flour_blend, create_henrys_foolproof_preset, solve_bread_recipe,
    solve_bread_recipe_tagged, validate_inputs,
};
use levain::models::{FlourComponent, KnownValues, KnownValuesType, SolverInputs};

/// Representative known values for each strategy
fn sample_known_values() -> Vec<KnownValues> {
    KnownValuesType::ALL
        .into_iter()
        .map(|kind| {
            let (value1, value2) = match kind {
                KnownValuesType::FlourHydration => (1000.0, 75.0),
                KnownValuesType::LevainHydration => (400.0, 75.0),
                KnownValuesType::TotalHydration => (1770.0, 75.0),
                KnownValuesType::FlourLevain => (1000.0, 300.0),
                KnownValuesType::TotalLevain => (1800.0, 400.0),
            };
            KnownValues::from_kind(kind, value1, value2)
        })
        .collect()
}

/// Benchmark every strategy through the typed router
fn bench_solve_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_strategies");
    let inputs = SolverInputs::default();

    for known in sample_known_values() {
        group.bench_with_input(
            BenchmarkId::new("solve_bread_recipe", known.kind()),
            &known,
            |b, known| b.iter(|| solve_bread_recipe(black_box(known), black_box(&inputs))),
        );
    }

    group.finish();
}

/// Benchmark the untyped entry point, tag parsing included
fn bench_tagged_router(c: &mut Criterion) {
    let inputs = create_henrys_foolproof_preset();

    c.bench_function("solve_bread_recipe_tagged", |b| {
        b.iter(|| {
            solve_bread_recipe_tagged(
                black_box("total-hydration"),
                black_box(0.0),
                black_box(75.0),
                black_box(&inputs),
            )
        });
    });
}

/// Benchmark blend expansion and validation over growing blends
#[allow(clippy::cast_precision_loss)]
fn bench_flour_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("flour_blend");

    for count in [2_usize, 8, 32] {
        let share = 100.0 / count as f64;
        let blend: Vec<FlourComponent> = (0..count)
            .map(|index| FlourComponent::new(format!("Flour {index}"), share))
            .collect();
        let inputs = SolverInputs {
            flour_blend: blend.clone(),
            ..SolverInputs::default()
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("calculate_flour_blend", count),
            &blend,
            |b, blend| b.iter(|| calculate_flour_blend(black_box(1017.0), black_box(blend))),
        );
        group.bench_with_input(
            BenchmarkId::new("validate_inputs", count),
            &inputs,
            |b, inputs| b.iter(|| validate_inputs(black_box(inputs))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_solve_strategies,
    bench_tagged_router,
    bench_flour_blend
);
criterion_main!(benches);
