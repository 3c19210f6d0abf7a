// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_recipe` lookups and style layering.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_recipe::{
    Breakpoint, ColorPalette, DefaultRecipes, Part, RecipeKey, RecipeParams, RecipeSource,
    ResponsiveValue, SizeToken, StyleObject, resolve_size,
};

fn bench_slot_recipes(c: &mut Criterion) {
    let recipes = DefaultRecipes::new();
    let palette = ColorPalette::PURPLE;
    let mut group = c.benchmark_group("recipe/slot_recipe");
    for key in [RecipeKey::Input, RecipeKey::Menu, RecipeKey::Tag, RecipeKey::CloseTrigger] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{key:?}")), &key, |b, key| {
            let params = RecipeParams::new()
                .variant("subtle")
                .color_palette(&palette);
            b.iter(|| black_box(recipes.slot_recipe(*key, black_box(&params))));
        });
    }
    group.finish();
}

fn bench_resolve_size(c: &mut Criterion) {
    let recipes = DefaultRecipes::new().with_breakpoint(Breakpoint::Lg);
    let responsive = ResponsiveValue::breakpoints([
        (Breakpoint::Base, SizeToken::Xs),
        (Breakpoint::Sm, SizeToken::Sm),
        (Breakpoint::Md, SizeToken::Md),
        (Breakpoint::Xl, SizeToken::Lg),
    ]);
    c.bench_function("recipe/resolve_size_responsive", |b| {
        b.iter(|| black_box(resolve_size(Some(black_box(&responsive)), &recipes)));
    });
}

fn bench_layering(c: &mut Criterion) {
    let recipes = DefaultRecipes::new();
    c.bench_function("recipe/layer_control_style", |b| {
        b.iter(|| {
            let mut field = recipes
                .slot_recipe(RecipeKey::Input, &RecipeParams::new())
                .take(Part::Field);
            let min_h = field.remove("height");
            let style = field
                .merged(
                    StyleObject::new()
                        .with("display", "flex")
                        .with("height", "auto")
                        .with("padding", 0),
                )
                .with_opt("minH", min_h);
            black_box(style)
        });
    });
}

criterion_group!(benches, bench_slot_recipes, bench_resolve_size, bench_layering);
criterion_main!(benches);
