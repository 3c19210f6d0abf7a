// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `overstory_select` reconciliation and slot rendering.

use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use overstory_select::{
    FieldContext, ItemState, MenuListProps, MultiValueProps, Node, OptionProps, SelectConfig,
    SelectOption, SelectProps, SelectedOptionStyle, StyleOverrides,
};
use understory_recipe::{ColorPalette, DefaultRecipes, TagVariant};

fn options(n: usize) -> Vec<SelectOption> {
    (0..n)
        .map(|i| {
            let option = SelectOption::new(format!("Option {i}"), format!("option-{i}"));
            match i % 3 {
                0 => option.with_color_palette(ColorPalette::TEAL),
                1 => option.with_variant(TagVariant::Outline),
                _ => option.fixed(true),
            }
        })
        .collect()
}

fn config(style: SelectedOptionStyle) -> SelectConfig<SelectOption> {
    SelectProps::new()
        .multi(true)
        .selected_option_style(style)
        .class_name_prefix("bench")
        .style_overrides(
            StyleOverrides::default().option(|style, props| {
                if props.state.contains(ItemState::FOCUSED) {
                    style.with("outline", "2px solid")
                } else {
                    style
                }
            }),
        )
        .reconcile(&FieldContext::default(), Rc::new(DefaultRecipes::new()))
}

fn render_menu(config: &SelectConfig<SelectOption>, items: &[SelectOption]) -> Node {
    let rows = items.iter().enumerate().map(|(i, item)| {
        let mut state = ItemState::empty();
        state.set(ItemState::SELECTED, i % 4 == 0);
        state.set(ItemState::FOCUSED, i == 1);
        (config.components.option)(
            OptionProps::new(config, item)
                .state(state)
                .child(Node::text(item.label.clone())),
        )
    });
    (config.components.menu_list)(
        MenuListProps::new(config)
            .state(ItemState::MULTI)
            .children(rows),
    )
}

fn bench_reconcile(c: &mut Criterion) {
    let field = FieldContext {
        disabled: Some(false),
        invalid: Some(true),
        ..FieldContext::default()
    };
    c.bench_function("select/reconcile", |b| {
        b.iter(|| {
            let config: SelectConfig<SelectOption> = SelectProps::new()
                .size(understory_recipe::SizeToken::Lg)
                .reconcile(black_box(&field), Rc::new(DefaultRecipes::new()));
            black_box(config)
        });
    });
}

fn bench_menu(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/menu");
    for &n in &[10_usize, 100, 1_000] {
        let items = options(n);
        for style in [SelectedOptionStyle::Color, SelectedOptionStyle::Check] {
            let config = config(style);
            group.bench_with_input(
                BenchmarkId::new(format!("{style:?}"), n),
                &items,
                |b, items| b.iter(|| black_box(render_menu(&config, items))),
            );
        }
    }
    group.finish();
}

fn bench_tags(c: &mut Criterion) {
    let items = options(64);
    let config = config(SelectedOptionStyle::Color);
    c.bench_function("select/tags_64", |b| {
        b.iter(|| {
            for item in &items {
                black_box((config.components.multi_value)(
                    MultiValueProps::new(&config, item).child(Node::text(item.label.clone())),
                ));
            }
        });
    });
}

criterion_group!(benches, bench_reconcile, bench_menu, bench_tags);
criterion_main!(benches);
