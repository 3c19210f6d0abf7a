// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select styling basics.
//!
//! Reconcile select props against a form field, then render one frame of a
//! multi-select the way a headless behavior library would: control, tags,
//! input, indicators, and an open menu with grouped options.
//!
//! Run:
//! - `cargo run -p understory_demos --example select_basics`

use std::rc::Rc;

use overstory_select::{
    ContainerProps, ControlProps, FieldContext, GroupProps, IndicatorProps,
    IndicatorSeparatorProps, IndicatorsContainerProps, InputProps, ItemState, MenuListProps,
    MenuProps, MultiValueProps, Node, OptionGroup, OptionProps, SelectProps, SelectedOptionStyle,
    StyleOverrides, ValueContainerProps,
};
use serde_json::{Value, json};
use understory_demos::outline;
use understory_recipe::{ColorPalette, DefaultRecipes, SizeToken};

fn main() {
    // Options arrive as JSON; tag settings are read from optional keys.
    let citrus = OptionGroup::new(
        "Citrus",
        vec![
            json!({ "label": "Lemon", "value": "lemon", "colorPalette": "yellow" }),
            json!({ "label": "Lime", "value": "lime", "isFixed": true }),
            json!({ "label": "Orange", "value": "orange", "variant": "outline" }),
        ],
    );
    let selected: Vec<&Value> = citrus.options.iter().take(2).collect();

    let field = FieldContext {
        id: Some("favorite-fruit".into()),
        required: Some(true),
        ..FieldContext::default()
    };
    let mut props = SelectProps::<Value>::new()
        .multi(true)
        .size(SizeToken::Sm)
        .color_palette(ColorPalette::GREEN)
        .selected_option_style(SelectedOptionStyle::Check)
        .class_name_prefix("fruit")
        .style_overrides(
            StyleOverrides::default().menu_list(|style, _| style.with("maxHeight", "12rem")),
        );
    props.hide_selected_options = Some(false);
    let config = props.reconcile(&field, Rc::new(DefaultRecipes::new()));
    let c = &config.components;

    let state = ItemState::MULTI | ItemState::HAS_VALUE | ItemState::MENU_OPEN;
    let label = |item: &Value| item["label"].as_str().unwrap_or_default().to_owned();

    let tags = selected.iter().map(|item| {
        (c.multi_value)(MultiValueProps::new(&config, *item).child(Node::text(label(*item))))
    });
    let value_area = (c.value_container)(
        ValueContainerProps::new(&config)
            .state(state)
            .children(tags)
            .child((c.input)(InputProps::new(&config, "or").state(state))),
    );
    let indicators = (c.indicators_container)(
        IndicatorsContainerProps::new(&config)
            .child((c.clear_indicator)(IndicatorProps::new(&config)))
            .child((c.indicator_separator)(IndicatorSeparatorProps::new(&config)))
            .child((c.dropdown_indicator)(IndicatorProps::new(&config))),
    );
    let control = (c.control)(
        ControlProps::new(&config)
            .state(ItemState::FOCUSED | ItemState::MENU_OPEN)
            .child(value_area)
            .child(indicators),
    );

    let rows = citrus.options.iter().enumerate().map(|(i, item)| {
        let mut row_state = ItemState::empty();
        row_state.set(ItemState::SELECTED, i < 2);
        row_state.set(ItemState::FOCUSED, i == 2);
        (c.option)(
            OptionProps::new(&config, item)
                .state(row_state)
                .child(Node::text(label(item))),
        )
    });
    let mut group = GroupProps::new(&config, &citrus).children(rows);
    group.label = vec![Node::text("Citrus")];
    let group = (c.group)(group);
    let menu = (c.menu)(
        MenuProps::new(&config)
            .child((c.menu_list)(MenuListProps::new(&config).state(state).child(group))),
    );

    let root = (c.select_container)(
        ContainerProps::new(&config)
            .state(state)
            .child(control)
            .child(menu),
    );
    print!("{}", outline(&root));
}
