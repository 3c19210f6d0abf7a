// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_select --heading-base-level=0

//! Overstory Select: design-system styling for a headless select.
//!
//! A headless select behavior library owns state: which option is focused,
//! what the user typed, whether the menu is open. It asks a set of slot
//! renderers to draw each piece. This crate supplies those renderers and
//! makes them look like the rest of a recipe-driven design system.
//!
//! The flow has two steps:
//!
//! 1. [`SelectProps::reconcile`] merges caller props with the surrounding
//!    [`FieldContext`] and the recipe source's defaults into a
//!    [`SelectConfig`]. Field state wins over the select's own flags, and
//!    unusable inputs fall back silently.
//! 2. Each slot renderer in [`Components`] takes its render props (which hold
//!    a reference to the config plus the slot's [`ItemState`]) and returns a
//!    [`Node`]. Renderers borrow style fragments from [`understory_recipe`],
//!    pass the result through the matching [`StyleOverrides`] callback, and
//!    attach semantic classes from [`SelectConfig::cx`].
//!
//! Callers can replace any renderer with [`ComponentOverrides`] and adjust any
//! style with [`StyleOverrides`] without touching the others.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use overstory_select::{
//!     ControlProps, FieldContext, ItemState, Node, SelectOption, SelectProps, StyleOverrides,
//! };
//! use understory_recipe::{DefaultRecipes, SizeToken};
//!
//! let field = FieldContext {
//!     invalid: Some(true),
//!     ..FieldContext::default()
//! };
//! let config = SelectProps::<SelectOption>::new()
//!     .size(SizeToken::Sm)
//!     .class_name_prefix("fruit")
//!     .style_overrides(
//!         StyleOverrides::default().control(|style, _| style.with("borderRadius", "full")),
//!     )
//!     .reconcile(&field, Rc::new(DefaultRecipes::new()));
//!
//! let control = (config.components.control)(
//!     ControlProps::new(&config).state(ItemState::FOCUSED),
//! );
//! let Node::Element(control) = control else {
//!     unreachable!("the built-in control renders an element");
//! };
//!
//! assert_eq!(control.css.get_str("borderRadius"), Some("full"));
//! assert_eq!(control.css.get_str("minH"), Some("9"));
//! assert!(control.class_names.contains("fruit__control--is-focused"));
//! assert!(control.attrs.contains("data-invalid"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `understory_recipe/std`.
//! - `libm`: forwards to `understory_recipe/libm` for `no_std` builds.
//! - `serde_json`: implements [`TagData`] for `serde_json::Value`, reading
//!   `colorPalette`, `variant`, and `isFixed` keys.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod components;
mod config;
mod data;
mod element;
mod overrides;
mod props;
mod reconcile;
mod slots;
mod state;

pub use components::{ComponentOverrides, Components};
pub use config::SelectConfig;
pub use data::{Capability, OptionGroup, SelectOption, TagData};
pub use element::{
    AttrValue, Attributes, Callback, ClassList, Element, Node, Primitive, cx, text_content,
};
pub use overrides::StyleOverrides;
pub use props::{FieldContext, Loose, SelectProps, SelectedOptionStyle};
pub use reconcile::DEFAULT_SELECTED_OPTION_PALETTE;
pub use slots::{
    ContainerProps, ControlProps, GroupHeadingProps, GroupProps, IndicatorProps,
    IndicatorSeparatorProps, IndicatorsContainerProps, InputProps, LoadingIndicatorProps,
    MenuListProps, MenuProps, MultiValueGenericProps, MultiValueProps, MultiValueRemoveProps,
    NoticeProps, OptionProps, PlaceholderProps, SingleValueProps, ValueContainerProps, check_icon,
    clear_indicator, control, cross_icon, down_chevron, dropdown_indicator, group, group_heading,
    indicator_separator, indicators_container, input, loading_indicator, loading_message, menu,
    menu_list, multi_value, multi_value_container, multi_value_label, multi_value_remove,
    no_options_message, option, placeholder, select_container, single_value, tag_close_icon,
    value_container,
};
pub use state::{ItemState, MenuPlacement};
