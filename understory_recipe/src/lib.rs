// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recipe --heading-base-level=0

//! Understory Recipe: style objects, sizing tokens, and slot recipes.
//!
//! Widgets that adopt a design system's look do not compute colors and
//! spacing themselves. They ask a [`RecipeSource`] for the style fragments of
//! a named recipe ("input", "menu", "tag", ...) and layer their own
//! structural properties on top. This crate defines that contract and the
//! small vocabulary around it:
//!
//! - [`StyleObject`]: a property bag for one element, where later layers win.
//! - [`Size`], [`SizeToken`], [`ResponsiveValue`], and [`resolve_size`]: size
//!   inputs as callers write them, reduced to the three buckets widgets style.
//! - [`SizeTable`]: per-size lookup tables for paddings, font sizes, and icons.
//! - [`ColorPalette`] and [`ColorValue`]: palette names and token-or-concrete
//!   colors (concrete colors are [`peniko::Color`]).
//! - [`InputVariant`], [`TagVariant`], [`SpinnerSize`]: variant enumerations.
//! - [`RecipeSource`]: the design system as a widget sees it, with
//!   [`DefaultRecipes`] as a ready-made implementation.
//!
//! ## Borrowing a recipe
//!
//! A widget usually starts from a recipe part and then overrides a few keys:
//!
//! ```rust
//! use understory_recipe::{
//!     DefaultRecipes, Part, RecipeKey, RecipeParams, RecipeSource, StyleObject, resolve_size,
//! };
//!
//! let recipes = DefaultRecipes::new();
//! let size = resolve_size(None, &recipes);
//!
//! let mut input = recipes.slot_recipe(RecipeKey::Input, &RecipeParams::new().size(size));
//! let field = input.take(Part::Field);
//!
//! // Keep the field look but let content decide the height.
//! let min_h = field.get("height").cloned();
//! let mut style = field
//!     .without("height")
//!     .merged(StyleObject::new().with("height", "auto"));
//! if let Some(min_h) = min_h {
//!     style.set("minH", min_h);
//! }
//!
//! assert_eq!(style.get_str("height"), Some("auto"));
//! assert_eq!(style.get_str("minH"), Some("10"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `peniko/std`.
//! - `libm`: forwards to `peniko/libm` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod defaults;
mod error;
mod palette;
mod recipe;
mod size;
mod style;
mod variant;

pub use defaults::DefaultRecipes;
pub use error::ParseTokenError;
pub use palette::{ColorPalette, ColorValue};
pub use recipe::{Part, RecipeKey, RecipeParams, RecipeSource, SlotStyles};
pub use size::{Breakpoint, ResponsiveValue, Size, SizeTable, SizeToken, resolve_size};
pub use style::{StyleObject, StyleValue};
pub use variant::{InputVariant, SpinnerSize, TagVariant};

pub use peniko::Color;
