// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A built-in recipe source.

use crate::palette::ColorPalette;
use crate::recipe::{Part, RecipeKey, RecipeParams, RecipeSource, SlotStyles};
use crate::size::{Breakpoint, Size, SizeTable, SizeToken};
use crate::style::{StyleObject, StyleValue};
use crate::variant::{InputVariant, TagVariant};

const FIELD_HEIGHT: SizeTable<&str> = SizeTable::new("9", "10", "11");
const FIELD_PX: SizeTable<&str> = SizeTable::new("2.5", "3", "4");
const FIELD_TEXT_STYLE: SizeTable<&str> = SizeTable::new("sm", "sm", "md");

const TAG_PX: SizeTable<&str> = SizeTable::new("1.5", "2", "2.5");
const TAG_MIN_H: SizeTable<&str> = SizeTable::new("5", "6", "7");
const TAG_TEXT_STYLE: SizeTable<&str> = SizeTable::new("xs", "xs", "sm");
const TAG_CLOSE_SIZE: SizeTable<&str> = SizeTable::new("3", "3.5", "4");

const CLOSE_BOX_SIZE: SizeTable<&str> = SizeTable::new("6", "7", "8");

/// A recipe source with the stock look of the Understory widget set.
///
/// Useful on its own and as the baseline a themed source wraps. The default
/// input variant, default size, and current breakpoint are configurable.
///
/// ```rust
/// use understory_recipe::{DefaultRecipes, Part, RecipeKey, RecipeParams, RecipeSource, Size};
///
/// let recipes = DefaultRecipes::new();
/// let input = recipes.slot_recipe(RecipeKey::Input, &RecipeParams::new().size(Size::Lg));
/// let field = input.part(Part::Field).unwrap();
/// assert_eq!(field.get_str("height"), Some("11"));
/// ```
#[derive(Clone, Debug)]
pub struct DefaultRecipes {
    input_variant: InputVariant,
    size: SizeToken,
    breakpoint: Breakpoint,
}

impl Default for DefaultRecipes {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultRecipes {
    /// Creates the stock recipe source: `outline` inputs, `md` size, base breakpoint.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input_variant: InputVariant::Outline,
            size: SizeToken::Md,
            breakpoint: Breakpoint::Base,
        }
    }

    /// Sets the default input variant.
    #[must_use]
    pub const fn with_default_variant(mut self, variant: InputVariant) -> Self {
        self.input_variant = variant;
        self
    }

    /// Sets the default size.
    #[must_use]
    pub const fn with_default_size(mut self, size: SizeToken) -> Self {
        self.size = size;
        self
    }

    /// Sets the breakpoint responsive values resolve against.
    #[must_use]
    pub const fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    fn size(&self, params: &RecipeParams<'_>) -> Size {
        params
            .size
            .unwrap_or_else(|| self.size.bucket().unwrap_or(Size::Md))
    }

    fn input(&self, params: &RecipeParams<'_>) -> SlotStyles {
        let size = self.size(params);
        let variant = params
            .variant
            .and_then(|v| v.parse::<InputVariant>().ok())
            .unwrap_or(self.input_variant);
        let focus_color: StyleValue = params
            .focus_color
            .cloned()
            .map_or_else(|| "colorPalette.focusRing".into(), Into::into);
        let error_color: StyleValue = params
            .error_color
            .cloned()
            .map_or_else(|| "border.error".into(), Into::into);

        let field = StyleObject::new()
            .with("width", "100%")
            .with("minWidth", "0")
            .with("outline", "0")
            .with("position", "relative")
            .with("appearance", "none")
            .with("textAlign", "start")
            .with("borderRadius", "l2")
            .with("--focus-color", focus_color)
            .with("--error-color", error_color)
            .with("height", *FIELD_HEIGHT.get(size))
            .with("minW", *FIELD_HEIGHT.get(size))
            .with("px", *FIELD_PX.get(size))
            .with("textStyle", *FIELD_TEXT_STYLE.get(size))
            .with("_disabled", StyleObject::new().with("opacity", "0.5"))
            .with(
                "_invalid",
                StyleObject::new()
                    .with("focusRingColor", "var(--error-color)")
                    .with("borderColor", "var(--error-color)"),
            );
        let field = match variant {
            InputVariant::Outline => field
                .with("bg", "transparent")
                .with("borderWidth", "1px")
                .with("borderColor", "border")
                .with("focusVisibleRing", "inside"),
            InputVariant::Subtle => field
                .with("bg", "bg.muted")
                .with("borderWidth", "1px")
                .with("borderColor", "transparent")
                .with("focusVisibleRing", "inside"),
            InputVariant::Flushed => field
                .with("bg", "transparent")
                .with("borderBottomWidth", "1px")
                .with("borderBottomColor", "border")
                .with("borderRadius", "0")
                .with("px", "0")
                .with(
                    "_focusVisible",
                    StyleObject::new()
                        .with("borderColor", "var(--focus-color)")
                        .with("boxShadow", "0px 1px 0px 0px var(--focus-color)"),
                ),
        };

        let addon = StyleObject::new()
            .with("flex", "0 0 auto")
            .with("width", "auto")
            .with("display", "flex")
            .with("alignItems", "center")
            .with("whiteSpace", "nowrap")
            .with("alignSelf", "stretch")
            .with("borderRadius", "l2")
            .with("px", *FIELD_PX.get(size))
            .with("textStyle", *FIELD_TEXT_STYLE.get(size));
        let addon = match variant {
            InputVariant::Outline => addon
                .with("borderWidth", "1px")
                .with("borderColor", "border")
                .with("bg", "bg.muted"),
            InputVariant::Subtle => addon
                .with("borderWidth", "1px")
                .with("borderColor", "transparent")
                .with("bg", "bg.emphasized"),
            InputVariant::Flushed => addon
                .with("borderBottomWidth", "1px")
                .with("borderBottomColor", "border")
                .with("bg", "transparent")
                .with("px", "0"),
        };

        SlotStyles::new()
            .with_part(Part::Field, field)
            .with_part(Part::Addon, addon)
    }

    fn menu() -> SlotStyles {
        let content = StyleObject::new()
            .with("outline", "0")
            .with("bg", "bg.panel")
            .with("boxShadow", "lg")
            .with("color", "fg")
            .with("borderRadius", "l2")
            .with("overflow", "hidden")
            .with("p", "1")
            .with("zIndex", "dropdown");
        let item = StyleObject::new()
            .with("textDecoration", "none")
            .with("color", "fg")
            .with("userSelect", "none")
            .with("borderRadius", "l1")
            .with("width", "100%")
            .with("display", "flex")
            .with("cursor", "menuitem")
            .with("alignItems", "center")
            .with("textAlign", "start")
            .with("position", "relative")
            .with("flex", "0 0 auto")
            .with("outline", "0")
            .with("textStyle", "sm")
            .with("py", "1.5")
            .with("px", "2")
            .with("_disabled", StyleObject::new().with("layerStyle", "disabled"))
            .with(
                "_highlighted",
                StyleObject::new().with("bg", "bg.emphasized/60"),
            );
        let item_group = StyleObject::new()
            .with("px", "2")
            .with("py", "1.5")
            .with("fontWeight", "semibold")
            .with("textStyle", "sm");

        SlotStyles::new()
            .with_part(Part::Content, content)
            .with_part(Part::Item, item)
            .with_part(Part::ItemGroup, item_group)
    }

    fn tag(&self, params: &RecipeParams<'_>) -> SlotStyles {
        let size = self.size(params);
        let variant = params
            .variant
            .and_then(|v| v.parse::<TagVariant>().ok())
            .unwrap_or(TagVariant::Surface);
        let palette = params
            .color_palette
            .cloned()
            .unwrap_or(ColorPalette::GRAY);

        let root = StyleObject::new()
            .with("display", "inline-flex")
            .with("alignItems", "center")
            .with("verticalAlign", "top")
            .with("maxWidth", "100%")
            .with("userSelect", "none")
            .with("borderRadius", "l2")
            .with("focusVisibleRing", "outside")
            .with("colorPalette", palette)
            .with("px", *TAG_PX.get(size))
            .with("minH", *TAG_MIN_H.get(size))
            .with("gap", "1")
            .with("textStyle", *TAG_TEXT_STYLE.get(size));
        let root = match variant {
            TagVariant::Subtle => root
                .with("bg", "colorPalette.subtle")
                .with("color", "colorPalette.fg"),
            TagVariant::Solid => root
                .with("bg", "colorPalette.solid")
                .with("color", "colorPalette.contrast"),
            TagVariant::Outline => root
                .with("color", "colorPalette.fg")
                .with("boxShadow", "inset 0 0 0px 1px var(--shadow-color)")
                .with("--shadow-color", "colorPalette.muted"),
            TagVariant::Surface => root
                .with("bg", "colorPalette.subtle")
                .with("color", "colorPalette.fg")
                .with("boxShadow", "inset 0 0 0px 1px var(--shadow-color)")
                .with("--shadow-color", "colorPalette.muted"),
        };

        let label = StyleObject::new().with("lineClamp", "1");
        let close_trigger = StyleObject::new()
            .with("display", "flex")
            .with("alignItems", "center")
            .with("justifyContent", "center")
            .with("outline", "0")
            .with("borderRadius", "l1")
            .with("color", "currentColor")
            .with("focusVisibleRing", "inside")
            .with("focusRingWidth", "2px")
            .with("boxSize", *TAG_CLOSE_SIZE.get(size));

        SlotStyles::new()
            .with_part(Part::Root, root)
            .with_part(Part::Label, label)
            .with_part(Part::CloseTrigger, close_trigger)
    }

    fn close_trigger(&self, params: &RecipeParams<'_>) -> SlotStyles {
        let size = self.size(params);
        let root = StyleObject::new()
            .with("display", "inline-flex")
            .with("alignItems", "center")
            .with("justifyContent", "center")
            .with("borderRadius", "l2")
            .with("color", "fg.muted")
            .with("boxSize", *CLOSE_BOX_SIZE.get(size))
            .with("_hover", StyleObject::new().with("bg", "bg.muted"));
        SlotStyles::new().with_part(Part::Root, root)
    }
}

impl RecipeSource for DefaultRecipes {
    fn slot_recipe(&self, key: RecipeKey, params: &RecipeParams<'_>) -> SlotStyles {
        match key {
            RecipeKey::Input => self.input(params),
            RecipeKey::Menu => Self::menu(),
            RecipeKey::Tag => self.tag(params),
            RecipeKey::CloseTrigger => self.close_trigger(params),
        }
    }

    fn default_input_variant(&self) -> InputVariant {
        self.input_variant
    }

    fn default_size(&self, key: RecipeKey) -> SizeToken {
        match key {
            RecipeKey::Input => self.size,
            _ => SizeToken::Md,
        }
    }

    fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}
