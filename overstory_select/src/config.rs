// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reconciled configuration every slot renderer reads.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use understory_recipe::{
    ColorPalette, ColorValue, InputVariant, Part, RecipeKey, RecipeParams, RecipeSource,
    ResponsiveValue, Size, SizeToken, SlotStyles, StyleObject, TagVariant, resolve_size,
};

use crate::components::Components;
use crate::element::{Attributes, Callback, ClassList, cx};
use crate::overrides::StyleOverrides;
use crate::props::SelectedOptionStyle;

/// Select props after reconciliation.
///
/// Produced by [`SelectProps::reconcile`](crate::SelectProps::reconcile).
/// Every slot receives a shared reference to it.
pub struct SelectConfig<O> {
    /// Slot renderers, built-ins merged with caller replacements.
    pub components: Components<O>,
    /// Design system recipes.
    pub recipes: Rc<dyn RecipeSource>,
    /// Per-slot style callbacks.
    pub style_overrides: StyleOverrides<O>,
    /// Size as supplied. Use [`SelectConfig::size`] for the bucket.
    pub size: Option<ResponsiveValue<SizeToken>>,
    /// Palette for tags.
    pub color_palette: ColorPalette,
    /// Variant for all tags, if set.
    pub tag_variant: Option<TagVariant>,
    /// How selected options are marked.
    pub selected_option_style: SelectedOptionStyle,
    /// Palette for the selected-option tint.
    pub selected_option_color_palette: ColorPalette,
    /// Input variant.
    pub variant: InputVariant,
    /// Focus ring color.
    pub focus_border_color: Option<ColorValue>,
    /// Invalid-state border color.
    pub error_border_color: Option<ColorValue>,
    /// Focus handler.
    pub on_focus: Option<Callback>,
    /// Blur handler.
    pub on_blur: Option<Callback>,
    /// Disabled.
    pub is_disabled: bool,
    /// Invalid.
    pub is_invalid: bool,
    /// Read-only.
    pub is_read_only: bool,
    /// Required.
    pub required: bool,
    /// Input id.
    pub input_id: Option<String>,
    /// Controlled menu state.
    pub menu_is_open: Option<bool>,
    /// `aria-invalid` for the input.
    pub aria_invalid: Option<bool>,
    /// Several values allowed.
    pub is_multi: bool,
    /// Selected options removed from the menu.
    pub hide_selected_options: Option<bool>,
    /// Selected values shown in the control.
    pub control_should_render_value: bool,
    /// Right-to-left layout.
    pub is_rtl: bool,
    /// Plain structural styles.
    pub use_basic_styles: bool,
    /// Prefix for semantic class names.
    pub class_name_prefix: Option<String>,
    /// Behavior library props, untouched.
    pub extra: Attributes,
}

impl<O> fmt::Debug for SelectConfig<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectConfig")
            .field("components", &self.components)
            .field("style_overrides", &self.style_overrides)
            .field("size", &self.size)
            .field("color_palette", &self.color_palette)
            .field("tag_variant", &self.tag_variant)
            .field("selected_option_style", &self.selected_option_style)
            .field("selected_option_color_palette", &self.selected_option_color_palette)
            .field("variant", &self.variant)
            .field("is_disabled", &self.is_disabled)
            .field("is_invalid", &self.is_invalid)
            .field("is_read_only", &self.is_read_only)
            .field("required", &self.required)
            .field("input_id", &self.input_id)
            .field("menu_is_open", &self.menu_is_open)
            .field("aria_invalid", &self.aria_invalid)
            .field("is_multi", &self.is_multi)
            .finish_non_exhaustive()
    }
}

impl<O> SelectConfig<O> {
    /// The size bucket slots style against.
    #[must_use]
    pub fn size(&self) -> Size {
        resolve_size(self.size.as_ref(), &*self.recipes)
    }

    /// Builds a class list using the configured prefix.
    #[must_use]
    pub fn cx(&self, states: &[(&str, bool)], class_name: Option<&str>) -> ClassList {
        cx(self.class_name_prefix.as_deref(), states, class_name)
    }

    /// The input recipe with this select's variant and colors.
    pub(crate) fn input_recipe(&self, size: Size) -> SlotStyles {
        let params = RecipeParams::new()
            .size(size)
            .variant(self.variant.as_str())
            .focus_color(self.focus_border_color.as_ref())
            .error_color(self.error_border_color.as_ref());
        self.recipes.slot_recipe(RecipeKey::Input, &params)
    }

    /// The input recipe's field part.
    pub(crate) fn input_field(&self, size: Size) -> StyleObject {
        self.input_recipe(size).take(Part::Field)
    }

    /// The menu recipe at its default size.
    pub(crate) fn menu_recipe(&self) -> SlotStyles {
        self.recipes
            .slot_recipe(RecipeKey::Menu, &RecipeParams::new())
    }
}
