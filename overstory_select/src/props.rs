// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-facing select props and the enclosing field context.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use understory_recipe::{
    ColorPalette, ColorValue, InputVariant, ParseTokenError, ResponsiveValue, SizeToken, TagVariant,
};

use crate::components::ComponentOverrides;
use crate::element::{Attributes, Callback};
use crate::overrides::StyleOverrides;

/// How the currently selected option is marked in the menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectedOptionStyle {
    /// Tint the option row with the selected-option palette.
    #[default]
    Color,
    /// Show a check mark before the option label.
    Check,
}

impl FromStr for SelectedOptionStyle {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(Self::Color),
            "check" => Ok(Self::Check),
            _ => Err(ParseTokenError {
                expected: "selected option style",
                input: s.into(),
            }),
        }
    }
}

/// A setting as the caller supplied it, which may not be recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loose<T> {
    /// A recognized value.
    Valid(T),
    /// A value the adapter does not recognize.
    Invalid,
}

impl<T> Loose<T> {
    /// Returns the recognized value.
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid => None,
        }
    }
}

impl<T: FromStr> Loose<T> {
    /// Parses a setting, keeping unrecognized input as [`Loose::Invalid`].
    pub fn parse(s: &str) -> Self {
        s.parse().map_or(Self::Invalid, Self::Valid)
    }
}

impl<T> From<T> for Loose<T> {
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

/// State published by an enclosing form field.
///
/// Unset fields defer to the select's own props.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldContext {
    /// The field's input id.
    pub id: Option<String>,
    /// The field is disabled.
    pub disabled: Option<bool>,
    /// The field is invalid.
    pub invalid: Option<bool>,
    /// The field is read-only.
    pub read_only: Option<bool>,
    /// The field is required.
    pub required: Option<bool>,
    /// Focus handler the field wants on its input.
    pub on_focus: Option<Callback>,
    /// Blur handler the field wants on its input.
    pub on_blur: Option<Callback>,
}

/// Field-derived input props after merging a caller's fallbacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FieldInputProps {
    pub(crate) id: Option<String>,
    pub(crate) disabled: bool,
    pub(crate) invalid: bool,
    pub(crate) read_only: bool,
    pub(crate) required: bool,
    pub(crate) on_focus: Option<Callback>,
    pub(crate) on_blur: Option<Callback>,
}

impl FieldContext {
    /// Merges the field's state over the caller's fallbacks. Field values win.
    pub(crate) fn input_props(&self, fallback: FieldInputFallback) -> FieldInputProps {
        FieldInputProps {
            id: self.id.clone().or(fallback.id),
            disabled: self.disabled.or(fallback.disabled).unwrap_or(false),
            invalid: self.invalid.or(fallback.invalid).unwrap_or(false),
            read_only: self.read_only.or(fallback.read_only).unwrap_or(false),
            required: self.required.unwrap_or(false),
            on_focus: self.on_focus.clone().or(fallback.on_focus),
            on_blur: self.on_blur.clone().or(fallback.on_blur),
        }
    }
}

#[derive(Default)]
pub(crate) struct FieldInputFallback {
    pub(crate) id: Option<String>,
    pub(crate) disabled: Option<bool>,
    pub(crate) invalid: Option<bool>,
    pub(crate) read_only: Option<bool>,
    pub(crate) on_focus: Option<Callback>,
    pub(crate) on_blur: Option<Callback>,
}

/// Props a caller hands to the select adapter.
///
/// Every field is optional. [`SelectProps::reconcile`] turns these into a
/// [`SelectConfig`](crate::SelectConfig) with defaults applied and field
/// context merged in.
pub struct SelectProps<O> {
    /// Replacements for built-in slot renderers.
    pub components: ComponentOverrides<O>,
    /// Size, possibly responsive.
    pub size: Option<ResponsiveValue<SizeToken>>,
    /// Palette for tags. Defaults to gray.
    pub color_palette: Option<ColorPalette>,
    /// Disabled flag, used when no field context sets one.
    pub is_disabled: Option<bool>,
    /// Invalid flag, used when no field context sets one.
    pub is_invalid: Option<bool>,
    /// Read-only flag, used when no field context sets one.
    pub is_read_only: Option<bool>,
    /// Required flag. Wins over the field context when set.
    pub required: Option<bool>,
    /// Older spelling of `required`. Also wins over the field context, but
    /// `required` wins over it.
    pub is_required: Option<bool>,
    /// Input id, used when no field context sets one.
    pub input_id: Option<String>,
    /// Variant for all tags. Per-option data wins.
    pub tag_variant: Option<TagVariant>,
    /// How selected options are marked in the menu.
    pub selected_option_style: Option<Loose<SelectedOptionStyle>>,
    /// Palette for the selected-option tint.
    pub selected_option_color_palette: Option<Loose<ColorPalette>>,
    /// Input variant. Defaults to the recipe source's default.
    pub variant: Option<InputVariant>,
    /// Focus ring color.
    pub focus_border_color: Option<ColorValue>,
    /// Invalid-state border color.
    pub error_border_color: Option<ColorValue>,
    /// Per-slot style callbacks.
    pub style_overrides: StyleOverrides<O>,
    /// Focus handler, used when no field context sets one.
    pub on_focus: Option<Callback>,
    /// Blur handler, used when no field context sets one.
    pub on_blur: Option<Callback>,
    /// Controlled menu state. Read-only selects default it to closed.
    pub menu_is_open: Option<bool>,
    /// Explicit `aria-invalid`. Wins over the field context.
    pub aria_invalid: Option<bool>,
    /// Allow several selected values.
    pub is_multi: bool,
    /// Remove selected options from the menu.
    pub hide_selected_options: Option<bool>,
    /// Show selected values in the control. Defaults to `true`.
    pub control_should_render_value: Option<bool>,
    /// Right-to-left layout.
    pub is_rtl: bool,
    /// Render with plain structural styles instead of an attached addon look.
    pub use_basic_styles: bool,
    /// Prefix for semantic class names. State classes are only emitted with one.
    pub class_name_prefix: Option<String>,
    /// Props for the behavior library, passed through untouched.
    pub extra: Attributes,
}

impl<O> Default for SelectProps<O> {
    fn default() -> Self {
        Self {
            components: ComponentOverrides::default(),
            size: None,
            color_palette: None,
            is_disabled: None,
            is_invalid: None,
            is_read_only: None,
            required: None,
            is_required: None,
            input_id: None,
            tag_variant: None,
            selected_option_style: None,
            selected_option_color_palette: None,
            variant: None,
            focus_border_color: None,
            error_border_color: None,
            style_overrides: StyleOverrides::default(),
            on_focus: None,
            on_blur: None,
            menu_is_open: None,
            aria_invalid: None,
            is_multi: false,
            hide_selected_options: None,
            control_should_render_value: None,
            is_rtl: false,
            use_basic_styles: false,
            class_name_prefix: None,
            extra: Attributes::new(),
        }
    }
}

impl<O> fmt::Debug for SelectProps<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("components", &self.components)
            .field("size", &self.size)
            .field("color_palette", &self.color_palette)
            .field("is_disabled", &self.is_disabled)
            .field("is_invalid", &self.is_invalid)
            .field("is_read_only", &self.is_read_only)
            .field("required", &self.required)
            .field("variant", &self.variant)
            .field("style_overrides", &self.style_overrides)
            .field("is_multi", &self.is_multi)
            .finish_non_exhaustive()
    }
}

impl<O> SelectProps<O> {
    /// Creates props with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: impl Into<ResponsiveValue<SizeToken>>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the tag palette.
    #[must_use]
    pub fn color_palette(mut self, palette: ColorPalette) -> Self {
        self.color_palette = Some(palette);
        self
    }

    /// Sets the input variant.
    #[must_use]
    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the variant for all tags.
    #[must_use]
    pub fn tag_variant(mut self, variant: TagVariant) -> Self {
        self.tag_variant = Some(variant);
        self
    }

    /// Sets how selected options are marked.
    #[must_use]
    pub fn selected_option_style(mut self, style: impl Into<Loose<SelectedOptionStyle>>) -> Self {
        self.selected_option_style = Some(style.into());
        self
    }

    /// Sets the palette for the selected-option tint.
    #[must_use]
    pub fn selected_option_color_palette(mut self, palette: impl Into<Loose<ColorPalette>>) -> Self {
        self.selected_option_color_palette = Some(palette.into());
        self
    }

    /// Allows several selected values.
    #[must_use]
    pub fn multi(mut self, is_multi: bool) -> Self {
        self.is_multi = is_multi;
        self
    }

    /// Sets the disabled fallback.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = Some(disabled);
        self
    }

    /// Sets the read-only fallback.
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.is_read_only = Some(read_only);
        self
    }

    /// Sets the invalid fallback.
    #[must_use]
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.is_invalid = Some(invalid);
        self
    }

    /// Sets the class name prefix.
    #[must_use]
    pub fn class_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_name_prefix = Some(prefix.into());
        self
    }

    /// Sets per-slot style callbacks.
    #[must_use]
    pub fn style_overrides(mut self, overrides: StyleOverrides<O>) -> Self {
        self.style_overrides = overrides;
        self
    }

    /// Sets slot renderer replacements.
    #[must_use]
    pub fn components(mut self, components: ComponentOverrides<O>) -> Self {
        self.components = components;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_values_win_over_fallbacks() {
        let field = FieldContext {
            disabled: Some(true),
            id: Some("field-input".into()),
            ..FieldContext::default()
        };
        let merged = field.input_props(FieldInputFallback {
            disabled: Some(false),
            read_only: Some(true),
            id: Some("own-id".into()),
            ..FieldInputFallback::default()
        });
        assert!(merged.disabled);
        assert!(merged.read_only);
        assert!(!merged.invalid);
        assert_eq!(merged.id.as_deref(), Some("field-input"));
    }

    #[test]
    fn loose_parse_keeps_unrecognized_input() {
        assert_eq!(
            Loose::<SelectedOptionStyle>::parse("check"),
            Loose::Valid(SelectedOptionStyle::Check)
        );
        assert_eq!(Loose::<SelectedOptionStyle>::parse("tick"), Loose::Invalid);
        assert_eq!(Loose::<ColorPalette>::parse("1nope"), Loose::Invalid);
    }
}
