// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconciling caller props with field context and design-system defaults.

use alloc::rc::Rc;

use understory_recipe::{ColorPalette, RecipeSource};

use crate::components::Components;
use crate::config::SelectConfig;
use crate::data::TagData;
use crate::element::{AttrValue, Attributes};
use crate::props::{FieldContext, FieldInputFallback, Loose, SelectProps, SelectedOptionStyle};

/// Palette for the selected-option tint when none is usable.
pub const DEFAULT_SELECTED_OPTION_PALETTE: ColorPalette = ColorPalette::BLUE;

impl<O: TagData + 'static> SelectProps<O> {
    /// Resolves these props into a complete configuration.
    ///
    /// Precedence, highest first:
    ///
    /// - The field context decides disabled, invalid, read-only, input id and
    ///   focus/blur handlers. The select's own values are fallbacks.
    /// - `required` (or `is_required`) from the caller wins over the field.
    /// - An explicit `aria_invalid` wins for the ARIA attribute only. An
    ///   `aria-invalid` in `extra` counts as explicit when the typed field is
    ///   unset, and is always removed from `extra`.
    /// - An uncontrolled menu is forced closed when read-only.
    /// - Unrecognized `selected_option_style` becomes [`SelectedOptionStyle::Color`]
    ///   and an unusable selected-option palette becomes
    ///   [`DEFAULT_SELECTED_OPTION_PALETTE`].
    /// - The variant falls back to the recipe source's default input variant.
    /// - Caller components replace built-ins one slot at a time.
    ///
    /// Nothing here fails: every fallback is silent apart from a `debug`
    /// event.
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use overstory_select::{FieldContext, Loose, SelectProps, SelectedOptionStyle};
    /// use understory_recipe::DefaultRecipes;
    ///
    /// let field = FieldContext {
    ///     read_only: Some(true),
    ///     ..FieldContext::default()
    /// };
    /// let config = SelectProps::<String>::new()
    ///     .selected_option_style(Loose::<SelectedOptionStyle>::parse("tick"))
    ///     .reconcile(&field, Rc::new(DefaultRecipes::new()));
    ///
    /// assert_eq!(config.selected_option_style, SelectedOptionStyle::Color);
    /// assert_eq!(config.menu_is_open, Some(false));
    /// assert!(config.is_read_only);
    /// ```
    pub fn reconcile(self, field: &FieldContext, recipes: Rc<dyn RecipeSource>) -> SelectConfig<O> {
        let Self {
            components,
            size,
            color_palette,
            is_disabled,
            is_invalid,
            is_read_only,
            required,
            is_required,
            input_id,
            tag_variant,
            selected_option_style,
            selected_option_color_palette,
            variant,
            focus_border_color,
            error_border_color,
            style_overrides,
            on_focus,
            on_blur,
            menu_is_open,
            aria_invalid,
            is_multi,
            hide_selected_options,
            control_should_render_value,
            is_rtl,
            use_basic_styles,
            class_name_prefix,
            mut extra,
        } = self;

        let input = field.input_props(FieldInputFallback {
            id: input_id,
            disabled: is_disabled,
            invalid: is_invalid,
            read_only: is_read_only,
            on_focus,
            on_blur,
        });
        let required = required.or(is_required).unwrap_or(input.required);
        let menu_is_open = menu_is_open.or(input.read_only.then_some(false));
        let passed_aria_invalid = passed_aria_invalid(&mut extra);
        let aria_invalid = aria_invalid
            .or(passed_aria_invalid)
            .or(input.invalid.then_some(true));

        let selected_option_style = match selected_option_style {
            None => SelectedOptionStyle::Color,
            Some(Loose::Valid(style)) => style,
            Some(Loose::Invalid) => {
                tracing::debug!("unrecognized selected option style, using color");
                SelectedOptionStyle::Color
            }
        };
        let selected_option_color_palette = match selected_option_color_palette {
            None => DEFAULT_SELECTED_OPTION_PALETTE,
            Some(Loose::Valid(palette)) => palette,
            Some(Loose::Invalid) => {
                tracing::debug!(
                    fallback = DEFAULT_SELECTED_OPTION_PALETTE.as_str(),
                    "unusable selected option color palette"
                );
                DEFAULT_SELECTED_OPTION_PALETTE
            }
        };
        let variant = variant.unwrap_or_else(|| recipes.default_input_variant());

        tracing::trace!(
            is_disabled = input.disabled,
            is_invalid = input.invalid,
            is_read_only = input.read_only,
            required,
            ?menu_is_open,
            variant = variant.as_str(),
            "reconciled select props"
        );

        SelectConfig {
            components: Components::builtin().merged(components),
            recipes,
            style_overrides,
            size,
            color_palette: color_palette.unwrap_or_default(),
            tag_variant,
            selected_option_style,
            selected_option_color_palette,
            variant,
            focus_border_color,
            error_border_color,
            on_focus: input.on_focus,
            on_blur: input.on_blur,
            is_disabled: input.disabled,
            is_invalid: input.invalid,
            is_read_only: input.read_only,
            required,
            input_id: input.id,
            menu_is_open,
            aria_invalid,
            is_multi,
            hide_selected_options,
            control_should_render_value: control_should_render_value.unwrap_or(true),
            is_rtl,
            use_basic_styles,
            class_name_prefix,
            extra,
        }
    }
}

/// Takes `aria-invalid` out of the pass-through attributes.
///
/// The typed value is authoritative, so the attribute never survives into the
/// config, even when the typed value was set explicitly.
fn passed_aria_invalid(extra: &mut Attributes) -> Option<bool> {
    match extra.remove("aria-invalid")? {
        AttrValue::Bool(value) => Some(value),
        AttrValue::Str(value) if value == "true" => Some(true),
        AttrValue::Str(value) if value == "false" => Some(false),
        other => {
            tracing::debug!(?other, "ignoring unusable pass-through aria-invalid");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use understory_recipe::{DefaultRecipes, InputVariant};

    use super::*;
    use crate::element::Callback;

    fn reconcile(props: SelectProps<String>, field: &FieldContext) -> SelectConfig<String> {
        props.reconcile(field, Rc::new(DefaultRecipes::new()))
    }

    #[test]
    fn field_disabled_wins_when_caller_is_silent() {
        let field = FieldContext {
            disabled: Some(true),
            ..FieldContext::default()
        };
        assert!(reconcile(SelectProps::new(), &field).is_disabled);
        assert!(reconcile(SelectProps::new().disabled(false), &field).is_disabled);
    }

    #[test]
    fn caller_flags_apply_without_field() {
        let config = reconcile(
            SelectProps::new().disabled(true).invalid(true),
            &FieldContext::default(),
        );
        assert!(config.is_disabled);
        assert!(config.is_invalid);
        assert_eq!(config.aria_invalid, Some(true));
    }

    #[test]
    fn explicit_required_wins_over_field() {
        let field = FieldContext {
            required: Some(true),
            ..FieldContext::default()
        };
        let mut props = SelectProps::new();
        props.required = Some(false);
        assert!(!reconcile(props, &field).required);

        let mut props = SelectProps::new();
        props.is_required = Some(true);
        assert!(reconcile(props, &FieldContext::default()).required);
        assert!(reconcile(SelectProps::new(), &field).required);
    }

    #[test]
    fn aria_invalid_is_separate_from_styling_invalid() {
        let field = FieldContext {
            invalid: Some(true),
            ..FieldContext::default()
        };
        let mut props = SelectProps::new();
        props.aria_invalid = Some(false);
        let config = reconcile(props, &field);
        assert!(config.is_invalid);
        assert_eq!(config.aria_invalid, Some(false));
    }

    #[test]
    fn pass_through_aria_invalid_is_reconciled() {
        let field = FieldContext {
            invalid: Some(true),
            ..FieldContext::default()
        };
        let mut props = SelectProps::new();
        props.extra = Attributes::new()
            .with("aria-invalid", false)
            .with("data-testid", "fruit-select");
        let config = reconcile(props, &field);
        assert_eq!(config.aria_invalid, Some(false));
        assert!(!config.extra.contains("aria-invalid"));
        assert!(config.extra.contains("data-testid"));

        let mut props = SelectProps::new();
        props.aria_invalid = Some(true);
        props.extra = Attributes::new().with("aria-invalid", "false");
        let config = reconcile(props, &FieldContext::default());
        assert_eq!(config.aria_invalid, Some(true));
        assert!(!config.extra.contains("aria-invalid"));

        let mut props = SelectProps::new();
        props.extra = Attributes::new().with("aria-invalid", 1.0);
        let config = reconcile(props, &field);
        assert_eq!(config.aria_invalid, Some(true));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn menu_state_follows_read_only() {
        let read_only = FieldContext {
            read_only: Some(true),
            ..FieldContext::default()
        };
        assert_eq!(reconcile(SelectProps::new(), &read_only).menu_is_open, Some(false));
        assert_eq!(
            reconcile(SelectProps::new(), &FieldContext::default()).menu_is_open,
            None
        );
        let mut props = SelectProps::new();
        props.menu_is_open = Some(true);
        assert_eq!(reconcile(props, &read_only).menu_is_open, Some(true));
    }

    #[test]
    fn unusable_settings_fall_back() {
        let config = reconcile(
            SelectProps::new()
                .selected_option_style(Loose::<SelectedOptionStyle>::Invalid)
                .selected_option_color_palette(Loose::<ColorPalette>::Invalid),
            &FieldContext::default(),
        );
        assert_eq!(config.selected_option_style, SelectedOptionStyle::Color);
        assert_eq!(config.selected_option_color_palette, ColorPalette::BLUE);

        let config = reconcile(
            SelectProps::new()
                .selected_option_style(SelectedOptionStyle::Check)
                .selected_option_color_palette(ColorPalette::PURPLE),
            &FieldContext::default(),
        );
        assert_eq!(config.selected_option_style, SelectedOptionStyle::Check);
        assert_eq!(config.selected_option_color_palette, ColorPalette::PURPLE);
    }

    #[test]
    fn variant_defaults_to_recipe_source() {
        let recipes = Rc::new(DefaultRecipes::new().with_default_variant(InputVariant::Subtle));
        let config = SelectProps::<String>::new().reconcile(&FieldContext::default(), recipes);
        assert_eq!(config.variant, InputVariant::Subtle);

        let config = reconcile(
            SelectProps::new().variant(InputVariant::Flushed),
            &FieldContext::default(),
        );
        assert_eq!(config.variant, InputVariant::Flushed);
    }

    #[test]
    fn field_handlers_replace_caller_handlers() {
        let field_focus = Callback::new(|| {});
        let caller_focus = Callback::new(|| {});
        let caller_blur = Callback::new(|| {});
        let field = FieldContext {
            on_focus: Some(field_focus.clone()),
            ..FieldContext::default()
        };
        let mut props = SelectProps::new();
        props.on_focus = Some(caller_focus);
        props.on_blur = Some(caller_blur.clone());
        let config = reconcile(props, &field);
        assert_eq!(config.on_focus, Some(field_focus));
        assert_eq!(config.on_blur, Some(caller_blur));
    }

    #[test]
    fn defaults_are_concrete() {
        let config = reconcile(SelectProps::new(), &FieldContext::default());
        assert_eq!(config.color_palette, ColorPalette::GRAY);
        assert_eq!(config.variant, InputVariant::Outline);
        assert!(config.control_should_render_value);
        assert!(!config.required);
    }
}
