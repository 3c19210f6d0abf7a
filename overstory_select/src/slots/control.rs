// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The control and its indicators.

use alloc::string::String;

use understory_recipe::{
    ColorValue, InputVariant, Part, RecipeKey, RecipeParams, SizeTable, SpinnerSize, StyleObject,
};

use super::icons::{cross_icon, down_chevron};
use super::slot_props;
use crate::element::{Element, Node, Primitive};
use crate::overrides::override_style;
use crate::state::ItemState;

const ICON_SIZES: SizeTable<&str> = SizeTable::new("16px", "20px", "24px");
const SPINNER_SIZES: SizeTable<SpinnerSize> =
    SizeTable::new(SpinnerSize::Xs, SpinnerSize::Sm, SpinnerSize::Md);

slot_props! {
    /// Props for [`control`].
    ///
    /// Reads [`ItemState::FOCUSED`], [`ItemState::DISABLED`] and
    /// [`ItemState::MENU_OPEN`].
    ControlProps<'a, O> {} {}
}

slot_props! {
    /// Props for [`indicator_separator`].
    IndicatorSeparatorProps<'a, O> {} {}
}

slot_props! {
    /// Props for [`dropdown_indicator`] and [`clear_indicator`].
    IndicatorProps<'a, O> {} {}
}

slot_props! {
    /// Props for [`loading_indicator`].
    LoadingIndicatorProps<'a, O> {} {
        /// Spinner color.
        color: Option<ColorValue> = None,
        /// Color of the spinner track.
        empty_color: Option<ColorValue> = None,
        /// Duration of one rotation, e.g. `"0.65s"`.
        speed: Option<&'a str> = None,
        /// Stroke width, e.g. `"2px"`.
        thickness: Option<&'a str> = None,
        /// Explicit spinner size, bypassing the size table.
        spinner_size: Option<SpinnerSize> = None,
    }
}

/// The field-like box the user clicks.
///
/// Starts from the input recipe's field so the select matches plain text
/// inputs, but drops the fixed height: content decides the height and the
/// recipe height becomes `minH`.
pub fn control<O>(props: ControlProps<'_, O>) -> Node {
    let select = props.select;
    let disabled = props.state.contains(ItemState::DISABLED);
    let focused = props.state.contains(ItemState::FOCUSED);
    let menu_open = props.state.contains(ItemState::MENU_OPEN);

    let mut field = select.input_field(select.size());
    let height = field.remove("height");
    let h = field.remove("h");
    let default = field
        .merged(
            StyleObject::new()
                .with("position", "relative")
                .with("display", "flex")
                .with("alignItems", "center")
                .with("justifyContent", "space-between")
                .with("flexWrap", "wrap")
                .with("padding", 0)
                .with("overflow", "hidden")
                .with("height", "auto"),
        )
        .with_opt("minH", height.or(h))
        .with_opt("pointerEvents", disabled.then_some("none"));
    let css = override_style!(&props, control, default);

    Element::new(Primitive::Box)
        .class_names(select.cx(
            &[
                ("control", true),
                ("control--is-disabled", disabled),
                ("control--is-focused", focused),
                ("control--menu-is-open", menu_open),
            ],
            props.class_name,
        ))
        .css(css)
        .attrs(props.inner_props)
        .flag("data-focus", focused)
        .flag("data-focus-visible", focused)
        .flag("data-invalid", select.is_invalid)
        .flag("data-disabled", disabled)
        .flag("data-readonly", select.is_read_only)
        .children(props.children)
        .into()
}

/// Divider between the value area and the indicators.
///
/// Only visible for the `outline` variant without basic styles.
pub fn indicator_separator<O>(props: IndicatorSeparatorProps<'_, O>) -> Node {
    let select = props.select;
    let hidden = select.use_basic_styles || select.variant != InputVariant::Outline;
    let default = StyleObject::new()
        .with("opacity", 1)
        .with_opt("display", hidden.then_some("none"));
    let css = override_style!(&props, indicator_separator, default);

    Element::new(Primitive::Separator)
        .class_names(select.cx(&[("indicator-separator", true)], props.class_name))
        .css(css)
        .attr("orientation", "vertical")
        .into()
}

/// Indicator that opens the menu, styled as the input recipe's addon.
pub fn dropdown_indicator<O>(props: IndicatorProps<'_, O>) -> Node {
    let select = props.select;
    let size = select.size();

    let mut default = select
        .input_recipe(size)
        .take(Part::Addon)
        .merged(
            StyleObject::new()
                .with("display", "flex")
                .with("alignItems", "center")
                .with("justifyContent", "center")
                .with("height", "100%")
                .with("borderRadius", 0)
                .with("borderWidth", 0)
                .with("fontSize", *ICON_SIZES.get(size)),
        );
    if select.use_basic_styles {
        default.extend(
            StyleObject::new()
                .with("background", "transparent")
                .with("padding", 0)
                .with("width", 6)
                .with("marginRight", 2)
                .with("marginLeft", 1)
                .with("cursor", "inherit"),
        );
    }
    let css = override_style!(&props, dropdown_indicator, default);
    let chevron_default = StyleObject::new()
        .with("height", "1em")
        .with("width", "1em");
    let chevron_css = override_style!(&props, down_chevron, chevron_default);

    let el = Element::new(Primitive::Box)
        .attrs(props.inner_props)
        .class_names(select.cx(
            &[("indicator", true), ("dropdown-indicator", true)],
            props.class_name,
        ))
        .css(css);
    if props.children.is_empty() {
        el.child(down_chevron(chevron_css)).into()
    } else {
        el.children(props.children).into()
    }
}

/// Indicator that clears the value, styled with the close-trigger recipe.
pub fn clear_indicator<O>(props: IndicatorProps<'_, O>) -> Node {
    let select = props.select;
    let size = select.size();

    let default = select
        .recipes
        .slot_recipe(RecipeKey::CloseTrigger, &RecipeParams::new().size(size))
        .take(Part::Root)
        .merged(
            StyleObject::new()
                .with("marginX", 1)
                .with("display", "flex")
                .with("alignItems", "center")
                .with("justifyContent", "center")
                .with("flexShrink", 0)
                .with("cursor", "pointer"),
        );
    let css = override_style!(&props, clear_indicator, default);
    let icon_default = StyleObject::new()
        .with("width", "1em")
        .with("height", "1em");
    let icon_css = override_style!(&props, cross_icon, icon_default);

    let el = Element::new(Primitive::Box)
        .attr("role", "button")
        .class_names(select.cx(
            &[("indicator", true), ("clear-indicator", true)],
            props.class_name,
        ))
        .css(css)
        .attr("aria-label", "Clear selected options")
        .attrs(props.inner_props);
    if props.children.is_empty() {
        el.child(cross_icon(icon_css)).into()
    } else {
        el.children(props.children).into()
    }
}

/// Spinner shown while options load.
pub fn loading_indicator<O>(props: LoadingIndicatorProps<'_, O>) -> Node {
    let select = props.select;
    let spinner_size = props
        .spinner_size
        .unwrap_or(*SPINNER_SIZES.get(select.size()));

    let default = StyleObject::new().with("marginRight", 3);
    let css = override_style!(&props, loading_indicator, default)
        .with_opt("--spinner-track-color", props.empty_color);

    let mut el = Element::new(Primitive::Spinner)
        .class_names(select.cx(
            &[("indicator", true), ("loading-indicator", true)],
            props.class_name,
        ))
        .css(css)
        .attrs(props.inner_props)
        .attr("size", spinner_size.as_str());
    if let Some(color) = props.color {
        el = el.attr("color", color);
    }
    if let Some(speed) = props.speed {
        el = el.attr("animationDuration", String::from(speed));
    }
    if let Some(thickness) = props.thickness {
        el = el.attr("borderWidth", String::from(thickness));
    }
    el.into()
}

#[cfg(test)]
mod tests {
    use understory_recipe::{Color, Size, SizeToken};

    use super::*;
    use crate::slots::test_util::{config, element};
    use crate::{AttrValue, Attributes, SelectProps, StyleOverrides};

    #[test]
    fn control_trades_fixed_height_for_min_height() {
        let select = config(SelectProps::new().size(SizeToken::Lg));
        let el = element(control(ControlProps::new(&select)));
        assert_eq!(el.css.get_str("height"), Some("auto"));
        assert_eq!(el.css.get_str("minH"), Some("11"));
        assert_eq!(el.css.get_number("padding"), Some(0.0));
        assert_eq!(el.css.get_str("borderRadius"), Some("l2"));
        assert!(!el.css.contains("pointerEvents"));
    }

    #[test]
    fn disabled_control_ignores_pointer() {
        let select = config(SelectProps::new().invalid(true));
        let el = element(control(
            ControlProps::new(&select).state(ItemState::DISABLED | ItemState::FOCUSED),
        ));
        assert_eq!(el.css.get_str("pointerEvents"), Some("none"));
        assert_eq!(el.attrs.get("data-disabled"), Some(&AttrValue::Bool(true)));
        assert_eq!(el.attrs.get("data-focus"), Some(&AttrValue::Bool(true)));
        assert_eq!(el.attrs.get("data-invalid"), Some(&AttrValue::Bool(true)));
        assert!(!el.attrs.contains("data-readonly"));
        assert!(el.class_names.contains("rs__control--is-focused"));
        assert!(!el.class_names.contains("rs__control--menu-is-open"));
    }

    #[test]
    fn separator_hidden_unless_outline() {
        let outline = config(SelectProps::new());
        let el = element(indicator_separator(IndicatorSeparatorProps::new(&outline)));
        assert!(!el.css.contains("display"));

        let subtle = config(SelectProps::new().variant(InputVariant::Subtle));
        let el = element(indicator_separator(IndicatorSeparatorProps::new(&subtle)));
        assert_eq!(el.css.get_str("display"), Some("none"));

        let mut basic = SelectProps::new();
        basic.use_basic_styles = true;
        let basic = config(basic);
        let el = element(indicator_separator(IndicatorSeparatorProps::new(&basic)));
        assert_eq!(el.css.get_str("display"), Some("none"));
    }

    #[test]
    fn dropdown_icon_size_follows_size() {
        for (token, expected) in [
            (SizeToken::Sm, "16px"),
            (SizeToken::Md, "20px"),
            (SizeToken::Lg, "24px"),
        ] {
            let select = config(SelectProps::new().size(token));
            let el = element(dropdown_indicator(IndicatorProps::new(&select)));
            assert_eq!(el.css.get_str("fontSize"), Some(expected));
            assert_eq!(el.css.get_number("borderWidth"), Some(0.0));
            assert_eq!(el.children.len(), 1);
        }
    }

    #[test]
    fn chevron_override_reaches_glyph_only() {
        let select = config(SelectProps::new().style_overrides(
            StyleOverrides::default().down_chevron(|style, _| style.with("color", "red.500")),
        ));
        let el = element(dropdown_indicator(IndicatorProps::new(&select)));
        assert!(!el.css.contains("color"));
        let glyph = el.children[0].as_element().map(|g| g.css.get_str("color"));
        assert_eq!(glyph, Some(Some("red.500")));
    }

    #[test]
    fn clear_indicator_uses_children_when_given() {
        let select = config(SelectProps::new());
        let el = element(clear_indicator(
            IndicatorProps::new(&select)
                .inner_props(Attributes::new().with("aria-label", "Reset"))
                .child(Node::text("x")),
        ));
        assert_eq!(el.text_content(), "x");
        assert_eq!(el.attrs.get("aria-label").and_then(AttrValue::as_str), Some("Reset"));
        assert_eq!(el.attrs.get("role").and_then(AttrValue::as_str), Some("button"));
        assert_eq!(el.css.get_str("boxSize"), Some("7"));

        let el = element(clear_indicator(IndicatorProps::new(&select)));
        assert_eq!(
            el.attrs.get("aria-label").and_then(AttrValue::as_str),
            Some("Clear selected options")
        );
        assert_eq!(el.children[0].as_element().map(|g| g.primitive), Some(Primitive::Icon));
    }

    #[test]
    fn spinner_size_maps_to_its_own_scale() {
        let select = config(SelectProps::new().size(Size::Lg));
        let el = element(loading_indicator(LoadingIndicatorProps::new(&select)));
        assert_eq!(el.attrs.get("size").and_then(AttrValue::as_str), Some("md"));

        let mut props = LoadingIndicatorProps::new(&select);
        props.spinner_size = Some(SpinnerSize::Xl);
        props.empty_color = Some(Color::from_rgb8(0xee, 0xee, 0xee).into());
        props.speed = Some("0.45s");
        let el = element(loading_indicator(props));
        assert_eq!(el.attrs.get("size").and_then(AttrValue::as_str), Some("xl"));
        assert_eq!(
            el.attrs.get("animationDuration").and_then(AttrValue::as_str),
            Some("0.45s")
        );
        assert!(el.css.contains("--spinner-track-color"));
        assert_eq!(el.css.get_number("marginRight"), Some(3.0));
    }

    #[test]
    fn spinner_props_stay_out_of_overridden_style() {
        let select = config(SelectProps::new().style_overrides(
            StyleOverrides::default().loading_indicator(|_, _| StyleObject::new()),
        ));
        let mut props = LoadingIndicatorProps::new(&select);
        props.color = Some("red.500".into());
        props.speed = Some("0.4s");
        props.thickness = Some("3px");
        let el = element(loading_indicator(props));
        assert!(el.css.is_empty());
        assert_eq!(el.attrs.get("color").and_then(AttrValue::as_str), Some("red.500"));
        assert_eq!(
            el.attrs.get("animationDuration").and_then(AttrValue::as_str),
            Some("0.4s")
        );
        assert_eq!(el.attrs.get("borderWidth").and_then(AttrValue::as_str), Some("3px"));

        let mut props = LoadingIndicatorProps::new(&select);
        props.color = Some(Color::from_rgb8(0x20, 0x40, 0x60).into());
        let el = element(loading_indicator(props));
        assert_eq!(
            el.attrs.get("color"),
            Some(&AttrValue::Color(Color::from_rgb8(0x20, 0x40, 0x60)))
        );
    }
}
