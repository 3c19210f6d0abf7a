// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural containers.

use understory_recipe::StyleObject;

use super::slot_props;
use crate::element::{Element, Node, Primitive};
use crate::overrides::override_style;
use crate::state::ItemState;

slot_props! {
    /// Props for [`select_container`].
    ///
    /// Reads [`ItemState::DISABLED`], [`ItemState::RTL`] and
    /// [`ItemState::HAS_VALUE`].
    ContainerProps<'a, O> {} {}
}

slot_props! {
    /// Props for [`value_container`].
    ///
    /// Reads [`ItemState::MULTI`] and [`ItemState::HAS_VALUE`].
    ValueContainerProps<'a, O> {} {}
}

slot_props! {
    /// Props for [`indicators_container`].
    IndicatorsContainerProps<'a, O> {} {}
}

/// Outermost element of the select.
pub fn select_container<O>(props: ContainerProps<'_, O>) -> Node {
    let disabled = props.state.contains(ItemState::DISABLED);
    let rtl = props.state.contains(ItemState::RTL);
    let has_value = props.state.contains(ItemState::HAS_VALUE);

    let default = StyleObject::new()
        .with("position", "relative")
        .with_opt("direction", rtl.then_some("rtl"))
        .with_opt("cursor", disabled.then_some("not-allowed"));
    let css = override_style!(&props, container, default);

    Element::new(Primitive::Box)
        .attrs(props.inner_props)
        .class_names(props.select.cx(
            &[
                ("--is-disabled", disabled),
                ("--is-rtl", rtl),
                ("--has-value", has_value),
            ],
            props.class_name,
        ))
        .css(css)
        .children(props.children)
        .into()
}

/// Area holding the placeholder, single value, tags and input.
///
/// Lays tags out with flex when several values are shown and with a grid
/// otherwise. Horizontal padding follows the input recipe's field.
pub fn value_container<O>(props: ValueContainerProps<'_, O>) -> Node {
    let select = props.select;
    let multi = props.state.contains(ItemState::MULTI);
    let has_value = props.state.contains(ItemState::HAS_VALUE);
    let shows_tags = multi && has_value && select.control_should_render_value;

    let field = select.input_field(select.size());
    let default = StyleObject::new()
        .with("display", if shows_tags { "flex" } else { "grid" })
        .with("alignItems", "center")
        .with("flex", 1)
        .with("paddingY", "2px")
        .with_opt("paddingX", field.get("px").cloned())
        .with("flexWrap", "wrap")
        .with("WebkitOverflowScrolling", "touch")
        .with("position", "relative")
        .with("overflow", "hidden");
    let css = override_style!(&props, value_container, default);

    Element::new(Primitive::Box)
        .attrs(props.inner_props)
        .class_names(select.cx(
            &[
                ("value-container", true),
                ("value-container--is-multi", multi),
                ("value-container--has-value", has_value),
            ],
            props.class_name,
        ))
        .css(css)
        .children(props.children)
        .into()
}

/// Area holding the indicators at the end of the control.
pub fn indicators_container<O>(props: IndicatorsContainerProps<'_, O>) -> Node {
    let default = StyleObject::new()
        .with("display", "flex")
        .with("alignItems", "center")
        .with("alignSelf", "stretch")
        .with("flexShrink", 0);
    let css = override_style!(&props, indicators_container, default);

    Element::new(Primitive::Box)
        .attrs(props.inner_props)
        .class_names(props.select.cx(&[("indicators", true)], props.class_name))
        .css(css)
        .children(props.children)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::test_util::{config, element};
    use crate::{SelectProps, StyleOverrides};

    #[test]
    fn container_flags_drive_cursor_and_direction() {
        let select = config(SelectProps::new());
        let el = element(select_container(
            ContainerProps::new(&select).state(ItemState::DISABLED | ItemState::RTL),
        ));
        assert_eq!(el.css.get_str("cursor"), Some("not-allowed"));
        assert_eq!(el.css.get_str("direction"), Some("rtl"));
        assert!(el.class_names.contains("rs--is-disabled"));
        assert!(el.class_names.contains("rs--is-rtl"));

        let el = element(select_container(ContainerProps::new(&select)));
        assert!(!el.css.contains("cursor"));
        assert!(!el.css.contains("direction"));
        assert_eq!(el.css.get_str("position"), Some("relative"));
    }

    #[test]
    fn value_container_switches_to_flex_for_tags() {
        let select = config(SelectProps::new().multi(true));
        let el = element(value_container(
            ValueContainerProps::new(&select).state(ItemState::MULTI | ItemState::HAS_VALUE),
        ));
        assert_eq!(el.css.get_str("display"), Some("flex"));
        assert_eq!(el.css.get_str("paddingX"), Some("3"));

        let el = element(value_container(
            ValueContainerProps::new(&select).state(ItemState::MULTI),
        ));
        assert_eq!(el.css.get_str("display"), Some("grid"));

        let mut props = SelectProps::new().multi(true);
        props.control_should_render_value = Some(false);
        let hidden_values = config(props);
        let el = element(value_container(
            ValueContainerProps::new(&hidden_values)
                .state(ItemState::MULTI | ItemState::HAS_VALUE),
        ));
        assert_eq!(el.css.get_str("display"), Some("grid"));
    }

    #[test]
    fn override_replaces_default() {
        let select = config(SelectProps::new().style_overrides(
            StyleOverrides::default()
                .indicators_container(|style, _| style.with("gap", "1").without("alignSelf")),
        ));
        let el = element(indicators_container(IndicatorsContainerProps::new(&select)));
        assert_eq!(el.css.get_str("gap"), Some("1"));
        assert!(!el.css.contains("alignSelf"));
        assert!(el.class_names.contains("rs__indicators"));
    }
}
