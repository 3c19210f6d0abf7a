// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The typed-text input.

use alloc::string::String;

use understory_recipe::StyleObject;

use super::slot_props;
use crate::element::{Element, Node, Primitive};
use crate::overrides::override_style;
use crate::state::ItemState;

slot_props! {
    /// Props for [`input`].
    ///
    /// Reads [`ItemState::DISABLED`] and [`ItemState::HIDDEN`].
    InputProps<'a, O> {
        /// Text typed so far.
        value: &'a str,
    } {
        /// Class name for the inner input element.
        input_class_name: Option<&'a str> = None,
    }
}

fn spacing() -> StyleObject {
    StyleObject::new()
        .with("gridArea", "1 / 2")
        .with("minW", "2px")
        .with("border", 0)
        .with("margin", 0)
        .with("outline", 0)
        .with("padding", 0)
}

/// Text input wrapped in an auto-sizing grid.
///
/// The wrapper mirrors the typed value into a hidden `_after` pseudo element
/// so the grid column grows with the text. Disabled inputs are hidden with
/// `visibility` rather than removed so the layout stays put. The wrapper
/// carries `transform: translateZ(0)` while text is present so style engines
/// that cache generated classes recompute the mirrored width on each
/// keystroke.
pub fn input<O>(props: InputProps<'_, O>) -> Node {
    let select = props.select;
    let disabled = props.state.contains(ItemState::DISABLED);
    let hidden = props.state.contains(ItemState::HIDDEN);

    let container_default = StyleObject::new()
        .with("flex", "1 1 auto")
        .with("display", "inline-grid")
        .with("gridArea", "1 / 1 / 2 / 3")
        .with("gridTemplateColumns", "0 min-content")
        .with("color", "inherit")
        .with("marginX", "0.125rem")
        .with("paddingY", "0.125rem")
        .with("visibility", if disabled { "hidden" } else { "visible" })
        .with(
            "transform",
            if props.value.is_empty() { "" } else { "translateZ(0)" },
        )
        .with(
            "_after",
            StyleObject::new()
                .with("content", "attr(data-value) \" \"")
                .with("visibility", "hidden")
                .with("whiteSpace", "pre")
                .with("padding", 0)
                .merged(spacing()),
        );
    let container_css = override_style!(&props, input_container, container_default);

    let input_default = StyleObject::new()
        .with("background", 0)
        .with("opacity", if hidden { 0 } else { 1 })
        .with("width", "100%")
        .merged(spacing());
    let input_css = override_style!(&props, input, input_default);

    let field = Element::new(Primitive::Input)
        .class_names(select.cx(&[("input", true)], props.input_class_name))
        .css(input_css)
        .flag("disabled", disabled)
        .flag("readOnly", select.is_read_only)
        .attrs(props.inner_props);

    Element::new(Primitive::Box)
        .class_names(select.cx(&[("input-container", true)], props.class_name))
        .attr("data-value", String::from(props.value))
        .css(container_css)
        .child(field)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::test_util::{config, element};
    use crate::{AttrValue, Attributes, SelectProps, StyleOverrides};

    #[test]
    fn typed_text_forces_style_invalidation() {
        let select = config(SelectProps::new());
        let el = element(input(InputProps::new(&select, "ap")));
        assert_eq!(el.css.get_str("transform"), Some("translateZ(0)"));
        assert_eq!(el.attrs.get("data-value").and_then(AttrValue::as_str), Some("ap"));
        let after = el.css.get_nested("_after").cloned().unwrap_or_default();
        assert_eq!(after.get_str("content"), Some("attr(data-value) \" \""));
        assert_eq!(after.get_str("gridArea"), Some("1 / 2"));

        let el = element(input(InputProps::new(&select, "")));
        assert_eq!(el.css.get_str("transform"), Some(""));
    }

    #[test]
    fn disabled_and_hidden_toggle_visibility() {
        let select = config(SelectProps::new().read_only(true));
        let el = element(input(
            InputProps::new(&select, "").state(ItemState::DISABLED | ItemState::HIDDEN),
        ));
        assert_eq!(el.css.get_str("visibility"), Some("hidden"));
        let field = el.children[0].as_element().expect("inner input");
        assert_eq!(field.primitive, Primitive::Input);
        assert_eq!(field.css.get_number("opacity"), Some(0.0));
        assert_eq!(field.attrs.get("disabled"), Some(&AttrValue::Bool(true)));
        assert_eq!(field.attrs.get("readOnly"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn container_and_input_override_separately() {
        let select = config(SelectProps::new().style_overrides(
            StyleOverrides::default()
                .input_container(|style, props| style.with("--typed", String::from(props.value)))
                .input(|style, _| style.with("caretColor", "blue.500")),
        ));
        let mut input_class = InputProps::new(&select, "abc")
            .inner_props(Attributes::new().with("id", "fruit-input"));
        input_class.input_class_name = Some("mine");
        let el = element(input(input_class));
        assert_eq!(el.css.get_str("--typed"), Some("abc"));
        assert!(!el.css.contains("caretColor"));
        let field = el.find_class("rs__input").map(|f| f.css.get_str("caretColor"));
        assert_eq!(field, Some(Some("blue.500")));
        let inner = el.find_class("mine").map(|f| f.attrs.get("id").cloned());
        assert_eq!(inner, Some(Some(AttrValue::from("fruit-input"))));
        assert!(el.class_names.contains("rs__input-container"));
    }
}
