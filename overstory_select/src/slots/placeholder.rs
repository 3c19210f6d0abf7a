// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text shown while the select has no value.

use understory_recipe::StyleObject;

use super::slot_props;
use crate::element::{Element, Node, Primitive};
use crate::overrides::override_style;

slot_props! {
    /// Props for [`placeholder`].
    PlaceholderProps<'a, O> {} {}
}

/// Muted text shown while there is no value.
pub fn placeholder<O>(props: PlaceholderProps<'_, O>) -> Node {
    let default = StyleObject::new()
        .with("gridArea", "1 / 1 / 2 / 3")
        .with("color", "fg.subtle")
        .with("mx", "0.125rem")
        .with("userSelect", "none");
    let css = override_style!(&props, placeholder, default);

    Element::new(Primitive::Box)
        .attrs(props.inner_props)
        .class_names(props.select.cx(&[("placeholder", true)], props.class_name))
        .css(css)
        .children(props.children)
        .into()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::slots::test_util::{config, element};
    use crate::SelectProps;

    #[test]
    fn placeholder_overlays_value_area() {
        let select = config(SelectProps::new());
        let el = element(placeholder(
            PlaceholderProps::new(&select)
                .class_name("hint")
                .child(Node::text("Pick a fruit")),
        ));
        assert_eq!(el.css.get_str("gridArea"), Some("1 / 1 / 2 / 3"));
        assert_eq!(el.css.get_str("color"), Some("fg.subtle"));
        assert_eq!(el.class_names.to_string(), "hint rs__placeholder");
        assert_eq!(el.text_content(), "Pick a fruit");
    }
}
