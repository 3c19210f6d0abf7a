// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selected value of a single-select.

use understory_recipe::StyleObject;

use super::slot_props;
use crate::element::{Element, Node, Primitive};
use crate::overrides::override_style;
use crate::state::ItemState;

slot_props! {
    /// Props for [`single_value`].
    ///
    /// Reads [`ItemState::DISABLED`].
    SingleValueProps<'a, O> {
        /// The selected option.
        data: &'a O,
    } {}
}

/// The selected option of a single-value select, truncated with an ellipsis.
pub fn single_value<O>(props: SingleValueProps<'_, O>) -> Node {
    let disabled = props.state.contains(ItemState::DISABLED);
    let default = StyleObject::new()
        .with("gridArea", "1 / 1 / 2 / 3")
        .with("mx", "0.125rem")
        .with("maxWidth", "100%")
        .with("overflow", "hidden")
        .with("textOverflow", "ellipsis")
        .with("whiteSpace", "nowrap");
    let css = override_style!(&props, single_value, default);

    Element::new(Primitive::Box)
        .class_names(props.select.cx(
            &[("single-value", true), ("single-value--is-disabled", disabled)],
            props.class_name,
        ))
        .css(css)
        .attrs(props.inner_props)
        .children(props.children)
        .into()
}
