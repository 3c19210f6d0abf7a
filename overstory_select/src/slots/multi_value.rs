// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selected options shown as tags in a multi-select.

use alloc::format;

use understory_recipe::{ColorPalette, Part, RecipeKey, RecipeParams, StyleObject, TagVariant};

use super::icons::tag_close_icon;
use super::slot_props;
use crate::data::{Capability, TagData};
use crate::element::{Attributes, ClassList, Element, Node, Primitive, text_content};
use crate::overrides::override_style;
use crate::state::ItemState;

slot_props! {
    /// Props for [`multi_value`].
    ///
    /// Reads [`ItemState::FOCUSED`] and [`ItemState::DISABLED`].
    MultiValueProps<'a, O> {
        /// The selected option.
        data: &'a O,
    } {
        /// Attributes passed on to the remove control.
        remove_props: Attributes = Attributes::new(),
        /// Truncate long labels with an ellipsis. Unset means on.
        crop_with_ellipsis: Option<bool> = None,
    }
}

slot_props! {
    /// Props for [`multi_value_container`] and [`multi_value_label`].
    ///
    /// Built by [`multi_value`] with the classes and style already resolved.
    MultiValueGenericProps<'a, O> {
        /// The selected option.
        data: &'a O,
        /// Resolved classes.
        class_names: ClassList,
        /// Resolved style.
        css: StyleObject,
    } {}
}

slot_props! {
    /// Props for [`multi_value_remove`].
    ///
    /// Reads [`ItemState::FOCUSED`].
    MultiValueRemoveProps<'a, O> {
        /// The selected option.
        data: &'a O,
        /// Resolved classes.
        class_names: ClassList,
        /// Resolved style.
        css: StyleObject,
    } {}
}

fn tag_palette<O: TagData>(data: &O, fallback: &ColorPalette) -> ColorPalette {
    match data.color_palette() {
        Capability::Valid(palette) => palette,
        Capability::Invalid => {
            tracing::debug!(
                fallback = fallback.as_str(),
                "unusable tag color palette on option"
            );
            fallback.clone()
        }
        Capability::Absent => fallback.clone(),
    }
}

/// A selected option shown as a tag.
///
/// The tag palette comes from the option, then the select. The variant comes
/// from the option, then the select's tag variant, then `solid` for fixed
/// options and `subtle` for the rest. Container, label and remove control
/// are rendered through their own slots so each can be replaced separately.
pub fn multi_value<O: TagData>(props: MultiValueProps<'_, O>) -> Node {
    let select = props.select;
    let data = props.data;
    let disabled = props.state.contains(ItemState::DISABLED);
    let is_fixed = data.is_fixed().valid().unwrap_or(false);

    let palette = tag_palette(data, &select.color_palette);
    let variant = data
        .variant()
        .valid()
        .or(select.tag_variant)
        .unwrap_or(if is_fixed {
            TagVariant::Solid
        } else {
            TagVariant::Subtle
        });
    let mut tag = select.recipes.slot_recipe(
        RecipeKey::Tag,
        &RecipeParams::new()
            .size(select.size())
            .variant(variant.as_str())
            .color_palette(&palette),
    );

    let container_default = tag.take(Part::Root).merged(
        StyleObject::new()
            .with("display", "flex")
            .with("alignItems", "center")
            .with("minWidth", 0)
            .with("margin", "0.125rem"),
    );
    let label_default = tag
        .take(Part::Label)
        .merged(
            StyleObject::new()
                .with("overflow", "hidden")
                .with("whiteSpace", "nowrap"),
        )
        .with_opt(
            "textOverflow",
            (props.crop_with_ellipsis != Some(false)).then_some("ellipsis"),
        );
    let remove_default = tag.take(Part::CloseTrigger).merged(
        StyleObject::new()
            .with("display", "flex")
            .with("alignItems", "center")
            .with("justifyContent", "center"),
    );
    let container_css = override_style!(&props, multi_value, container_default);
    let label_css = override_style!(&props, multi_value_label, label_default);
    let remove_css = override_style!(&props, multi_value_remove, remove_default);

    let text = text_content(&props.children);
    let subject = if text.is_empty() { "option" } else { text.as_str() };
    let mut remove_attrs = Attributes::new().with("aria-label", format!("Remove {subject}"));
    remove_attrs.extend(props.remove_props);

    let components = &select.components;
    let label = (components.multi_value_label)(
        MultiValueGenericProps::new(
            select,
            data,
            select.cx(&[("multi-value__label", true)], props.class_name),
            label_css,
        )
        .children(props.children),
    );
    let remove = (components.multi_value_remove)(
        MultiValueRemoveProps::new(
            select,
            data,
            select.cx(&[("multi-value__remove", true)], props.class_name),
            remove_css,
        )
        .inner_props(remove_attrs)
        .state(props.state),
    );
    (components.multi_value_container)(
        MultiValueGenericProps::new(
            select,
            data,
            select.cx(
                &[("multi-value", true), ("multi-value--is-disabled", disabled)],
                props.class_name,
            ),
            container_css,
        )
        .inner_props(props.inner_props)
        .state(props.state)
        .child(label)
        .child(remove),
    )
}

/// Outer element of a tag.
pub fn multi_value_container<O>(props: MultiValueGenericProps<'_, O>) -> Node {
    Element::new(Primitive::Span)
        .class_names(props.class_names)
        .css(props.css)
        .attrs(props.inner_props)
        .children(props.children)
        .into()
}

/// Text of a tag.
pub fn multi_value_label<O>(props: MultiValueGenericProps<'_, O>) -> Node {
    Element::new(Primitive::Span)
        .class_names(props.class_names)
        .css(props.css)
        .attrs(props.inner_props)
        .children(props.children)
        .into()
}

/// Remove control of a tag. Fixed options render nothing.
pub fn multi_value_remove<O: TagData>(props: MultiValueRemoveProps<'_, O>) -> Node {
    if props.data.is_fixed().valid() == Some(true) {
        return Node::Empty;
    }
    let focused = props.state.contains(ItemState::FOCUSED);
    let el = Element::new(Primitive::Box)
        .attrs(props.inner_props)
        .attr("role", "button")
        .class_names(props.class_names)
        .css(props.css)
        .flag("data-focus", focused)
        .flag("data-focus-visible", focused);
    if props.children.is_empty() {
        el.child(tag_close_icon()).into()
    } else {
        el.children(props.children).into()
    }
}
