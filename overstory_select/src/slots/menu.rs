// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu, its list, groups, options, and notices.

use alloc::format;
use alloc::vec::Vec;

use understory_recipe::{Part, SizeTable, StyleObject};

use super::icons::check_icon;
use super::slot_props;
use crate::data::OptionGroup;
use crate::element::{Attributes, Element, Node, Primitive};
use crate::overrides::override_style;
use crate::props::SelectedOptionStyle;
use crate::state::{ItemState, MenuPlacement};

const NOTICE_PADDING_Y: SizeTable<&str> = SizeTable::new("6px", "8px", "10px");
const HEADING_FONT_SIZES: SizeTable<&str> = SizeTable::new("xs", "sm", "md");
const HEADING_PADDINGS: SizeTable<&str> =
    SizeTable::new("0.4rem 0.8rem", "0.5rem 1rem", "0.6rem 1.2rem");
const OPTION_PADDING_X: SizeTable<&str> = SizeTable::new("0.6rem", "0.8rem", "1rem");
const OPTION_PADDING_Y: SizeTable<&str> = SizeTable::new("0.3rem", "0.4rem", "0.5rem");

slot_props! {
    /// Props for [`menu`].
    MenuProps<'a, O> {} {
        /// Side of the control the menu opens on.
        placement: Option<MenuPlacement> = None,
    }
}

slot_props! {
    /// Props for [`menu_list`].
    ///
    /// Reads [`ItemState::MULTI`].
    MenuListProps<'a, O> {} {
        /// Maximum list height in pixels before it scrolls.
        max_height: f64 = 300.0,
    }
}

slot_props! {
    /// Props for [`loading_message`] and [`no_options_message`].
    NoticeProps<'a, O> {} {}
}

slot_props! {
    /// Props for [`group`].
    GroupProps<'a, O> {
        /// The group being rendered.
        data: &'a OptionGroup<O>,
    } {
        /// Attributes passed on to the heading slot.
        heading_props: Attributes = Attributes::new(),
        /// Heading content.
        label: Vec<Node> = Vec::new(),
    }
}

slot_props! {
    /// Props for [`group_heading`].
    GroupHeadingProps<'a, O> {
        /// The group the heading belongs to.
        data: &'a OptionGroup<O>,
    } {}
}

slot_props! {
    /// Props for [`option`].
    ///
    /// Reads [`ItemState::FOCUSED`], [`ItemState::SELECTED`] and
    /// [`ItemState::DISABLED`].
    OptionProps<'a, O> {
        /// The option being rendered.
        data: &'a O,
    } {}
}

/// Positioned wrapper around the menu list.
///
/// The menu hangs off the edge of the control opposite its placement.
pub fn menu<O>(props: MenuProps<'_, O>) -> Node {
    let default = StyleObject::new()
        .with("position", "absolute")
        .with(MenuPlacement::anchored_edge(props.placement), "100%")
        .with("marginY", "8px")
        .with("width", "100%")
        .with("zIndex", 1);
    let css = override_style!(&props, menu, default);

    let content = Element::new(Primitive::Box)
        .class_names(props.select.cx(&[("menu", true)], props.class_name))
        .css(css)
        .attrs(props.inner_props)
        .children(props.children);
    Element::new(Primitive::MenuRoot).child(content).into()
}

/// Scrolling list of options, styled as the menu recipe's content.
pub fn menu_list<O>(props: MenuListProps<'_, O>) -> Node {
    let select = props.select;
    let multi = props.state.contains(ItemState::MULTI);

    let field = select.input_field(select.size());
    let content = select.menu_recipe().take(Part::Content);
    let radius = field
        .get("borderRadius")
        .or_else(|| content.get("borderRadius"))
        .cloned();
    let default = content
        .merged(
            StyleObject::new()
                .with("minW", "100%")
                .with("maxHeight", format!("{}px", props.max_height))
                .with("overflowY", "auto")
                .with("position", "relative")
                .with("WebkitOverflowScrolling", "touch"),
        )
        .with_opt("--input-border-radius", field.get("--input-border-radius").cloned())
        .with_opt("borderRadius", radius);
    let css = override_style!(&props, menu_list, default);

    Element::new(Primitive::Box)
        .class_names(select.cx(
            &[("menu-list", true), ("menu-list--is-multi", multi)],
            props.class_name,
        ))
        .css(css)
        .attrs(props.inner_props)
        .children(props.children)
        .into()
}

fn notice<O>(props: NoticeProps<'_, O>, kind: &str, css: StyleObject) -> Node {
    let modifier = format!("menu-notice--{kind}");
    Element::new(Primitive::Box)
        .class_names(props.select.cx(
            &[("menu-notice", true), (modifier.as_str(), true)],
            props.class_name,
        ))
        .css(css)
        .attrs(props.inner_props)
        .children(props.children)
        .into()
}

fn notice_style<O>(props: &NoticeProps<'_, O>) -> StyleObject {
    let size = props.select.size();
    StyleObject::new()
        .with("color", "fg.subtle")
        .with("textAlign", "center")
        .with("paddingY", *NOTICE_PADDING_Y.get(size))
        .with("fontSize", size.as_str())
}

/// Shown in the menu while options load.
pub fn loading_message<O>(props: NoticeProps<'_, O>) -> Node {
    let css = override_style!(&props, loading_message, notice_style(&props));
    notice(props, "loading", css)
}

/// Shown in the menu when nothing matches.
pub fn no_options_message<O>(props: NoticeProps<'_, O>) -> Node {
    let css = override_style!(&props, no_options_message, notice_style(&props));
    notice(props, "no-options", css)
}

/// A labelled block of options.
///
/// The heading is rendered through the configured `group_heading` slot, so
/// replacing that slot also changes headings inside groups.
pub fn group<O>(props: GroupProps<'_, O>) -> Node {
    let select = props.select;
    let css = override_style!(&props, group, StyleObject::new());

    let heading = (select.components.group_heading)(
        GroupHeadingProps::new(select, props.data)
            .inner_props(props.heading_props)
            .children(props.label),
    );

    Element::new(Primitive::Box)
        .class_names(select.cx(&[("group", true)], props.class_name))
        .css(css)
        .attrs(props.inner_props)
        .child(heading)
        .child(Element::new(Primitive::Box).children(props.children))
        .into()
}

/// Group heading, styled as the menu recipe's item group on the panel
/// background.
pub fn group_heading<O>(props: GroupHeadingProps<'_, O>) -> Node {
    let select = props.select;
    let size = select.size();

    let mut menu = select.menu_recipe();
    let content = menu.take(Part::Content);
    let default = menu
        .take(Part::ItemGroup)
        .merged(
            StyleObject::new()
                .with("fontSize", *HEADING_FONT_SIZES.get(size))
                .with("padding", *HEADING_PADDINGS.get(size))
                .with("margin", 0)
                .with("borderBottomWidth", 0)
                .with("position", "static")
                .with("top", -2)
                .with("zIndex", 1),
        )
        .with_opt("bg", content.get("bg").cloned());
    let css = override_style!(&props, group_heading, default);

    Element::new(Primitive::Box)
        .class_names(select.cx(&[("group-heading", true)], props.class_name))
        .css(css)
        .attrs(props.inner_props)
        .children(props.children)
        .into()
}

/// One selectable row in the menu.
///
/// In [`SelectedOptionStyle::Color`] mode selected rows are tinted with the
/// selected-option palette. In [`SelectedOptionStyle::Check`] mode a
/// checkmark gutter is reserved on every row unless selected options are
/// hidden from a multi-select menu, in which case no row could show a check.
pub fn option<O>(props: OptionProps<'_, O>) -> Node {
    let select = props.select;
    let size = select.size();
    let focused = props.state.contains(ItemState::FOCUSED);
    let selected = props.state.contains(ItemState::SELECTED);
    let disabled = props.state.contains(ItemState::DISABLED);
    let show_check = select.selected_option_style == SelectedOptionStyle::Check
        && (!select.is_multi || select.hide_selected_options == Some(false));

    let mut default = select
        .menu_recipe()
        .take(Part::Item)
        .merged(
            StyleObject::new()
                .with("cursor", "pointer")
                .with("display", "flex")
                .with("alignItems", "center")
                .with("width", "100%")
                .with("textAlign", "start")
                .with("fontSize", size.as_str())
                .with("paddingX", *OPTION_PADDING_X.get(size))
                .with("paddingY", *OPTION_PADDING_Y.get(size)),
        );
    if select.selected_option_style == SelectedOptionStyle::Color {
        let palette = &select.selected_option_color_palette;
        default.set(
            "_selected",
            StyleObject::new()
                .with("bg", palette.token("subtle"))
                .with("color", palette.token("fg"))
                .with(
                    "_active",
                    StyleObject::new().with("bg", palette.token("muted")),
                ),
        );
    }
    let css = override_style!(&props, option, default);

    let el = Element::new(Primitive::Box)
        .class_names(select.cx(
            &[
                ("option", true),
                ("option--is-disabled", disabled),
                ("option--is-focused", focused),
                ("option--is-selected", selected),
            ],
            props.class_name,
        ))
        .css(css)
        .attrs(props.inner_props)
        .flag("data-focus", focused)
        .flag("aria-disabled", disabled)
        .attr("aria-selected", selected);
    let el = if show_check {
        el.child(
            Element::new(Primitive::Icon)
                .css(
                    StyleObject::new()
                        .with("fontSize", "0.8em")
                        .with("marginEnd", "0.75rem")
                        .with("opacity", if selected { 1 } else { 0 }),
                )
                .child(check_icon()),
        )
    } else {
        el
    };
    el.children(props.children).into()
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use understory_recipe::{ColorPalette, SizeToken};

    use super::*;
    use crate::slots::test_util::{config, element};
    use crate::{AttrValue, ComponentOverrides, SelectProps, StyleOverrides};

    fn fruit() -> String {
        String::from("Apple")
    }

    #[test]
    fn menu_hangs_off_the_opposite_edge() {
        let select = config(SelectProps::new());
        let root = element(menu(MenuProps::new(&select)));
        assert_eq!(root.primitive, Primitive::MenuRoot);
        let content = root.find_class("rs__menu").expect("menu content");
        assert_eq!(content.css.get_str("top"), Some("100%"));

        let mut props = MenuProps::new(&select);
        props.placement = Some(MenuPlacement::Top);
        let root = element(menu(props));
        let content = root.find_class("rs__menu").expect("menu content");
        assert_eq!(content.css.get_str("bottom"), Some("100%"));
        assert!(!content.css.contains("top"));
    }

    #[test]
    fn menu_list_borrows_field_radius() {
        let select = config(SelectProps::new().multi(true));
        let mut props = MenuListProps::new(&select).state(ItemState::MULTI);
        props.max_height = 240.0;
        let el = element(menu_list(props));
        assert_eq!(el.css.get_str("maxHeight"), Some("240px"));
        assert_eq!(el.css.get_str("borderRadius"), Some("l2"));
        assert_eq!(el.css.get_str("bg"), Some("bg.panel"));
        assert!(el.class_names.contains("rs__menu-list--is-multi"));
    }

    #[test]
    fn notices_scale_with_size() {
        let select = config(SelectProps::new().size(SizeToken::Sm));
        let el = element(loading_message(NoticeProps::new(&select)));
        assert_eq!(el.css.get_str("paddingY"), Some("6px"));
        assert_eq!(el.css.get_str("fontSize"), Some("sm"));
        assert!(el.class_names.contains("rs__menu-notice--loading"));

        let el = element(no_options_message(
            NoticeProps::new(&select).child(Node::text("No options")),
        ));
        assert_eq!(el.css.get_str("color"), Some("fg.subtle"));
        assert!(el.class_names.contains("rs__menu-notice--no-options"));
        assert_eq!(el.text_content(), "No options");
    }

    #[test]
    fn notice_overrides_are_independent() {
        let select = config(SelectProps::new().style_overrides(
            StyleOverrides::default().loading_message(|style, _| style.with("color", "red.500")),
        ));
        let loading = element(loading_message(NoticeProps::new(&select)));
        let empty = element(no_options_message(NoticeProps::new(&select)));
        assert_eq!(loading.css.get_str("color"), Some("red.500"));
        assert_eq!(empty.css.get_str("color"), Some("fg.subtle"));
    }

    #[test]
    fn color_mode_tints_selected_options() {
        let select = config(
            SelectProps::new().selected_option_color_palette(ColorPalette::TEAL),
        );
        let apple = fruit();
        let el = element(option(
            OptionProps::new(&select, &apple)
                .state(ItemState::SELECTED)
                .child(Node::text("Apple")),
        ));
        let selected = el.css.get_nested("_selected").expect("selected style");
        assert_eq!(selected.get_str("bg"), Some("teal.subtle"));
        assert_eq!(selected.get_str("color"), Some("teal.fg"));
        assert_eq!(
            selected.get_nested("_active").and_then(|s| s.get_str("bg")),
            Some("teal.muted")
        );
        assert_eq!(el.attrs.get("aria-selected"), Some(&AttrValue::Bool(true)));
        assert!(el.find(&|e| e.primitive == Primitive::Icon).is_none());
        assert_eq!(el.text_content(), "Apple");
    }

    #[test]
    fn check_mode_reserves_gutter() {
        let select =
            config(SelectProps::new().selected_option_style(SelectedOptionStyle::Check));
        let apple = fruit();
        let el = element(option(OptionProps::new(&select, &apple)));
        assert!(!el.css.contains("_selected"));
        let gutter = el.children[0].as_element().expect("gutter");
        assert_eq!(gutter.primitive, Primitive::Icon);
        assert_eq!(gutter.css.get_number("opacity"), Some(0.0));
        assert_eq!(el.attrs.get("aria-selected"), Some(&AttrValue::Bool(false)));

        let el = element(option(OptionProps::new(&select, &apple).state(ItemState::SELECTED)));
        let gutter = el.children[0].as_element().expect("gutter");
        assert_eq!(gutter.css.get_number("opacity"), Some(1.0));
    }

    #[test]
    fn check_gutter_skipped_when_multi_hides_selected() {
        let select = config(
            SelectProps::new()
                .multi(true)
                .selected_option_style(SelectedOptionStyle::Check),
        );
        let apple = fruit();
        let el = element(option(OptionProps::new(&select, &apple)));
        assert!(el.find(&|e| e.primitive == Primitive::Svg).is_none());

        let mut props = SelectProps::new()
            .multi(true)
            .selected_option_style(SelectedOptionStyle::Check);
        props.hide_selected_options = Some(false);
        let select = config(props);
        let el = element(option(OptionProps::new(&select, &apple)));
        assert!(el.find(&|e| e.primitive == Primitive::Svg).is_some());
    }

    #[test]
    fn option_flags_follow_state() {
        let select = config(SelectProps::new());
        let apple = fruit();
        let el = element(option(
            OptionProps::new(&select, &apple).state(ItemState::FOCUSED | ItemState::DISABLED),
        ));
        assert_eq!(el.attrs.get("data-focus"), Some(&AttrValue::Bool(true)));
        assert_eq!(el.attrs.get("aria-disabled"), Some(&AttrValue::Bool(true)));
        assert!(el.class_names.contains("rs__option--is-focused"));
        assert!(el.class_names.contains("rs__option--is-disabled"));
        assert_eq!(el.css.get_str("paddingX"), Some("0.8rem"));
    }

    #[test]
    fn option_flags_win_over_inner_props() {
        let select = config(SelectProps::new());
        let apple = fruit();
        let el = element(option(
            OptionProps::new(&select, &apple)
                .state(ItemState::SELECTED)
                .inner_props(
                    Attributes::new()
                        .with("aria-selected", false)
                        .with("aria-disabled", true)
                        .with("id", "option-0"),
                ),
        ));
        assert_eq!(el.attrs.get("aria-selected"), Some(&AttrValue::Bool(true)));
        assert!(!el.attrs.contains("aria-disabled"));
        assert_eq!(el.attrs.get("id").and_then(AttrValue::as_str), Some("option-0"));
    }

    #[test]
    fn group_renders_heading_through_slot() {
        let data = OptionGroup::new("Fruits", vec![fruit()]);
        let select = config(SelectProps::new().components(
            ComponentOverrides::default().group_heading(|props| {
                Node::text(format!("[{}]", props.data.label.as_deref().unwrap_or("")))
            }),
        ));
        let el = element(group(
            GroupProps::new(&select, &data).child(Node::text("Apple")),
        ));
        assert_eq!(el.children[0], Node::text("[Fruits]"));
        assert_eq!(el.text_content(), "[Fruits]Apple");
    }

    #[test]
    fn heading_sits_on_panel_background() {
        let data = OptionGroup::new("Fruits", vec![fruit()]);
        let select = config(SelectProps::new().size(SizeToken::Lg));
        let el = element(group_heading(GroupHeadingProps::new(&select, &data)));
        assert_eq!(el.css.get_str("bg"), Some("bg.panel"));
        assert_eq!(el.css.get_str("fontSize"), Some("md"));
        assert_eq!(el.css.get_str("padding"), Some("0.6rem 1.2rem"));
        assert_eq!(el.css.get_number("top"), Some(-2.0));
    }
}
