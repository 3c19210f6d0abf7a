// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slot style override callbacks.

use alloc::rc::Rc;
use core::fmt;

use understory_recipe::StyleObject;

use crate::slots::{
    ContainerProps, ControlProps, GroupHeadingProps, GroupProps, IndicatorProps,
    IndicatorSeparatorProps, IndicatorsContainerProps, InputProps, LoadingIndicatorProps,
    MenuListProps, MenuProps, MultiValueProps, NoticeProps, OptionProps, PlaceholderProps,
    SingleValueProps, ValueContainerProps,
};

/// Applies the override registered for `$target`, or keeps the default.
macro_rules! override_style {
    ($props:expr, $target:ident, $default:expr) => {
        match &$props.select.style_overrides.$target {
            Some(f) => f($default, $props),
            None => $default,
        }
    };
}
pub(crate) use override_style;

macro_rules! style_overrides {
    ($($(#[$doc:meta])* $target:ident: $props:ident;)+) => {
        /// Optional style callbacks, one per style target.
        ///
        /// Each callback receives the slot's default style and its full render
        /// props and returns the style to render. Callbacks must be pure and
        /// must not depend on the order slots render in.
        ///
        /// ```rust
        /// use overstory_select::StyleOverrides;
        ///
        /// let overrides = StyleOverrides::<String>::default()
        ///     .control(|style, _| style.with("borderRadius", "full"));
        /// assert!(overrides.control.is_some());
        /// assert!(overrides.menu.is_none());
        /// ```
        pub struct StyleOverrides<O> {
            $(
                $(#[$doc])*
                pub $target: Option<Rc<dyn Fn(StyleObject, &$props<'_, O>) -> StyleObject>>,
            )+
        }

        impl<O> Default for StyleOverrides<O> {
            fn default() -> Self {
                Self { $($target: None,)+ }
            }
        }

        impl<O> Clone for StyleOverrides<O> {
            fn clone(&self) -> Self {
                Self { $($target: self.$target.clone(),)+ }
            }
        }

        impl<O> fmt::Debug for StyleOverrides<O> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut set = f.debug_set();
                $(
                    if self.$target.is_some() {
                        set.entry(&stringify!($target));
                    }
                )+
                set.finish()
            }
        }

        impl<O> StyleOverrides<O> {
            $(
                #[doc = concat!("Sets the `", stringify!($target), "` callback.")]
                #[must_use]
                pub fn $target(
                    mut self,
                    f: impl Fn(StyleObject, &$props<'_, O>) -> StyleObject + 'static,
                ) -> Self {
                    self.$target = Some(Rc::new(f));
                    self
                }
            )+
        }
    };
}

style_overrides! {
    /// Outer container.
    container: ContainerProps;
    /// Area holding the value or tags.
    value_container: ValueContainerProps;
    /// Area holding the indicators.
    indicators_container: IndicatorsContainerProps;
    /// The field-like control.
    control: ControlProps;
    /// Divider between value area and indicators.
    indicator_separator: IndicatorSeparatorProps;
    /// Dropdown indicator box.
    dropdown_indicator: IndicatorProps;
    /// Chevron glyph inside the dropdown indicator.
    down_chevron: IndicatorProps;
    /// Clear indicator box.
    clear_indicator: IndicatorProps;
    /// Cross glyph inside the clear indicator.
    cross_icon: IndicatorProps;
    /// Loading spinner.
    loading_indicator: LoadingIndicatorProps;
    /// Auto-sizing wrapper around the text input.
    input_container: InputProps;
    /// The text input itself.
    input: InputProps;
    /// Placeholder text.
    placeholder: PlaceholderProps;
    /// Single selected value.
    single_value: SingleValueProps;
    /// Menu panel.
    menu: MenuProps;
    /// Scrollable list inside the menu.
    menu_list: MenuListProps;
    /// Notice shown while options load.
    loading_message: NoticeProps;
    /// Notice shown when no option matches.
    no_options_message: NoticeProps;
    /// Option group.
    group: GroupProps;
    /// Option group heading.
    group_heading: GroupHeadingProps;
    /// Option row.
    option: OptionProps;
    /// Tag container.
    multi_value: MultiValueProps;
    /// Tag label.
    multi_value_label: MultiValueProps;
    /// Tag remove control.
    multi_value_remove: MultiValueProps;
}
