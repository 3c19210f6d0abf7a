// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slot renderer set and caller replacements for it.

use alloc::rc::Rc;
use core::fmt;

use crate::data::TagData;
use crate::element::Node;
use crate::slots::{
    self, ContainerProps, ControlProps, GroupHeadingProps, GroupProps, IndicatorProps,
    IndicatorSeparatorProps, IndicatorsContainerProps, InputProps, LoadingIndicatorProps,
    MenuListProps, MenuProps, MultiValueGenericProps, MultiValueProps, MultiValueRemoveProps,
    NoticeProps, OptionProps, PlaceholderProps, SingleValueProps, ValueContainerProps,
};

macro_rules! components {
    ($($(#[$doc:meta])* $slot:ident: $props:ident => $builtin:expr;)+) => {
        /// A complete set of slot renderers.
        pub struct Components<O> {
            $(
                $(#[$doc])*
                pub $slot: Rc<dyn Fn($props<'_, O>) -> Node>,
            )+
        }

        /// Caller replacements for individual slot renderers.
        ///
        /// Unset slots keep the built-in renderer.
        pub struct ComponentOverrides<O> {
            $(
                $(#[$doc])*
                pub $slot: Option<Rc<dyn Fn($props<'_, O>) -> Node>>,
            )+
        }

        impl<O: TagData + 'static> Components<O> {
            /// The built-in renderers.
            #[must_use]
            pub fn builtin() -> Self {
                Self { $($slot: Rc::new($builtin),)+ }
            }
        }

        impl<O> Components<O> {
            /// Replaces each slot the overrides set, keeping the rest.
            #[must_use]
            pub fn merged(mut self, overrides: ComponentOverrides<O>) -> Self {
                $(
                    if let Some(slot) = overrides.$slot {
                        self.$slot = slot;
                    }
                )+
                self
            }
        }

        impl<O> Clone for Components<O> {
            fn clone(&self) -> Self {
                Self { $($slot: self.$slot.clone(),)+ }
            }
        }

        impl<O> fmt::Debug for Components<O> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("Components { .. }")
            }
        }

        impl<O> Default for ComponentOverrides<O> {
            fn default() -> Self {
                Self { $($slot: None,)+ }
            }
        }

        impl<O> Clone for ComponentOverrides<O> {
            fn clone(&self) -> Self {
                Self { $($slot: self.$slot.clone(),)+ }
            }
        }

        impl<O> fmt::Debug for ComponentOverrides<O> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut set = f.debug_set();
                $(
                    if self.$slot.is_some() {
                        set.entry(&stringify!($slot));
                    }
                )+
                set.finish()
            }
        }

        impl<O> ComponentOverrides<O> {
            $(
                #[doc = concat!("Replaces the `", stringify!($slot), "` renderer.")]
                #[must_use]
                pub fn $slot(mut self, f: impl Fn($props<'_, O>) -> Node + 'static) -> Self {
                    self.$slot = Some(Rc::new(f));
                    self
                }
            )+
        }
    };
}

components! {
    /// Outer container.
    select_container: ContainerProps => slots::select_container::<O>;
    /// Value area.
    value_container: ValueContainerProps => slots::value_container::<O>;
    /// Indicator area.
    indicators_container: IndicatorsContainerProps => slots::indicators_container::<O>;
    /// Field-like control.
    control: ControlProps => slots::control::<O>;
    /// Indicator divider.
    indicator_separator: IndicatorSeparatorProps => slots::indicator_separator::<O>;
    /// Dropdown indicator.
    dropdown_indicator: IndicatorProps => slots::dropdown_indicator::<O>;
    /// Clear indicator.
    clear_indicator: IndicatorProps => slots::clear_indicator::<O>;
    /// Loading spinner.
    loading_indicator: LoadingIndicatorProps => slots::loading_indicator::<O>;
    /// Text input.
    input: InputProps => slots::input::<O>;
    /// Placeholder.
    placeholder: PlaceholderProps => slots::placeholder::<O>;
    /// Single value.
    single_value: SingleValueProps => slots::single_value::<O>;
    /// Menu panel.
    menu: MenuProps => slots::menu::<O>;
    /// Menu list.
    menu_list: MenuListProps => slots::menu_list::<O>;
    /// Loading notice.
    loading_message: NoticeProps => slots::loading_message::<O>;
    /// Empty-result notice.
    no_options_message: NoticeProps => slots::no_options_message::<O>;
    /// Option group.
    group: GroupProps => slots::group::<O>;
    /// Option group heading.
    group_heading: GroupHeadingProps => slots::group_heading::<O>;
    /// Option row.
    option: OptionProps => slots::option::<O>;
    /// Tag.
    multi_value: MultiValueProps => slots::multi_value::<O>;
    /// Tag container element.
    multi_value_container: MultiValueGenericProps => slots::multi_value_container::<O>;
    /// Tag label element.
    multi_value_label: MultiValueGenericProps => slots::multi_value_label::<O>;
    /// Tag remove control.
    multi_value_remove: MultiValueRemoveProps => slots::multi_value_remove::<O>;
}
