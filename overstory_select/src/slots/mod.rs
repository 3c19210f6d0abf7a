// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in slot renderers and their render props.
//!
//! Every renderer follows the same steps: resolve the size bucket, compute a
//! default style (often starting from a borrowed recipe part), pass it through
//! the matching style override, and build the element with semantic classes
//! and the behavior library's attributes.

mod containers;
mod control;
mod icons;
mod input;
mod menu;
mod multi_value;
mod placeholder;
mod single_value;

pub use containers::{
    ContainerProps, IndicatorsContainerProps, ValueContainerProps, indicators_container,
    select_container, value_container,
};
pub use control::{
    ControlProps, IndicatorProps, IndicatorSeparatorProps, LoadingIndicatorProps, clear_indicator,
    control, dropdown_indicator, indicator_separator, loading_indicator,
};
pub use icons::{check_icon, cross_icon, down_chevron, tag_close_icon};
pub use input::{InputProps, input};
pub use menu::{
    GroupHeadingProps, GroupProps, MenuListProps, MenuProps, NoticeProps, OptionProps, group,
    group_heading, loading_message, menu, menu_list, no_options_message, option,
};
pub use multi_value::{
    MultiValueGenericProps, MultiValueProps, MultiValueRemoveProps, multi_value,
    multi_value_container, multi_value_label, multi_value_remove,
};
pub use placeholder::{PlaceholderProps, placeholder};
pub use single_value::{SingleValueProps, single_value};

/// Declares a render props struct with the fields every slot shares.
macro_rules! slot_props {
    (
        $(#[$meta:meta])*
        $name:ident<$lt:lifetime, $o:ident> {
            $($(#[$rmeta:meta])* $req:ident: $req_ty:ty),* $(,)?
        } {
            $($(#[$fmeta:meta])* $field:ident: $ty:ty = $default:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name<$lt, $o> {
            /// Reconciled select configuration.
            pub select: &$lt $crate::SelectConfig<$o>,
            /// Caller class name, listed before the semantic classes.
            pub class_name: Option<&$lt str>,
            /// Attributes and handlers from the behavior library.
            pub inner_props: $crate::Attributes,
            /// Interaction state.
            pub state: $crate::ItemState,
            /// Child nodes.
            pub children: alloc::vec::Vec<$crate::Node>,
            $($(#[$rmeta])* pub $req: $req_ty,)*
            $($(#[$fmeta])* pub $field: $ty,)*
        }

        impl<$lt, $o> $name<$lt, $o> {
            /// Creates props with no state, attributes, or children.
            #[must_use]
            pub fn new(select: &$lt $crate::SelectConfig<$o>, $($req: $req_ty),*) -> Self {
                Self {
                    select,
                    class_name: None,
                    inner_props: $crate::Attributes::new(),
                    state: $crate::ItemState::empty(),
                    children: alloc::vec::Vec::new(),
                    $($req,)*
                    $($field: $default,)*
                }
            }

            /// Sets the caller class name.
            #[must_use]
            pub fn class_name(mut self, class_name: &$lt str) -> Self {
                self.class_name = Some(class_name);
                self
            }

            /// Sets the behavior library attributes.
            #[must_use]
            pub fn inner_props(mut self, inner_props: $crate::Attributes) -> Self {
                self.inner_props = inner_props;
                self
            }

            /// Sets the interaction state.
            #[must_use]
            pub fn state(mut self, state: $crate::ItemState) -> Self {
                self.state = state;
                self
            }

            /// Appends a child node.
            #[must_use]
            pub fn child(mut self, child: impl Into<$crate::Node>) -> Self {
                self.children.push(child.into());
                self
            }

            /// Appends child nodes.
            #[must_use]
            pub fn children(mut self, children: impl IntoIterator<Item = $crate::Node>) -> Self {
                self.children.extend(children);
                self
            }
        }

        impl<$o> core::fmt::Debug for $name<'_, $o> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("class_name", &self.class_name)
                    .field("state", &self.state)
                    .field("inner_props", &self.inner_props)
                    .field("children", &self.children)
                    .finish_non_exhaustive()
            }
        }
    };
}
pub(crate) use slot_props;
