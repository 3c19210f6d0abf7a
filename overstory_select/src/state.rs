// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render interaction state supplied by the select behavior library.

use bitflags::bitflags;

bitflags! {
    /// Interaction flags for a rendered slot.
    ///
    /// Each slot reads only the flags it styles. Flags are recomputed by the
    /// behavior library on every render.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemState: u16 {
        /// Keyboard or pointer focus is on this element.
        const FOCUSED = 1 << 0;
        /// The option is part of the current value.
        const SELECTED = 1 << 1;
        /// The element cannot be interacted with.
        const DISABLED = 1 << 2;
        /// The select currently has a value.
        const HAS_VALUE = 1 << 3;
        /// The select accepts several values.
        const MULTI = 1 << 4;
        /// Right-to-left layout.
        const RTL = 1 << 5;
        /// The menu is open.
        const MENU_OPEN = 1 << 6;
        /// The element is visually hidden but still mounted.
        const HIDDEN = 1 << 7;
    }
}

/// Which side of the control the menu opened on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuPlacement {
    /// Above the control.
    Top,
    /// Below the control.
    Bottom,
}

impl MenuPlacement {
    /// The menu edge that touches the control.
    #[must_use]
    pub const fn anchored_edge(placement: Option<Self>) -> &'static str {
        match placement {
            Some(Self::Top) => "bottom",
            Some(Self::Bottom) | None => "top",
        }
    }
}
