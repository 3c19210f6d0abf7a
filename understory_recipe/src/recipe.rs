// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recipe source contract.
//!
//! A recipe source is the design system as seen by a widget: given a recipe
//! key and a few parameters it returns style fragments for the recipe's named
//! parts. How the source computes them (token tables, theme overrides,
//! generated CSS) is its own business.

use smallvec::SmallVec;

use crate::palette::{ColorPalette, ColorValue};
use crate::size::{Breakpoint, Size, SizeToken};
use crate::style::StyleObject;
use crate::variant::InputVariant;

/// Identifies a recipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecipeKey {
    /// Text input. Parts: [`Part::Field`], [`Part::Addon`].
    Input,
    /// Menu. Parts: [`Part::Content`], [`Part::Item`], [`Part::ItemGroup`].
    Menu,
    /// Tag. Parts: [`Part::Root`], [`Part::Label`], [`Part::CloseTrigger`].
    Tag,
    /// Close button. Parts: [`Part::Root`].
    CloseTrigger,
}

/// A named part of a slot recipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// Outermost element.
    Root,
    /// Editable field.
    Field,
    /// Adornment attached to a field.
    Addon,
    /// Floating panel.
    Content,
    /// Row inside a panel.
    Item,
    /// Group label inside a panel.
    ItemGroup,
    /// Text label.
    Label,
    /// Dismiss control.
    CloseTrigger,
}

/// Parameters for resolving a recipe.
///
/// Unset fields mean "use the recipe's default".
#[derive(Clone, Copy, Debug, Default)]
pub struct RecipeParams<'a> {
    /// Size bucket.
    pub size: Option<Size>,
    /// Variant name. Names the recipe does not define fall back to its default.
    pub variant: Option<&'a str>,
    /// Color palette.
    pub color_palette: Option<&'a ColorPalette>,
    /// Color of the focus ring.
    pub focus_color: Option<&'a ColorValue>,
    /// Color of the invalid-state border.
    pub error_color: Option<&'a ColorValue>,
}

impl<'a> RecipeParams<'a> {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size bucket.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the variant name.
    #[must_use]
    pub fn variant(mut self, variant: &'a str) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the color palette.
    #[must_use]
    pub fn color_palette(mut self, palette: &'a ColorPalette) -> Self {
        self.color_palette = Some(palette);
        self
    }

    /// Sets the focus ring color.
    #[must_use]
    pub fn focus_color(mut self, color: Option<&'a ColorValue>) -> Self {
        self.focus_color = color;
        self
    }

    /// Sets the invalid-state border color.
    #[must_use]
    pub fn error_color(mut self, color: Option<&'a ColorValue>) -> Self {
        self.error_color = color;
        self
    }
}

/// Style fragments for the parts of a resolved recipe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotStyles {
    parts: SmallVec<[(Part, StyleObject); 3]>,
}

impl SlotStyles {
    /// Creates an empty set of part styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style for a part and returns the updated set.
    #[must_use]
    pub fn with_part(mut self, part: Part, style: StyleObject) -> Self {
        match self.parts.iter_mut().find(|(p, _)| *p == part) {
            Some(entry) => entry.1 = style,
            None => self.parts.push((part, style)),
        }
        self
    }

    /// Returns the style for a part, if the recipe defines it.
    #[must_use]
    pub fn part(&self, part: Part) -> Option<&StyleObject> {
        self.parts.iter().find(|(p, _)| *p == part).map(|(_, s)| s)
    }

    /// Removes and returns the style for a part, or an empty style.
    pub fn take(&mut self, part: Part) -> StyleObject {
        match self.parts.iter().position(|(p, _)| *p == part) {
            Some(idx) => self.parts.remove(idx).1,
            None => StyleObject::new(),
        }
    }
}

/// A design system that resolves recipes for widgets.
///
/// Implementations are read-only from the widget's perspective and must be
/// pure: the same key and parameters give the same styles within a render.
pub trait RecipeSource {
    /// Resolves a slot recipe into per-part style fragments.
    fn slot_recipe(&self, key: RecipeKey, params: &RecipeParams<'_>) -> SlotStyles;

    /// The variant field-like widgets use when the caller does not pick one.
    fn default_input_variant(&self) -> InputVariant;

    /// The size a recipe uses when the caller does not pick one.
    fn default_size(&self, key: RecipeKey) -> SizeToken;

    /// The breakpoint responsive values resolve against.
    fn breakpoint(&self) -> Breakpoint {
        Breakpoint::Base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_styles_part_lookup_and_take() {
        let mut styles = SlotStyles::new()
            .with_part(Part::Field, StyleObject::new().with("px", "3"))
            .with_part(Part::Addon, StyleObject::new().with("bg", "bg.muted"))
            .with_part(Part::Field, StyleObject::new().with("px", "4"));

        assert_eq!(
            styles.part(Part::Field).and_then(|s| s.get_str("px")),
            Some("4")
        );
        assert!(styles.part(Part::Content).is_none());

        let addon = styles.take(Part::Addon);
        assert_eq!(addon.get_str("bg"), Some("bg.muted"));
        assert!(styles.part(Part::Addon).is_none());
        assert!(styles.take(Part::Label).is_empty());
    }
}
