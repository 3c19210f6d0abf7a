// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option data and the optional per-tag capabilities it may carry.

use alloc::string::String;
use alloc::vec::Vec;

use understory_recipe::{ColorPalette, TagVariant};

/// Result of probing option data for an optional capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capability<T> {
    /// The data carries a usable value.
    Valid(T),
    /// The data carries the field, but not in a usable form.
    Invalid,
    /// The data does not carry the field.
    Absent,
}

impl<T> Capability<T> {
    /// Returns the usable value. Invalid and absent fields are treated alike.
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid | Self::Absent => None,
        }
    }
}

/// Per-option tag settings used when a selected option is shown as a tag.
///
/// Every capability defaults to [`Capability::Absent`], so plain data types
/// implement this trait with an empty `impl`.
pub trait TagData {
    /// Palette for this option's tag.
    fn color_palette(&self) -> Capability<ColorPalette> {
        Capability::Absent
    }

    /// Variant for this option's tag.
    fn variant(&self) -> Capability<TagVariant> {
        Capability::Absent
    }

    /// Whether this option is fixed, i.e. cannot be removed.
    fn is_fixed(&self) -> Capability<bool> {
        Capability::Absent
    }
}

impl TagData for str {}
impl TagData for String {}
impl TagData for () {}

impl<T: TagData + ?Sized> TagData for &T {
    fn color_palette(&self) -> Capability<ColorPalette> {
        (**self).color_palette()
    }

    fn variant(&self) -> Capability<TagVariant> {
        (**self).variant()
    }

    fn is_fixed(&self) -> Capability<bool> {
        (**self).is_fixed()
    }
}

/// A ready-made option record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectOption {
    /// Text shown for the option.
    pub label: String,
    /// Submitted value.
    pub value: String,
    /// Palette for the option's tag.
    pub color_palette: Option<ColorPalette>,
    /// Variant for the option's tag.
    pub variant: Option<TagVariant>,
    /// Whether the option's tag cannot be removed.
    pub is_fixed: Option<bool>,
}

impl SelectOption {
    /// Creates an option with a label and value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Sets the tag palette.
    #[must_use]
    pub fn with_color_palette(mut self, palette: ColorPalette) -> Self {
        self.color_palette = Some(palette);
        self
    }

    /// Sets the tag variant.
    #[must_use]
    pub fn with_variant(mut self, variant: TagVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Marks the option as fixed or not.
    #[must_use]
    pub fn fixed(mut self, is_fixed: bool) -> Self {
        self.is_fixed = Some(is_fixed);
        self
    }
}

fn from_option<T: Clone>(value: Option<&T>) -> Capability<T> {
    value.map_or(Capability::Absent, |v| Capability::Valid(v.clone()))
}

impl TagData for SelectOption {
    fn color_palette(&self) -> Capability<ColorPalette> {
        from_option(self.color_palette.as_ref())
    }

    fn variant(&self) -> Capability<TagVariant> {
        from_option(self.variant.as_ref())
    }

    fn is_fixed(&self) -> Capability<bool> {
        from_option(self.is_fixed.as_ref())
    }
}

/// A labelled group of options.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionGroup<O> {
    /// Group heading text.
    pub label: Option<String>,
    /// Options in the group.
    pub options: Vec<O>,
}

impl<O> OptionGroup<O> {
    /// Creates a group.
    pub fn new(label: impl Into<String>, options: Vec<O>) -> Self {
        Self {
            label: Some(label.into()),
            options,
        }
    }
}

/// Option data given as loosely shaped JSON objects.
///
/// Reads `colorPalette` and `variant` strings and an `isFixed` boolean.
/// Fields of the wrong JSON type, and strings that are not valid tokens, are
/// [`Capability::Invalid`].
#[cfg(feature = "serde_json")]
impl TagData for serde_json::Value {
    fn color_palette(&self) -> Capability<ColorPalette> {
        match self.get("colorPalette") {
            None => Capability::Absent,
            Some(serde_json::Value::String(name)) => {
                ColorPalette::new(name.clone()).map_or(Capability::Invalid, Capability::Valid)
            }
            Some(_) => Capability::Invalid,
        }
    }

    fn variant(&self) -> Capability<TagVariant> {
        match self.get("variant") {
            None => Capability::Absent,
            Some(serde_json::Value::String(name)) => {
                name.parse().map_or(Capability::Invalid, Capability::Valid)
            }
            Some(_) => Capability::Invalid,
        }
    }

    fn is_fixed(&self) -> Capability<bool> {
        match self.get("isFixed") {
            None => Capability::Absent,
            Some(serde_json::Value::Bool(fixed)) => Capability::Valid(*fixed),
            Some(_) => Capability::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_data_has_no_capabilities() {
        assert_eq!("apple".color_palette(), Capability::Absent);
        assert_eq!(String::from("apple").is_fixed(), Capability::Absent);
        assert_eq!(().variant(), Capability::Absent);
    }

    #[test]
    fn select_option_reports_set_fields() {
        let option = SelectOption::new("Purple", "purple")
            .with_color_palette(ColorPalette::PURPLE)
            .fixed(true);
        assert_eq!(option.color_palette(), Capability::Valid(ColorPalette::PURPLE));
        assert_eq!(option.is_fixed().valid(), Some(true));
        assert_eq!(option.variant(), Capability::Absent);
        assert_eq!((&option).is_fixed().valid(), Some(true));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_fields_of_the_wrong_shape_are_invalid() {
        let data = serde_json::json!({
            "label": "Blue",
            "colorPalette": 7,
            "variant": "solid",
            "isFixed": "yes",
        });
        assert_eq!(data.color_palette(), Capability::Invalid);
        assert_eq!(data.variant(), Capability::Valid(TagVariant::Solid));
        assert_eq!(data.is_fixed(), Capability::Invalid);

        let bad_token = serde_json::json!({ "colorPalette": "not a palette" });
        assert_eq!(bad_token.color_palette(), Capability::Invalid);
        assert_eq!(serde_json::json!("plain").is_fixed(), Capability::Absent);
    }
}
