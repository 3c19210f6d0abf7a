// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color palettes and color values.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use peniko::Color;

use crate::error::ParseTokenError;
use crate::style::StyleValue;

/// A named color palette such as `blue` or a custom `brand` palette.
///
/// Palette names are design tokens: they start with an ASCII letter and
/// contain only ASCII letters, digits, `-`, and `_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorPalette(Cow<'static, str>);

impl ColorPalette {
    /// `gray`
    pub const GRAY: Self = Self(Cow::Borrowed("gray"));
    /// `red`
    pub const RED: Self = Self(Cow::Borrowed("red"));
    /// `orange`
    pub const ORANGE: Self = Self(Cow::Borrowed("orange"));
    /// `yellow`
    pub const YELLOW: Self = Self(Cow::Borrowed("yellow"));
    /// `green`
    pub const GREEN: Self = Self(Cow::Borrowed("green"));
    /// `teal`
    pub const TEAL: Self = Self(Cow::Borrowed("teal"));
    /// `blue`
    pub const BLUE: Self = Self(Cow::Borrowed("blue"));
    /// `cyan`
    pub const CYAN: Self = Self(Cow::Borrowed("cyan"));
    /// `purple`
    pub const PURPLE: Self = Self(Cow::Borrowed("purple"));
    /// `pink`
    pub const PINK: Self = Self(Cow::Borrowed("pink"));

    /// Creates a palette from a name, validating it.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, ParseTokenError> {
        let name = name.into();
        if is_token_name(&name) {
            Ok(Self(name))
        } else {
            Err(ParseTokenError::new("color palette", &name))
        }
    }

    /// Returns the palette name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token for one of this palette's keys, e.g. `purple.fg`.
    #[must_use]
    pub fn token(&self, key: &str) -> String {
        format!("{}.{key}", self.0)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::GRAY
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ColorPalette {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(String::from(s))
    }
}

impl From<ColorPalette> for StyleValue {
    fn from(palette: ColorPalette) -> Self {
        Self::Str(palette.0)
    }
}

fn is_token_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A color given either as a design token or as a concrete color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// A token such as `red.500` or `border.error`.
    Token(Cow<'static, str>),
    /// A concrete color.
    Color(Color),
}

impl From<&'static str> for ColorValue {
    fn from(token: &'static str) -> Self {
        Self::Token(Cow::Borrowed(token))
    }
}

impl From<String> for ColorValue {
    fn from(token: String) -> Self {
        Self::Token(Cow::Owned(token))
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<ColorValue> for StyleValue {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Token(token) => Self::Str(token),
            ColorValue::Color(color) => Self::Color(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_are_validated() {
        assert_eq!("purple".parse::<ColorPalette>(), Ok(ColorPalette::PURPLE));
        assert!(ColorPalette::new("brand-accent_2").is_ok());
        assert!(ColorPalette::new("").is_err());
        assert!(ColorPalette::new("2fast").is_err());
        assert!(ColorPalette::new("blue.500").is_err());
        assert!(ColorPalette::new("light blue").is_err());
    }

    #[test]
    fn palette_tokens() {
        assert_eq!(ColorPalette::PURPLE.token("subtle"), "purple.subtle");
        assert_eq!(ColorPalette::default(), ColorPalette::GRAY);
    }

    #[test]
    fn color_values_convert_to_style_values() {
        let token: StyleValue = ColorValue::from("red.500").into();
        assert_eq!(token.as_str(), Some("red.500"));

        let color = Color::from_rgb8(0x80, 0x5a, 0xd5);
        let concrete: StyleValue = ColorValue::from(color).into();
        assert_eq!(concrete, StyleValue::Color(color));
    }
}
