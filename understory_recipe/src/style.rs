// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style objects.
//!
//! This module provides [`StyleObject`], a plain bag of style properties, and
//! [`StyleValue`], the values it holds.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// A single style property value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A keyword, length, or design token such as `"flex"`, `"2px"`, or `"blue.fg"`.
    Str(Cow<'static, str>),
    /// A bare number. Spacing properties interpret it as a spacing token.
    Number(f64),
    /// A concrete color.
    Color(Color),
    /// A nested block for a condition or pseudo element such as `_after` or `_selected`.
    Nested(StyleObject),
}

impl StyleValue {
    /// Returns the string form, if this is a [`StyleValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number, if this is a [`StyleValue::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested block, if this is a [`StyleValue::Nested`].
    #[must_use]
    pub fn as_nested(&self) -> Option<&StyleObject> {
        match self {
            Self::Nested(style) => Some(style),
            _ => None,
        }
    }
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for StyleValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        Self::Nested(value)
    }
}

/// A bag of style properties for one rendered element.
///
/// Keys are property names as the styling engine spells them (`"paddingX"`,
/// `"minH"`, `"--input-border-radius"`, `"_after"`). Setting a key that is
/// already present replaces its value, so building a style as
/// `base.merged(literals)` gives the later layer precedence, the same way an
/// object spread does.
///
/// Entries are kept sorted by key for binary search lookup.
///
/// # Example
///
/// ```rust
/// use understory_recipe::StyleObject;
///
/// let recipe = StyleObject::new().with("height", "10").with("px", "3");
/// let style = recipe
///     .without("height")
///     .merged(StyleObject::new().with("height", "auto").with("minH", "10"));
///
/// assert_eq!(style.get_str("height"), Some("auto"));
/// assert_eq!(style.get_str("px"), Some("3"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleObject {
    entries: Vec<(Cow<'static, str>, StyleValue)>,
}

impl StyleObject {
    /// Creates an empty style object.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if no property is set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of properties set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, key: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(k, _)| k.as_ref().cmp(key))
    }

    /// Gets the value of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.position(key).ok().map(|idx| &self.entries[idx].1)
    }

    /// Gets the value of a property as a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Gets the value of a property as a number.
    #[must_use]
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_number)
    }

    /// Gets a nested block.
    #[must_use]
    pub fn get_nested(&self, key: &str) -> Option<&Self> {
        self.get(key).and_then(StyleValue::as_nested)
    }

    /// Returns `true` if the property is set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_ok()
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (key, value)),
        }
    }

    /// Sets a property and returns the updated object.
    #[must_use]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a property only when `value` is `Some`.
    #[must_use]
    pub fn with_opt<V: Into<StyleValue>>(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: Option<V>,
    ) -> Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Removes a property, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.position(key).ok().map(|idx| self.entries.remove(idx).1)
    }

    /// Removes a property and returns the updated object.
    #[must_use]
    pub fn without(mut self, key: &str) -> Self {
        self.remove(key);
        self
    }

    /// Applies every property of `other` on top of this object.
    pub fn extend(&mut self, other: Self) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    /// Returns this object with `other` applied on top.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    /// Iterates over properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for StyleObject
where
    K: Into<Cow<'static, str>>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (key, value) in iter {
            style.set(key, value);
        }
        style
    }
}
