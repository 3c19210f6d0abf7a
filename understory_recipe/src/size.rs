// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size tokens, responsive values, and size normalization.
//!
//! Widgets built on recipes only style three size buckets ([`Size`]). Callers
//! may still hand in any [`SizeToken`] the design system knows, possibly as a
//! [`ResponsiveValue`] keyed by [`Breakpoint`]; [`resolve_size`] reduces that
//! input to a concrete bucket.

use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;

use crate::error::ParseTokenError;
use crate::recipe::{RecipeKey, RecipeSource};

/// A concrete size bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Size {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    /// Returns the token spelling of this size.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any size token the design system defines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeToken {
    /// `2xs`
    Xs2,
    /// `xs`
    Xs,
    /// `sm`
    Sm,
    /// `md`
    Md,
    /// `lg`
    Lg,
    /// `xl`
    Xl,
    /// `2xl`
    Xl2,
}

impl SizeToken {
    /// Returns the token spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs2 => "2xs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
        }
    }

    /// Maps this token to a bucket, or `None` if widgets do not style it.
    #[must_use]
    pub const fn bucket(self) -> Option<Size> {
        match self {
            Self::Sm => Some(Size::Sm),
            Self::Md => Some(Size::Md),
            Self::Lg => Some(Size::Lg),
            _ => None,
        }
    }
}

impl From<Size> for SizeToken {
    fn from(size: Size) -> Self {
        match size {
            Size::Sm => Self::Sm,
            Size::Md => Self::Md,
            Size::Lg => Self::Lg,
        }
    }
}

impl FromStr for SizeToken {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "2xs" => Self::Xs2,
            "xs" => Self::Xs,
            "sm" => Self::Sm,
            "md" => Self::Md,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            "2xl" => Self::Xl2,
            _ => return Err(ParseTokenError::new("size", s)),
        })
    }
}

/// A lookup table with one entry per [`Size`] bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeTable<T> {
    /// Value for [`Size::Sm`].
    pub sm: T,
    /// Value for [`Size::Md`].
    pub md: T,
    /// Value for [`Size::Lg`].
    pub lg: T,
}

impl<T> SizeTable<T> {
    /// Creates a table.
    #[must_use]
    pub const fn new(sm: T, md: T, lg: T) -> Self {
        Self { sm, md, lg }
    }

    /// Returns the entry for `size`.
    #[must_use]
    pub const fn get(&self, size: Size) -> &T {
        match size {
            Size::Sm => &self.sm,
            Size::Md => &self.md,
            Size::Lg => &self.lg,
        }
    }
}

/// Viewport breakpoints, smallest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Breakpoint {
    /// Everything below `sm`.
    #[default]
    Base,
    /// `sm` and up.
    Sm,
    /// `md` and up.
    Md,
    /// `lg` and up.
    Lg,
    /// `xl` and up.
    Xl,
    /// `2xl` and up.
    Xl2,
}

/// A value that may vary by breakpoint.
///
/// Breakpoint entries cascade upward: the entry for the largest breakpoint
/// not above the current one applies.
///
/// ```rust
/// use understory_recipe::{Breakpoint, ResponsiveValue, SizeToken};
///
/// let size = ResponsiveValue::breakpoints([
///     (Breakpoint::Base, SizeToken::Sm),
///     (Breakpoint::Lg, SizeToken::Lg),
/// ]);
/// assert_eq!(size.at(Breakpoint::Md), Some(&SizeToken::Sm));
/// assert_eq!(size.at(Breakpoint::Xl), Some(&SizeToken::Lg));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponsiveValue<T> {
    /// The same value at every breakpoint.
    Fixed(T),
    /// Values keyed by breakpoint, sorted ascending.
    Breakpoints(SmallVec<[(Breakpoint, T); 4]>),
}

impl<T> ResponsiveValue<T> {
    /// Builds a breakpoint-keyed value. Later duplicates replace earlier ones.
    #[must_use]
    pub fn breakpoints(entries: impl IntoIterator<Item = (Breakpoint, T)>) -> Self {
        let mut sorted: SmallVec<[(Breakpoint, T); 4]> = SmallVec::new();
        for (bp, value) in entries {
            match sorted.binary_search_by_key(&bp, |(b, _)| *b) {
                Ok(idx) => sorted[idx].1 = value,
                Err(idx) => sorted.insert(idx, (bp, value)),
            }
        }
        Self::Breakpoints(sorted)
    }

    /// Returns the value in effect at `breakpoint`.
    #[must_use]
    pub fn at(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            Self::Fixed(value) => Some(value),
            Self::Breakpoints(entries) => entries
                .iter()
                .rev()
                .find(|(bp, _)| *bp <= breakpoint)
                .map(|(_, value)| value),
        }
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}

impl From<Size> for ResponsiveValue<SizeToken> {
    fn from(size: Size) -> Self {
        Self::Fixed(size.into())
    }
}

/// Resolves a possibly absent, possibly responsive size input to a bucket.
///
/// Missing input falls back to the recipe source's default input size. A
/// breakpoint with no applicable entry, or a token outside the styled
/// buckets, resolves to [`Size::Md`].
#[must_use]
pub fn resolve_size(input: Option<&ResponsiveValue<SizeToken>>, recipes: &dyn RecipeSource) -> Size {
    let token = match input {
        Some(value) => value.at(recipes.breakpoint()).copied(),
        None => Some(recipes.default_size(RecipeKey::Input)),
    };
    let Some(token) = token else {
        return Size::Md;
    };
    token.bucket().unwrap_or_else(|| {
        tracing::trace!(token = token.as_str(), "size outside styled buckets, using md");
        Size::Md
    })
}
