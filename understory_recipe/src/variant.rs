// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recipe variant enumerations.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseTokenError;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $expected:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Returns the token spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseTokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ParseTokenError::new($expected, s)),
                }
            }
        }
    };
}

token_enum! {
    /// Visual variant of the input recipe, shared by every field-like widget.
    InputVariant, "input variant" {
        /// Bordered on all sides.
        Outline => "outline",
        /// Muted fill, no visible border.
        Subtle => "subtle",
        /// Bottom border only.
        Flushed => "flushed",
    }
}

token_enum! {
    /// Visual variant of the tag recipe.
    TagVariant, "tag variant" {
        /// Tinted background.
        Subtle => "subtle",
        /// Solid palette background.
        Solid => "solid",
        /// Inset outline.
        Outline => "outline",
        /// Tinted background with an outline.
        Surface => "surface",
    }
}

token_enum! {
    /// Spinner sizes, which use their own scale.
    SpinnerSize, "spinner size" {
        /// Follows the surrounding font size.
        Inherit => "inherit",
        /// `xs`
        Xs => "xs",
        /// `sm`
        Sm => "sm",
        /// `md`
        Md => "md",
        /// `lg`
        Lg => "lg",
        /// `xl`
        Xl => "xl",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_parse_their_own_spelling() {
        assert_eq!("flushed".parse::<InputVariant>(), Ok(InputVariant::Flushed));
        assert_eq!("surface".parse::<TagVariant>(), Ok(TagVariant::Surface));
        assert_eq!("inherit".parse::<SpinnerSize>(), Ok(SpinnerSize::Inherit));
        assert_eq!(TagVariant::Solid.as_str(), "solid");
    }

    #[test]
    fn unknown_variant_reports_kind() {
        let err = "filled".parse::<InputVariant>().unwrap_err();
        assert_eq!(err.expected, "input variant");
        assert_eq!(
            alloc::string::ToString::to_string(&err),
            "unrecognized input variant token \"filled\""
        );
    }
}
