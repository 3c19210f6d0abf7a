// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error returned when a design token string is not recognized.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The kind of token that was expected, such as `"size"`.
    pub expected: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseTokenError {
    pub(crate) fn new(expected: &'static str, input: &str) -> Self {
        Self {
            expected,
            input: input.into(),
        }
    }
}

impl fmt::Debug for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParseTokenError {{ expected: {:?}, input: {:?} }}",
            self.expected, self.input
        )
    }
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} token {:?}", self.expected, self.input)
    }
}

impl core::error::Error for ParseTokenError {}
