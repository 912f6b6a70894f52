// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of rendering trace lines.

use derive_more::with_trait::{Display, Error};

/// Failure to render a single trace line.
///
/// Nothing is written when rendering fails.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum FormatError {
    /// Text contains a delimiter of the output literal syntax.
    #[display("{text:?} contains literal delimiter {delimiter:?}")]
    Delimiter {
        /// Offending text.
        #[error(not(source))]
        text: String,

        /// Delimiter found in the `text`.
        delimiter: char,
    },

    /// Number of `{}` placeholders differs from the number of arguments.
    #[display(
        "Pattern `{pattern}` has {placeholders} placeholders, \
         but {arguments} arguments were supplied"
    )]
    ArgumentCount {
        /// Pattern being rendered.
        #[error(not(source))]
        pattern: String,

        /// Number of `{}` placeholders in the `pattern`.
        placeholders: usize,

        /// Number of supplied arguments.
        arguments: usize,
    },
}

/// Result type alias for rendering operations.
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    /// Creates a new [`FormatError::Delimiter`].
    #[must_use]
    pub fn delimiter(text: impl Into<String>, delimiter: char) -> Self {
        Self::Delimiter {
            text: text.into(),
            delimiter,
        }
    }

    /// Creates a new [`FormatError::ArgumentCount`].
    #[must_use]
    pub fn argument_count(
        pattern: impl Into<String>,
        placeholders: usize,
        arguments: usize,
    ) -> Self {
        Self::ArgumentCount {
            pattern: pattern.into(),
            placeholders,
            arguments,
        }
    }

    /// Returns true if this is a [`FormatError::Delimiter`].
    #[must_use]
    pub const fn is_delimiter(&self) -> bool {
        matches!(self, Self::Delimiter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_display_stays_on_one_line() {
        let err = FormatError::delimiter("Sam\nTom", '\n');

        assert_eq!(
            err.to_string(),
            r#""Sam\nTom" contains literal delimiter '\n'"#,
        );
    }
}
