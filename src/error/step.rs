// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of resolving a [`gherkin::Step`] against step definitions.

use derive_more::with_trait::{Display, Error, From};

use super::TableError;

/// Failure to resolve a [`gherkin::Step`] into a [`Step`].
///
/// [`Step`]: crate::Step
#[derive(Clone, Debug, Display, Error, From, Eq, PartialEq)]
pub enum StepError {
    /// No definition matches the step text.
    #[display("No matching step definition for `{step}`")]
    #[from(ignore)]
    NoMatch {
        /// Text of the unmatched step.
        #[error(not(source))]
        step: String,
    },

    /// More than one definition matches the step text.
    #[display("Step `{step}` matches {count} step definitions")]
    #[from(ignore)]
    Ambiguous {
        /// Text of the ambiguous step.
        #[error(not(source))]
        step: String,

        /// Number of matching definitions.
        count: usize,
    },

    /// Definition declares a different number of parameters than its regex
    /// captures.
    #[display(
        "Step `{step}` captured {captured} arguments, \
         but its definition declares {declared}"
    )]
    #[from(ignore)]
    Arity {
        /// Text of the step.
        #[error(not(source))]
        step: String,

        /// Number of capture groups.
        captured: usize,

        /// Number of declared parameters.
        declared: usize,
    },

    /// Capture groups of the matched definition are nested, so their spans
    /// can't be replaced independently.
    #[display("Step `{step}` matched nested capture groups")]
    #[from(ignore)]
    OverlappingCaptures {
        /// Text of the step.
        #[error(not(source))]
        step: String,
    },

    /// Captured value doesn't convert into the declared parameter kind.
    #[display("Argument `{value}` of step `{step}` is not an integer")]
    #[from(ignore)]
    InvalidArgument {
        /// Text of the step.
        #[error(not(source))]
        step: String,

        /// Captured value.
        #[error(not(source))]
        value: String,
    },

    /// Table presence differs from what the definition expects.
    #[display(
        "Step `{step}` {}",
        if *expected { "requires a table argument" } else { "takes no table" }
    )]
    #[from(ignore)]
    TableMismatch {
        /// Text of the step.
        #[error(not(source))]
        step: String,

        /// Whether the definition expects a table.
        expected: bool,
    },

    /// Step's table is malformed.
    #[display("Malformed table: {_0}")]
    Table(TableError),
}

/// Result type alias for step resolution.
pub type StepResult<T> = Result<T, StepError>;

impl StepError {
    /// Creates a new [`StepError::NoMatch`].
    #[must_use]
    pub fn no_match(step: impl Into<String>) -> Self {
        Self::NoMatch { step: step.into() }
    }

    /// Creates a new [`StepError::Ambiguous`].
    #[must_use]
    pub fn ambiguous(step: impl Into<String>, count: usize) -> Self {
        Self::Ambiguous {
            step: step.into(),
            count,
        }
    }

    /// Returns true if no definition matched.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_mismatch_display() {
        let err = StepError::TableMismatch {
            step: "I have these friends".into(),
            expected: true,
        };
        assert_eq!(
            err.to_string(),
            "Step `I have these friends` requires a table argument",
        );
    }

    #[test]
    fn converts_table_error() {
        let err: StepError = TableError::Empty.into();
        assert!(matches!(err, StepError::Table(TableError::Empty)));
    }
}
