// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Data-integrity errors of step [`Table`]s.
//!
//! [`Table`]: crate::Table

use derive_more::with_trait::{Display, Error};

/// Malformed [`Table`] argument.
///
/// A [`Table`] is never repaired or rendered partially, so any of these fails
/// the event it was attached to.
///
/// [`Table`]: crate::Table
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum TableError {
    /// Header names the same column more than once.
    #[display("Duplicate column `{column}` in table header")]
    DuplicateColumn {
        /// Name of the repeated column.
        #[error(not(source))]
        column: String,
    },

    /// Row doesn't have exactly one cell per header column.
    #[display(
        "Table row {row} has {actual} cells, but header has {expected} columns"
    )]
    RowWidth {
        /// Zero-based index of the offending row (header excluded).
        row: usize,

        /// Number of header columns.
        expected: usize,

        /// Number of cells in the row.
        actual: usize,
    },

    /// Gherkin table without even a header row.
    #[display("Table has no header row")]
    Empty,
}

/// Result type alias for [`Table`] construction.
///
/// [`Table`]: crate::Table
pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    /// Creates a new [`TableError::DuplicateColumn`].
    #[must_use]
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Creates a new [`TableError::RowWidth`].
    #[must_use]
    pub const fn row_width(row: usize, expected: usize, actual: usize) -> Self {
        Self::RowWidth {
            row,
            expected,
            actual,
        }
    }
}
