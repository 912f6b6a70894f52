// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tabular step arguments.
//!
//! A [`Table`] is a header of unique column names plus ordered rows, where
//! every row holds exactly one (possibly absent) cell per column.

use itertools::Itertools as _;

use crate::error::{TableError, TableResult};

/// Tabular argument attached to a [`Step`].
///
/// # Example
///
/// ```rust
/// use cucumber_trace::Table;
///
/// let table = Table::from_rows(
///     ["Friend Name", "Age"],
///     [["Sam", "45"], ["Tom", "18"]],
/// )
/// .unwrap();
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.cell(1, "Friend Name"), Some("Tom"));
/// ```
///
/// [`Step`]: crate::Step
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Creates a new [`Table`] out of a `header` and `rows` with possibly
    /// absent cells.
    ///
    /// # Errors
    ///
    /// - [`TableError::DuplicateColumn`] if the `header` repeats a column.
    /// - [`TableError::RowWidth`] if any row has a cell count different from
    ///   the `header`'s column count.
    pub fn new<H, R>(header: H, rows: R) -> TableResult<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = Vec<Option<String>>>,
    {
        let header = header.into_iter().map(Into::into).collect::<Vec<_>>();
        if let Some(column) = header.iter().duplicates().next() {
            return Err(TableError::duplicate_column(column.as_str()));
        }

        let rows = rows.into_iter().collect::<Vec<_>>();
        if let Some((row, cells)) =
            rows.iter().enumerate().find(|(_, r)| r.len() != header.len())
        {
            return Err(TableError::row_width(row, header.len(), cells.len()));
        }

        Ok(Self { header, rows })
    }

    /// Creates a new [`Table`] where every cell is present.
    ///
    /// # Errors
    ///
    /// Same as [`Table::new()`].
    pub fn from_rows<H, R, C>(header: H, rows: R) -> TableResult<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::new(
            header,
            rows.into_iter()
                .map(|r| r.into_iter().map(|c| Some(c.into())).collect::<Vec<_>>()),
        )
    }

    /// Returns the column names in header order.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the number of rows (header excluded).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cell of the `row` under the `column`, if both exist and the
    /// cell isn't absent.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.header.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Iterates over the rows as `(column, cell)` pairs in header order.
    pub fn records(
        &self,
    ) -> impl Iterator<Item = impl Iterator<Item = (&str, Option<&str>)>> {
        self.rows.iter().map(|row| {
            self.header
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(Option::as_deref))
        })
    }
}

/// Uses the first row of a [`gherkin::Table`] as the header.
impl TryFrom<&gherkin::Table> for Table {
    type Error = TableError;

    fn try_from(table: &gherkin::Table) -> TableResult<Self> {
        let (header, rows) =
            table.rows.split_first().ok_or(TableError::Empty)?;
        Self::from_rows(header.iter().cloned(), rows.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friends() -> Table {
        Table::from_rows(
            ["Friend Name", "Age", "Gender"],
            [["Sam", "45", "Male"], ["Tom", "18", "Male"]],
        )
        .unwrap()
    }

    #[test]
    fn keeps_header_and_row_order() {
        let table = friends();

        assert_eq!(table.header(), ["Friend Name", "Age", "Gender"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, "Friend Name"), Some("Sam"));
        assert_eq!(table.cell(1, "Age"), Some("18"));
        assert_eq!(table.cell(2, "Age"), None);
        assert_eq!(table.cell(0, "Unknown"), None);
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = Table::from_rows(["Name", "Name"], [["a", "b"]]).unwrap_err();
        assert_eq!(err, TableError::duplicate_column("Name"));
    }

    #[test]
    fn rejects_short_rows() {
        let err = Table::new(
            ["Name", "Age"],
            [vec![Some("Sam".into()), Some("45".into())], vec![None]],
        )
        .unwrap_err();
        assert_eq!(err, TableError::row_width(1, 2, 1));
    }

    #[test]
    fn keeps_absent_cells() {
        let table =
            Table::new(["Name", "Age"], [vec![Some("Sam".into()), None]])
                .unwrap();

        assert_eq!(table.cell(0, "Age"), None);
        let record = table.records().next().unwrap().collect::<Vec<_>>();
        assert_eq!(record, [("Name", Some("Sam")), ("Age", None)]);
    }

    #[test]
    fn allows_header_only() {
        let table = Table::from_rows(["Name"], Vec::<[&str; 1]>::new()).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.records().count(), 0);
    }
}
