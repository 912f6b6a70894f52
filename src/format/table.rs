// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Table`] records.

use itertools::Itertools as _;

use crate::{error::FormatResult, Table};

use super::{quotable, quoted, NULL};

/// Renders the `table` as a `Header`/`Rows` record.
///
/// Every row lists all the header columns in header order, with absent cells
/// rendered as [`NULL`]. Rows are joined with `, `.
///
/// A single row is prefixed with `,`, so the literal reads as a one-element
/// sequence rather than a scalar. Zero or several rows have no prefix.
///
/// # Errors
///
/// If any column name or cell value contains a quote.
pub fn table(table: &Table) -> FormatResult<String> {
    let header = table
        .header()
        .iter()
        .map(|c| quotable(c))
        .collect::<FormatResult<Vec<_>>>()?
        .join("', '");

    let rows = table
        .records()
        .map(|record| {
            record
                .map(|(column, cell)| -> FormatResult<String> {
                    Ok(format!(
                        "{} = {}",
                        quoted(column)?,
                        quoted(cell.unwrap_or(NULL))?,
                    ))
                })
                .collect::<FormatResult<Vec<_>>>()
                .map(|cells| format!("@{{ {} }}", cells.join("; ")))
        })
        .collect::<FormatResult<Vec<_>>>()?;

    let prefix = if rows.len() == 1 { "," } else { "" };

    Ok(format!(
        "@{{ Header = '{header}'; Rows = {prefix}{} }}",
        rows.into_iter().join(", "),
    ))
}
