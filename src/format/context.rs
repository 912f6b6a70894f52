// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Feature and scenario [`Context`] records.

use itertools::Itertools as _;

use crate::{context::Tags, error::FormatResult, Context};

use super::{bare, quoted, EMPTY_COLLECTION, NULL};

/// Renders the `tags` as [`EMPTY_COLLECTION`] if there are none, or as the
/// bare tags joined with `,` in iteration order otherwise.
///
/// # Errors
///
/// If any tag contains a literal delimiter or whitespace.
pub fn tags(tags: &Tags) -> FormatResult<String> {
    if tags.is_empty() {
        return Ok(EMPTY_COLLECTION.to_owned());
    }
    tags.iter()
        .map(|t| bare(t))
        .collect::<FormatResult<Vec<_>>>()
        .map(|t| t.into_iter().join(","))
}

/// Renders the `ctx` as a `Name`/`Description`/`Tags` record.
///
/// Descriptions aren't tracked, so `Description` is always [`NULL`].
///
/// # Errors
///
/// If the title contains a quote, or any tag can't be rendered.
pub fn context(ctx: &Context) -> FormatResult<String> {
    Ok(format!(
        "@{{ Name = {}; Description = {NULL}; Tags = {} }}",
        quoted(&ctx.title)?,
        tags(&ctx.tags)?,
    ))
}
