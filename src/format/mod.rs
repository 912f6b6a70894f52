// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering of trace lines.
//!
//! Every line is a single element of a sequence literal: it starts with `(`
//! and ends with `),`, so a whole trace concatenates into a sequence body.
//! Rendering is pure and fails as a whole: either a complete line is returned,
//! or a [`FormatError`].
//!
//! - [`context`] - feature/scenario [`Context`] records
//! - [`table`] - [`Table`] records
//! - [`step`] - [`Step`] lines
//! - [`hook`] - lifecycle [`Hook`] lines
//!
//! [`Context`]: crate::Context
//! [`Hook`]: crate::event::Hook
//! [`Step`]: crate::Step
//! [`Table`]: crate::Table

pub mod context;
pub mod hook;
pub mod step;
pub mod table;

use crate::error::{FormatError, FormatResult};

pub use self::{
    context::{context, tags},
    hook::hook,
    step::step,
    table::table,
};

/// Sentinel rendered in place of an absent value.
pub const NULL: &str = "$Null";

/// Literal of an empty collection.
pub const EMPTY_COLLECTION: &str = "@()";

/// Terminator of every trace line.
pub const LINE_END: &str = "),";

/// Delimiter of quoted text.
const QUOTE: char = '\'';

/// Characters that can't appear in quoted text. Line breaks would split a
/// single event across several lines.
const TEXT_DELIMITERS: &[char] = &[QUOTE, '\n', '\r'];

/// Characters that can't appear in unquoted tags.
const TAG_DELIMITERS: &[char] = &[QUOTE, ',', ';', '{', '}', '(', ')'];

/// Checks that `text` can be placed between single quotes as is.
///
/// # Errors
///
/// If `text` contains any of [`TEXT_DELIMITERS`].
fn quotable(text: &str) -> FormatResult<&str> {
    match text.chars().find(|c| TEXT_DELIMITERS.contains(c)) {
        Some(d) => Err(FormatError::delimiter(text, d)),
        None => Ok(text),
    }
}

/// Wraps `text` into single quotes.
///
/// # Errors
///
/// If `text` contains a quote.
fn quoted(text: &str) -> FormatResult<String> {
    quotable(text).map(|t| format!("{QUOTE}{t}{QUOTE}"))
}

/// Checks that a `tag` can be rendered without quoting.
///
/// # Errors
///
/// If `tag` contains any of [`TAG_DELIMITERS`] or whitespace.
fn bare(tag: &str) -> FormatResult<&str> {
    match tag
        .chars()
        .find(|c| TAG_DELIMITERS.contains(c) || c.is_whitespace())
    {
        Some(d) => Err(FormatError::delimiter(tag, d)),
        None => Ok(tag),
    }
}
