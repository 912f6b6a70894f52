// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of recording trace lines into a sink.

use std::io;

use derive_more::with_trait::{Display, Error, From};

use super::FormatError;

/// Failure of a [`Recorder`] handler.
///
/// [`Recorder`]: crate::Recorder
#[derive(Debug, Display, Error, From)]
pub enum TraceError {
    /// Line couldn't be rendered, so nothing was written.
    #[display("Failed to render trace line: {_0}")]
    Format(FormatError),

    /// Sink refused the line.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// Another thread panicked while holding the sink.
    #[display("Trace sink is poisoned")]
    #[from(ignore)]
    Poisoned,
}

/// Result type alias for [`Recorder`] handlers.
///
/// [`Recorder`]: crate::Recorder
pub type TraceResult<T> = Result<T, TraceError>;

impl TraceError {
    /// Returns true if this is a [`TraceError::Format`].
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
