// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Top-level [`Error`] type.

use std::io;

use derive_more::{Display, Error, From};

use crate::feature::ExpandExamplesError;

use super::{FormatError, StepError, TableError, TraceError};

/// Any error produced while driving features into a trace.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Malformed table.
    #[display("Table error: {_0}")]
    Table(TableError),

    /// Line rendering failed.
    #[display("Format error: {_0}")]
    Format(FormatError),

    /// Step couldn't be resolved against the definitions.
    #[display("Step error: {_0}")]
    Step(StepError),

    /// Recorder failed to write a line.
    #[display("Trace error: {_0}")]
    Trace(TraceError),

    /// Scenario Outline couldn't be expanded.
    #[display("Examples error: {_0}")]
    Expand(ExpandExamplesError),

    /// `.feature` file couldn't be read or parsed.
    #[display("Parse error: {_0}")]
    Parse(gherkin::ParseFileError),

    /// Input couldn't be walked or output couldn't be opened.
    #[display("I/O error: {_0}")]
    Io(io::Error),
}

/// Result type alias with the top-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if the error came from resolving or rendering a step.
    #[must_use]
    pub const fn is_step_error(&self) -> bool {
        matches!(self, Self::Step(_))
    }
}
