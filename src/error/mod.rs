// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types, organized by domain.
//!
//! - [`table`] - malformed [`Table`] arguments
//! - [`format`] - trace line rendering
//! - [`step`] - step resolution against definitions
//! - [`trace`] - writing lines into a sink
//! - [`core`] - top-level [`Error`] combining all of the above
//!
//! [`Table`]: crate::Table

pub mod core;
pub mod format;
pub mod step;
pub mod table;
pub mod trace;

pub use self::{
    core::{Error, Result},
    format::{FormatError, FormatResult},
    step::{StepError, StepResult},
    table::{TableError, TableResult},
    trace::{TraceError, TraceResult},
};

#[cfg(test)]
mod integration_tests {
    use std::{error::Error as _, io};

    use super::*;

    #[test]
    fn converts_into_top_level_error() {
        let err: Error = TableError::Empty.into();
        assert!(matches!(err, Error::Table(_)));

        let err: Error = StepError::no_match("Given nothing").into();
        assert!(err.is_step_error());

        let err: Error = FormatError::delimiter("O'Brien", '\'').into();
        assert!(matches!(err, Error::Format(_)));

        let err: Error = TraceError::Poisoned.into();
        assert!(matches!(err, Error::Trace(_)));
    }

    #[test]
    fn keeps_source_chain() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = Error::Trace(TraceError::Io(io_err));

        let source = err.source().expect("has source");
        assert!(source.to_string().contains("I/O error"));
        let root = source.source().expect("has root source");
        assert!(root.to_string().contains("pipe closed"));
    }

    #[test]
    fn step_error_wraps_table_error() {
        let err = StepError::from(TableError::duplicate_column("Age"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Malformed table"));
    }
}
