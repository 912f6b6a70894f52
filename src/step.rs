// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolved steps, as dispatched to a [`Recorder`].
//!
//! [`Recorder`]: crate::Recorder

use derive_more::with_trait::{Display, From};
pub use gherkin::StepType;

use crate::Table;

/// Placeholder marking where an [`Argument`] goes in a [`Step`] pattern.
pub const PLACEHOLDER: &str = "{}";

/// Concrete value the driver supplied for a pattern placeholder.
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
pub enum Argument {
    /// Textual argument.
    #[display("{_0}")]
    Text(String),

    /// Integer argument.
    #[display("{_0}")]
    Integer(i64),
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i32> for Argument {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

/// Single Given/When/Then step with its placeholders already resolved to
/// [`Argument`]s.
///
/// Immutable once built.
///
/// # Example
///
/// ```rust
/// use cucumber_trace::{Step, StepType};
///
/// let step = Step::new(StepType::When, "{} plus {} gives {}")
///     .with_argument(2)
///     .with_argument(3)
///     .with_argument(5);
///
/// assert_eq!(step.arguments().len(), 3);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    ty: StepType,
    pattern: String,
    arguments: Vec<Argument>,
    table: Option<Table>,
}

impl Step {
    /// Creates a new [`Step`] without arguments or table.
    #[must_use]
    pub fn new(ty: StepType, pattern: impl Into<String>) -> Self {
        Self {
            ty,
            pattern: pattern.into(),
            arguments: Vec::new(),
            table: None,
        }
    }

    /// Appends an [`Argument`] for the next unfilled placeholder.
    #[must_use]
    pub fn with_argument(mut self, arg: impl Into<Argument>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    /// Replaces all the [`Argument`]s.
    #[must_use]
    pub fn with_arguments<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        self.arguments = args.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches a [`Table`] argument.
    #[must_use]
    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Returns the verb of this [`Step`].
    #[must_use]
    pub const fn ty(&self) -> StepType {
        self.ty
    }

    /// Returns the pattern text with [`PLACEHOLDER`]s.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the [`Argument`]s in placeholder order.
    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Returns the attached [`Table`], if any.
    #[must_use]
    pub const fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }
}
