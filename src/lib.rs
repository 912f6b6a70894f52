// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deterministic execution traces of [Gherkin] scenarios.
//!
//! A [`Recorder`] turns every lifecycle [`Hook`] and every resolved [`Step`]
//! into exactly one line of a sequence literal, appended to an output sink in
//! call order:
//!
//! ```text
//! (Hook 'BeforeTestRun'),
//! (Hook 'BeforeFeature' -withContext @{ Name = 'f13'; Description = $Null; Tags = @() }),
//! (Hook 'BeforeScenario' -withContext @{ Name = 's13'; Description = $Null; Tags = @() }),
//! (Hook 'BeforeScenarioBlock' -withContext @{ BlockType = $StepTypeEnum.When }),
//! (Hook 'BeforeStep' -withContext @{ StepType = $StepTypeEnum.When }),
//! (Step -when 'I borrow Argument(42) dollars from' -tableArgument @{ Header = 'Friend Name', 'Borrow date'; Rows = ,@{ 'Friend Name' = 'Tom'; 'Borrow date' = '08/13/2016' } }),
//! (Hook 'AfterStep'),
//! (Hook 'AfterScenarioBlock'),
//! (Hook 'AfterScenario'),
//! (Hook 'AfterFeature'),
//! (Hook 'AfterTestRun'),
//! ```
//!
//! The [`Recorder`] is the whole core: it performs no step matching and no
//! ordering checks. A [`Driver`] supplies the lifecycle for parsed
//! [`gherkin::Feature`]s, resolving steps through [`Definitions`].
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

#![forbid(non_ascii_idents, unsafe_code)]
#![warn(missing_debug_implementations, missing_docs)]

pub mod cli;
pub mod context;
pub mod definitions;
pub mod driver;
pub mod error;
pub mod event;
pub mod feature;
pub mod format;
pub mod out;
pub mod parser;
pub mod recorder;
pub mod step;
pub mod table;

pub use gherkin;

#[doc(inline)]
pub use self::{
    context::{Context, Tags},
    definitions::{Binding, Definitions, Param},
    driver::Driver,
    error::{Error, Result},
    event::Hook,
    recorder::Recorder,
    step::{Argument, Step, StepType},
    table::Table,
};
