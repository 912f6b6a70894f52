// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lifecycle events of a traced run.
//!
//! A driver emits them in the following order:
//!
//! ```text
//! RunStarted
//!   (FeatureStarted
//!     (ScenarioStarted
//!       (BlockStarted StepStarted <step> StepFinished BlockFinished)*
//!     ScenarioFinished)*
//!   FeatureFinished)*
//! RunFinished
//! ```
//!
//! The [`Recorder`] doesn't check this order.
//!
//! [`Recorder`]: crate::Recorder

use derive_more::with_trait::Display;

use crate::{Context, StepType};

/// Lifecycle hook invocation, carrying its context explicitly.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Hook<'ctx> {
    /// Whole run started.
    #[display("BeforeTestRun")]
    RunStarted,

    /// Whole run finished.
    #[display("AfterTestRun")]
    RunFinished,

    /// [`Feature`] started.
    ///
    /// [`Feature`]: gherkin::Feature
    #[display("BeforeFeature")]
    FeatureStarted(&'ctx Context),

    /// [`Feature`] finished.
    ///
    /// [`Feature`]: gherkin::Feature
    #[display("AfterFeature")]
    FeatureFinished,

    /// [`Scenario`] started.
    ///
    /// [`Scenario`]: gherkin::Scenario
    #[display("BeforeScenario")]
    ScenarioStarted(&'ctx Context),

    /// [`Scenario`] finished.
    ///
    /// [`Scenario`]: gherkin::Scenario
    #[display("AfterScenario")]
    ScenarioFinished,

    /// Block of steps of the given kind started.
    #[display("BeforeScenarioBlock")]
    BlockStarted(StepType),

    /// Block of steps finished.
    #[display("AfterScenarioBlock")]
    BlockFinished,

    /// Step of the given kind started.
    #[display("BeforeStep")]
    StepStarted(StepType),

    /// Step finished.
    #[display("AfterStep")]
    StepFinished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_hook_names() {
        let ctx = Context::default();

        assert_eq!(Hook::RunStarted.to_string(), "BeforeTestRun");
        assert_eq!(Hook::FeatureStarted(&ctx).to_string(), "BeforeFeature");
        assert_eq!(
            Hook::BlockStarted(StepType::When).to_string(),
            "BeforeScenarioBlock",
        );
        assert_eq!(Hook::StepFinished.to_string(), "AfterStep");
    }
}
