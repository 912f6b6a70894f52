// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Driver`] replaying parsed features into a [`Recorder`].

use std::io;

use crate::{
    error::Result, feature::Ext as _, Context, Definitions, Recorder,
};

/// Walks [`gherkin::Feature`]s in order, resolving their steps against
/// [`Definitions`] and emitting the lifecycle into a [`Recorder`].
///
/// # Order guarantees
///
/// For every run the following is emitted:
/// - `RunStarted`;
/// - per feature, `FeatureStarted` with the feature's own [`Context`], then
///   its scenarios (top-level ones first, then those inside rules), then
///   `FeatureFinished`;
/// - per scenario, `ScenarioStarted` with the scenario's [`Context`], then its
///   steps (feature background, rule background, own steps), then
///   `ScenarioFinished`;
/// - per step, `BlockStarted`, `StepStarted`, the step line, `StepFinished`,
///   `BlockFinished`;
/// - `RunFinished`.
///
/// Scenario Outlines are expanded into one scenario per example row.
///
/// Each step is resolved before its block is opened, so a resolution failure
/// stops the run without a dangling block. The first error aborts the run.
#[derive(Debug)]
pub struct Driver<'r, Out> {
    recorder: &'r Recorder<Out>,
    definitions: &'r Definitions,
}

// Implemented manually to omit redundant `Out: Clone` trait bound, imposed by
// `#[derive(Clone)]`.
impl<Out> Clone for Driver<'_, Out> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Out> Copy for Driver<'_, Out> {}

impl<'r, Out: io::Write> Driver<'r, Out> {
    /// Creates a new [`Driver`].
    #[must_use]
    pub const fn new(
        recorder: &'r Recorder<Out>,
        definitions: &'r Definitions,
    ) -> Self {
        Self {
            recorder,
            definitions,
        }
    }

    /// Runs all the `features`, wrapped into `RunStarted`/`RunFinished`.
    ///
    /// # Errors
    ///
    /// On the first examples expansion, step resolution or recording failure.
    pub fn run<I>(&self, features: I) -> Result<()>
    where
        I: IntoIterator<Item = gherkin::Feature>,
    {
        self.recorder.run_started()?;
        let mut count = 0;
        for feature in features {
            self.feature(feature)?;
            count += 1;
        }
        self.recorder.run_finished()?;

        tracing::info!(features = count, "run finished");
        Ok(())
    }

    /// Runs a single `feature`, wrapped into `FeatureStarted`/
    /// `FeatureFinished`.
    ///
    /// # Errors
    ///
    /// On the first examples expansion, step resolution or recording failure.
    pub fn feature(&self, feature: gherkin::Feature) -> Result<()> {
        let feature = feature.expand_examples()?;
        tracing::info!(
            feature = %feature.name,
            scenarios = feature.count_scenarios(),
            "running feature",
        );

        self.recorder.feature_started(&Context::from(&feature))?;

        let background = feature.background.iter().flat_map(|b| &b.steps);
        for scenario in &feature.scenarios {
            self.scenario(scenario, background.clone())?;
        }
        for rule in &feature.rules {
            let background = background
                .clone()
                .chain(rule.background.iter().flat_map(|b| &b.steps));
            for scenario in &rule.scenarios {
                self.scenario(scenario, background.clone())?;
            }
        }

        self.recorder.feature_finished()?;
        Ok(())
    }

    /// Runs a single `scenario` preceded by its `background` steps.
    fn scenario<'s>(
        &self,
        scenario: &'s gherkin::Scenario,
        background: impl Iterator<Item = &'s gherkin::Step>,
    ) -> Result<()> {
        self.recorder.scenario_started(&Context::from(scenario))?;
        for step in background.chain(&scenario.steps) {
            self.step(step)?;
        }
        self.recorder.scenario_finished()?;
        Ok(())
    }

    /// Resolves and records a single `step` inside its own block.
    fn step(&self, step: &gherkin::Step) -> Result<()> {
        let resolved = self.definitions.find(step)?;

        self.recorder.block_started(step.ty)?;
        self.recorder.step_started(step.ty)?;
        self.recorder.step(&resolved)?;
        self.recorder.step_finished()?;
        self.recorder.block_finished()?;
        Ok(())
    }
}
