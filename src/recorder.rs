// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Recorder`] of trace lines.

use std::{io, sync::Mutex};

use crate::{
    error::{TraceError, TraceResult},
    event::Hook,
    format,
    out::WriteStrExt as _,
    Context, Step, StepType,
};

/// Appends one trace line per lifecycle [`Hook`] or [`Step`] to an output
/// sink, in call order.
///
/// Each call renders a complete line first and then appends it under a lock,
/// so lines produced from different threads never interleave mid-line, and a
/// rendering failure writes nothing.
///
/// The [`Recorder`] holds no notion of a "current" feature or scenario:
/// contexts are passed into the handlers explicitly, and lifecycle order is
/// up to the caller.
///
/// # Example
///
/// ```rust
/// use cucumber_trace::{out::WritableString, Context, Recorder};
///
/// let recorder = Recorder::new(WritableString::default());
/// recorder.run_started().unwrap();
/// recorder.feature_started(&Context::new("f13", ["money"])).unwrap();
///
/// let out = recorder.into_inner().unwrap();
/// assert_eq!(
///     out.0,
///     "(Hook 'BeforeTestRun'),\n\
///      (Hook 'BeforeFeature' -withContext \
///      @{ Name = 'f13'; Description = $Null; Tags = money }),\n",
/// );
/// ```
#[derive(Debug, Default)]
pub struct Recorder<Out = io::Stdout> {
    out: Mutex<Out>,
}

impl<Out: io::Write> Recorder<Out> {
    /// Creates a new [`Recorder`] appending into the given `out`put.
    #[must_use]
    pub const fn new(out: Out) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes this [`Recorder`], returning its output.
    ///
    /// # Errors
    ///
    /// If a thread panicked while holding the output.
    pub fn into_inner(self) -> TraceResult<Out> {
        self.out.into_inner().map_err(|_| TraceError::Poisoned)
    }

    /// Records the given lifecycle `hook`.
    ///
    /// # Errors
    ///
    /// - [`TraceError::Format`] if the carried context can't be rendered.
    /// - [`TraceError::Io`] if the output refuses the line.
    pub fn hook(&self, hook: Hook<'_>) -> TraceResult<()> {
        let line = format::hook(&hook)?;
        self.append(&line)?;
        tracing::debug!(%hook, "recorded hook");
        Ok(())
    }

    /// Records the given `step`.
    ///
    /// # Errors
    ///
    /// - [`TraceError::Format`] if the step can't be rendered.
    /// - [`TraceError::Io`] if the output refuses the line.
    pub fn step(&self, step: &Step) -> TraceResult<()> {
        let line = format::step(step)?;
        self.append(&line)?;
        tracing::debug!(pattern = step.pattern(), "recorded step");
        Ok(())
    }

    /// Records [`Hook::RunStarted`].
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn run_started(&self) -> TraceResult<()> {
        self.hook(Hook::RunStarted)
    }

    /// Records [`Hook::RunFinished`] and flushes the output.
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn run_finished(&self) -> TraceResult<()> {
        self.hook(Hook::RunFinished)?;
        self.flush()
    }

    /// Records [`Hook::FeatureStarted`] with the feature's `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn feature_started(&self, ctx: &Context) -> TraceResult<()> {
        self.hook(Hook::FeatureStarted(ctx))
    }

    /// Records [`Hook::FeatureFinished`].
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn feature_finished(&self) -> TraceResult<()> {
        self.hook(Hook::FeatureFinished)
    }

    /// Records [`Hook::ScenarioStarted`] with the scenario's `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn scenario_started(&self, ctx: &Context) -> TraceResult<()> {
        self.hook(Hook::ScenarioStarted(ctx))
    }

    /// Records [`Hook::ScenarioFinished`].
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn scenario_finished(&self) -> TraceResult<()> {
        self.hook(Hook::ScenarioFinished)
    }

    /// Records [`Hook::BlockStarted`] of the given kind.
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn block_started(&self, ty: StepType) -> TraceResult<()> {
        self.hook(Hook::BlockStarted(ty))
    }

    /// Records [`Hook::BlockFinished`].
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn block_finished(&self) -> TraceResult<()> {
        self.hook(Hook::BlockFinished)
    }

    /// Records [`Hook::StepStarted`] of the given kind.
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn step_started(&self, ty: StepType) -> TraceResult<()> {
        self.hook(Hook::StepStarted(ty))
    }

    /// Records [`Hook::StepFinished`].
    ///
    /// # Errors
    ///
    /// See [`Recorder::hook()`].
    pub fn step_finished(&self) -> TraceResult<()> {
        self.hook(Hook::StepFinished)
    }

    /// Flushes the output.
    ///
    /// # Errors
    ///
    /// If the output fails to flush.
    pub fn flush(&self) -> TraceResult<()> {
        self.out
            .lock()
            .map_err(|_| TraceError::Poisoned)?
            .flush()
            .map_err(Into::into)
    }

    /// Appends a complete `line` while holding the output lock.
    fn append(&self, line: &str) -> TraceResult<()> {
        let mut out = self.out.lock().map_err(|_| TraceError::Poisoned)?;
        out.write_line(line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{out::WritableString, Table};

    fn recorder() -> Recorder<WritableString> {
        Recorder::new(WritableString::default())
    }

    fn lines(recorder: Recorder<WritableString>) -> Vec<String> {
        recorder
            .into_inner()
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn emits_one_line_per_hook_in_call_order() {
        let r = recorder();
        let feature = Context::new("f13", Vec::<String>::new());
        let scenario = Context::new("s13", Vec::<String>::new());

        r.run_started().unwrap();
        r.feature_started(&feature).unwrap();
        r.scenario_started(&scenario).unwrap();
        r.step_started(StepType::Given).unwrap();
        r.step_finished().unwrap();
        r.scenario_finished().unwrap();
        r.feature_finished().unwrap();
        r.run_finished().unwrap();

        let lines = lines(r);
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines,
            [
                "(Hook 'BeforeTestRun'),",
                "(Hook 'BeforeFeature' -withContext \
                 @{ Name = 'f13'; Description = $Null; Tags = @() }),",
                "(Hook 'BeforeScenario' -withContext \
                 @{ Name = 's13'; Description = $Null; Tags = @() }),",
                "(Hook 'BeforeStep' -withContext \
                 @{ StepType = $StepTypeEnum.Given }),",
                "(Hook 'AfterStep'),",
                "(Hook 'AfterScenario'),",
                "(Hook 'AfterFeature'),",
                "(Hook 'AfterTestRun'),",
            ],
        );
    }

    #[test]
    fn failed_rendering_writes_nothing() {
        let r = recorder();
        r.run_started().unwrap();

        let err = r
            .step(&Step::new(StepType::Given, "Call me {}"))
            .unwrap_err();
        assert!(err.is_format_error());

        let err = r
            .scenario_started(&Context::new("it's", Vec::<String>::new()))
            .unwrap_err();
        assert!(err.is_format_error());

        assert_eq!(lines(r), ["(Hook 'BeforeTestRun'),"]);
    }

    #[test]
    fn multiline_values_never_split_a_line() {
        let r = recorder();
        let table = Table::from_rows(["Friend Name"], [["Sam\nTom"]]).unwrap();

        let err = r
            .step(
                &Step::new(StepType::Given, "I have these friends")
                    .with_table(table),
            )
            .unwrap_err();
        assert!(err.is_format_error());

        let err = r
            .feature_started(&Context::new("f13\r\n", Vec::<String>::new()))
            .unwrap_err();
        assert!(err.is_format_error());

        assert!(lines(r).is_empty());
    }

    #[test]
    fn records_steps_with_tables() {
        let r = recorder();
        let table = Table::from_rows(
            ["Friend Name", "Age", "Gender"],
            [["Sam", "45", "Male"], ["Tom", "18", "Male"]],
        )
        .unwrap();

        r.step(
            &Step::new(StepType::Given, "I have these friends").with_table(table),
        )
        .unwrap();

        let lines = lines(r);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("(Step -given 'I have these friends' "));
        assert!(lines[0].ends_with("'Gender' = 'Male' } }),"));
    }

    #[test]
    fn never_interleaves_lines_across_threads() {
        let r = recorder();

        thread::scope(|s| {
            for n in 0..4_i64 {
                let r = &r;
                _ = s.spawn(move || {
                    let ctx = Context::new(format!("s{n}"), ["t"]);
                    for _ in 0..50 {
                        r.scenario_started(&ctx).unwrap();
                        r.step(
                            &Step::new(StepType::When, "tick {}")
                                .with_argument(n),
                        )
                        .unwrap();
                        r.scenario_finished().unwrap();
                    }
                });
            }
        });

        let lines = lines(r);
        assert_eq!(lines.len(), 4 * 50 * 3);
        for line in &lines {
            assert!(line.starts_with('('), "{line}");
            assert!(line.ends_with("),"), "{line}");
            assert_eq!(line.matches("),").count(), 1, "{line}");
        }
    }
}
