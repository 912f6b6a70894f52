// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step definitions resolving [`gherkin::Step`]s into [`Step`]s.
//!
//! A definition is a [`Regex`] plus a [`Binding`] describing what its capture
//! groups convert into. Resolution replaces every captured span of the step
//! text with a [`PLACEHOLDER`], and passes the converted captures as
//! [`Argument`]s, so the rendered line marks which parts were dynamic.

use gherkin::StepType;
use lazy_regex::regex;
use regex::Regex;

use crate::{
    error::{StepError, StepResult},
    step::{Argument, PLACEHOLDER},
    Step, Table,
};

/// Kind of a single capture group parameter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Param {
    /// Captured text is passed as is.
    Text,

    /// Captured text must parse as an [`i64`].
    Integer,
}

impl Param {
    /// Converts a `value` captured from the `step` text.
    fn convert(self, step: &str, value: &str) -> StepResult<Argument> {
        match self {
            Self::Text => Ok(Argument::Text(value.to_owned())),
            Self::Integer => value.trim().parse().map(Argument::Integer).map_err(
                |_| StepError::InvalidArgument {
                    step: step.to_owned(),
                    value: value.to_owned(),
                },
            ),
        }
    }
}

/// Declared signature of a step definition.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Binding {
    params: Vec<Param>,
    table: bool,
}

impl Binding {
    /// Creates a [`Binding`] with no parameters and no table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a [`Param::Text`] parameter.
    #[must_use]
    pub fn text(mut self) -> Self {
        self.params.push(Param::Text);
        self
    }

    /// Appends a [`Param::Integer`] parameter.
    #[must_use]
    pub fn integer(mut self) -> Self {
        self.params.push(Param::Integer);
        self
    }

    /// Requires a [`Table`] argument.
    #[must_use]
    pub fn with_table(mut self) -> Self {
        self.table = true;
        self
    }
}

/// Collection of step definitions, per step kind.
///
/// Every step has to match exactly 1 [`Regex`] of its kind.
#[derive(Clone, Debug, Default)]
pub struct Definitions {
    /// [Given] definitions.
    ///
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    given: Vec<(Regex, Binding)>,

    /// [When] definitions.
    ///
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    when: Vec<(Regex, Binding)>,

    /// [Then] definitions.
    ///
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    then: Vec<(Regex, Binding)>,
}

impl Definitions {
    /// Creates a new empty [`Definitions`] collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates [`Definitions`] tracing the friends-and-money scenarios:
    ///
    /// - `Given I have these friends` + table
    /// - `Given Call me <text>`
    /// - `When <int> plus <int> gives <int>`
    /// - `When I borrow <int> dollars from` + table
    /// - `Then I should have only <text> left as a friend`
    /// - `Then everything should be alright`
    #[must_use]
    pub fn logging() -> Self {
        Self::new()
            .given(
                Regex::clone(regex!(r"^I have these friends$")),
                Binding::new().with_table(),
            )
            .given(Regex::clone(regex!(r"^Call me (.*)$")), Binding::new().text())
            .when(
                Regex::clone(regex!(r"^(\d+) plus (\d+) gives (\d+)$")),
                Binding::new().integer().integer().integer(),
            )
            .when(
                Regex::clone(regex!(r"^I borrow (.*) dollars from$")),
                Binding::new().integer().with_table(),
            )
            .then(
                Regex::clone(regex!(r"^I should have only (.*) left as a friend$")),
                Binding::new().text(),
            )
            .then(
                Regex::clone(regex!(r"^everything should be alright$")),
                Binding::new(),
            )
    }

    /// Adds a [Given] definition matching the given `regex`.
    ///
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    #[must_use]
    pub fn given(mut self, regex: Regex, binding: Binding) -> Self {
        self.given.push((regex, binding));
        self
    }

    /// Adds a [When] definition matching the given `regex`.
    ///
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    #[must_use]
    pub fn when(mut self, regex: Regex, binding: Binding) -> Self {
        self.when.push((regex, binding));
        self
    }

    /// Adds a [Then] definition matching the given `regex`.
    ///
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    #[must_use]
    pub fn then(mut self, regex: Regex, binding: Binding) -> Self {
        self.then.push((regex, binding));
        self
    }

    /// Returns the total number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.given.len() + self.when.len() + self.then.len()
    }

    /// Indicates whether there are no definitions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the given [`gherkin::Step`] into a [`Step`].
    ///
    /// # Errors
    ///
    /// - [`StepError::NoMatch`] or [`StepError::Ambiguous`] if not exactly one
    ///   definition of the step's kind matches.
    /// - [`StepError::Arity`] if the definition's [`Binding`] declares a
    ///   different number of parameters than its [`Regex`] captures.
    /// - [`StepError::OverlappingCaptures`] if capture groups are nested.
    /// - [`StepError::InvalidArgument`] if a capture doesn't convert.
    /// - [`StepError::TableMismatch`] if the step's table presence differs
    ///   from the [`Binding`].
    /// - [`StepError::Table`] if the step's table is malformed.
    pub fn find(&self, step: &gherkin::Step) -> StepResult<Step> {
        let definitions = match step.ty {
            StepType::Given => &self.given,
            StepType::When => &self.when,
            StepType::Then => &self.then,
        };
        let text = step.value.as_str();

        let mut matched = definitions
            .iter()
            .filter_map(|(re, b)| re.captures(text).map(|c| (c, b)))
            .collect::<Vec<_>>();
        let (captures, binding) = match matched.len() {
            0 => return Err(StepError::no_match(text)),
            1 => matched.pop().ok_or_else(|| StepError::no_match(text))?,
            n => return Err(StepError::ambiguous(text, n)),
        };

        let captured = captures.len() - 1;
        if captured != binding.params.len() {
            return Err(StepError::Arity {
                step: text.to_owned(),
                captured,
                declared: binding.params.len(),
            });
        }

        let mut pattern = String::with_capacity(text.len());
        let mut arguments = Vec::with_capacity(captured);
        let mut last = 0;
        // Groups that didn't participate in the match are left as literal
        // text.
        for (param, group) in binding.params.iter().zip(captures.iter().skip(1))
        {
            let Some(group) = group else { continue };
            let literal = text.get(last..group.start()).ok_or_else(|| {
                StepError::OverlappingCaptures {
                    step: text.to_owned(),
                }
            })?;
            pattern.push_str(literal);
            pattern.push_str(PLACEHOLDER);
            arguments.push(param.convert(text, group.as_str())?);
            last = group.end();
        }
        pattern.push_str(&text[last..]);

        let table = match (binding.table, &step.table) {
            (true, Some(t)) => Some(Table::try_from(t)?),
            (false, None) => None,
            (expected, _) => {
                return Err(StepError::TableMismatch {
                    step: text.to_owned(),
                    expected,
                })
            }
        };

        tracing::trace!(step = text, %pattern, "resolved step");

        let resolved = Step::new(step.ty, pattern).with_arguments(arguments);
        Ok(match table {
            Some(t) => resolved.with_table(t),
            None => resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use gherkin::GherkinEnv;

    use super::*;

    // language=Gherkin
    const FEATURE: &str = r"
Feature: friends
  Scenario: all the steps
    Given I have these friends
      | Friend Name | Age | Gender |
      | Sam         | 45  | Male   |
    And Call me Ishmael
    When 2 plus 3 gives 5
    And I borrow 42 dollars from
      | Friend Name | Borrow date |
      | Tom         | 08/13/2016  |
    Then I should have only Sam left as a friend
    And everything should be alright

  Scenario: broken steps
    Given I have these friends
    When I borrow lots dollars from
      | Friend Name |
      | Tom         |
    Then nobody knows
    And Call me Tom
";

    fn steps(scenario: usize) -> Vec<gherkin::Step> {
        gherkin::Feature::parse(FEATURE, GherkinEnv::default())
            .expect("failed to parse feature")
            .scenarios[scenario]
            .steps
            .clone()
    }

    #[test]
    fn resolves_all_logging_steps() {
        let defs = Definitions::logging();
        let resolved = steps(0)
            .iter()
            .map(|s| defs.find(s))
            .collect::<StepResult<Vec<_>>>()
            .unwrap();

        assert_eq!(defs.len(), 6);
        assert_eq!(resolved.len(), 6);

        assert_eq!(resolved[0].pattern(), "I have these friends");
        assert_eq!(resolved[0].table().map(Table::row_count), Some(1));

        assert_eq!(resolved[1].ty(), StepType::Given);
        assert_eq!(resolved[1].pattern(), "Call me {}");
        assert_eq!(resolved[1].arguments(), [Argument::from("Ishmael")]);

        assert_eq!(resolved[2].pattern(), "{} plus {} gives {}");
        assert_eq!(
            resolved[2].arguments(),
            [Argument::Integer(2), Argument::Integer(3), Argument::Integer(5)],
        );

        assert_eq!(resolved[3].pattern(), "I borrow {} dollars from");
        assert_eq!(resolved[3].arguments(), [Argument::Integer(42)]);
        assert_eq!(
            resolved[3].table().and_then(|t| t.cell(0, "Borrow date")),
            Some("08/13/2016"),
        );

        assert_eq!(resolved[4].ty(), StepType::Then);
        assert_eq!(resolved[4].arguments(), [Argument::from("Sam")]);
        assert!(resolved[5].arguments().is_empty());
    }

    #[test]
    fn reports_missing_table() {
        let err = Definitions::logging().find(&steps(1)[0]).unwrap_err();
        assert_eq!(
            err,
            StepError::TableMismatch {
                step: "I have these friends".into(),
                expected: true,
            },
        );
    }

    #[test]
    fn reports_non_integer_argument() {
        let err = Definitions::logging().find(&steps(1)[1]).unwrap_err();
        assert!(matches!(err, StepError::InvalidArgument { value, .. } if value == "lots"));
    }

    #[test]
    fn reports_unmatched_step() {
        let err = Definitions::logging().find(&steps(1)[2]).unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn and_keeps_previous_kind() {
        // `And Call me Tom` follows a `Then`, so no `Given` definition applies.
        let err = Definitions::logging().find(&steps(1)[3]).unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn reports_ambiguity() {
        let defs = Definitions::new()
            .then(Regex::new("^a (.*)$").unwrap(), Binding::new().text())
            .then(Regex::new("^(.*) b$").unwrap(), Binding::new().text());
        let step = gherkin::Feature::parse(
            "Feature: f\n  Scenario: s\n    Then a b\n",
            GherkinEnv::default(),
        )
        .unwrap()
        .scenarios[0]
            .steps[0]
            .clone();

        assert_eq!(defs.find(&step).unwrap_err(), StepError::ambiguous("a b", 2));
    }

    #[test]
    fn reports_arity_mismatch() {
        let defs = Definitions::new()
            .given(Regex::new("^(.*) and (.*)$").unwrap(), Binding::new().text());
        let step = gherkin::Feature::parse(
            "Feature: f\n  Scenario: s\n    Given x and y\n",
            GherkinEnv::default(),
        )
        .unwrap()
        .scenarios[0]
            .steps[0]
            .clone();

        assert!(matches!(
            defs.find(&step).unwrap_err(),
            StepError::Arity { captured: 2, declared: 1, .. },
        ));
    }
}
