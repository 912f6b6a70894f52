// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`gherkin::Feature`] extension.

use std::{
    mem,
    path::{Path, PathBuf},
};

use derive_more::with_trait::{Display, Error};
use lazy_regex::regex;
use sealed::sealed;

/// Helper methods to operate on [`gherkin::Feature`]s.
#[sealed]
pub trait Ext: Sized {
    /// Expands [Scenario Outline][1] [Examples][2] into one [`Scenario`] per
    /// example row.
    ///
    /// Every `<name>` placeholder in the scenario name, step texts and step
    /// table cells is substituted with the row's value under the `name`
    /// column, and the [Examples][2] tags are added to the scenario tags.
    ///
    /// ```gherkin
    /// Feature: f13
    ///   Scenario Outline: s13
    ///     When I borrow <amount> dollars from
    ///       | Friend Name | Borrow date |
    ///       | Tom         | 08/13/2016  |
    ///
    ///     Examples:
    ///       | amount |
    ///       | 42     |
    ///       | 1923   |
    /// ```
    ///
    /// # Errors
    ///
    /// If a placeholder names no column of its [Examples][2].
    ///
    /// [`Scenario`]: gherkin::Scenario
    /// [1]: https://cucumber.io/docs/gherkin/reference#scenario-outline
    /// [2]: https://cucumber.io/docs/gherkin/reference#examples
    fn expand_examples(self) -> Result<Self, ExpandExamplesError>;

    /// Counts all the [`Feature`]'s [`Scenario`]s, including [`Rule`]s inside.
    ///
    /// [`Feature`]: gherkin::Feature
    /// [`Rule`]: gherkin::Rule
    /// [`Scenario`]: gherkin::Scenario
    #[must_use]
    fn count_scenarios(&self) -> usize;
}

#[sealed]
impl Ext for gherkin::Feature {
    fn expand_examples(mut self) -> Result<Self, ExpandExamplesError> {
        let path = self.path.clone();
        let expand = |scenarios: Vec<gherkin::Scenario>| {
            scenarios.into_iter().try_fold(Vec::new(), |mut acc, s| {
                acc.extend(expand_scenario(s, path.as_deref())?);
                Ok::<_, ExpandExamplesError>(acc)
            })
        };

        for r in &mut self.rules {
            r.scenarios = expand(mem::take(&mut r.scenarios))?;
        }
        self.scenarios = expand(mem::take(&mut self.scenarios))?;

        Ok(self)
    }

    fn count_scenarios(&self) -> usize {
        self.scenarios.len()
            + self.rules.iter().map(|r| r.scenarios.len()).sum::<usize>()
    }
}

/// Expands the `scenario`'s [`Examples`], if any.
///
/// # Errors
///
/// See [`ExpandExamplesError`] for details.
///
/// [`Examples`]: gherkin::Examples
fn expand_scenario(
    scenario: gherkin::Scenario,
    path: Option<&Path>,
) -> Result<Vec<gherkin::Scenario>, ExpandExamplesError> {
    if scenario.examples.is_empty() {
        return Ok(vec![scenario]);
    }

    let mut expanded = Vec::new();
    for examples in &scenario.examples {
        let Some((header, rows)) =
            examples.table.as_ref().and_then(|t| t.rows.split_first())
        else {
            continue;
        };

        for row in rows {
            let values = header.iter().zip(row).collect::<Vec<_>>();
            let resolve = |text: &str, pos| {
                substitute(text, &values).map_err(|name| ExpandExamplesError {
                    pos,
                    name,
                    path: path.map(Path::to_path_buf),
                })
            };

            let mut outline = scenario.clone();
            outline.examples.clear();
            for tag in &examples.tags {
                if !outline.tags.contains(tag) {
                    outline.tags.push(tag.clone());
                }
            }
            outline.name = resolve(&outline.name, outline.position)?;
            for step in &mut outline.steps {
                step.value = resolve(&step.value, step.position)?;
                for cell in step.table.iter_mut().flat_map(|t| &mut t.rows).flatten()
                {
                    *cell = resolve(cell, step.position)?;
                }
            }
            expanded.push(outline);
        }
    }
    Ok(expanded)
}

/// Replaces every `<name>` in the `text` with its value among the `values`.
///
/// # Errors
///
/// With the first `name` absent from the `values`.
fn substitute(
    text: &str,
    values: &[(&String, &String)],
) -> Result<String, String> {
    let mut unknown = None;
    let replaced = regex!(r"<([^>\s]+)>").replace_all(
        text,
        |cap: &regex::Captures<'_>| {
            let name = &cap[1];
            values
                .iter()
                .find(|(column, _)| column.as_str() == name)
                .map_or_else(
                    || {
                        _ = unknown.get_or_insert_with(|| name.to_owned());
                        String::new()
                    },
                    |(_, value)| (*value).clone(),
                )
        },
    );

    match unknown {
        Some(name) => Err(name),
        None => Ok(replaced.into_owned()),
    }
}

/// Error of [Scenario Outline][1] expansion encountering an unknown
/// placeholder.
///
/// [1]: https://cucumber.io/docs/gherkin/reference#scenario-outline
#[derive(Clone, Debug, Display, Error)]
#[display(
    "Failed to resolve <{name}> at {}:{}:{}",
    path.as_deref().map(Path::display).map(|p| p.to_string()).unwrap_or_default(),
    pos.line,
    pos.col,
)]
pub struct ExpandExamplesError {
    /// Position of the unknown placeholder.
    pub pos: gherkin::LineCol,

    /// Name of the unknown placeholder.
    pub name: String,

    /// [`Path`] to the `.feature` file, if present.
    pub path: Option<PathBuf>,
}
