// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Feature and scenario metadata passed explicitly into lifecycle hooks.

use derive_more::with_trait::{Deref, Into};
use itertools::Itertools as _;

/// Ordered set of unique tags.
///
/// Iteration order is the order of first insertion, so rendering is
/// deterministic.
#[derive(Clone, Debug, Default, Deref, Eq, Into, PartialEq)]
pub struct Tags(Vec<String>);

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).unique().collect())
    }
}

/// Read-only view of a [`Feature`] or a [`Scenario`]: its title and tags.
///
/// [`Feature`]: gherkin::Feature
/// [`Scenario`]: gherkin::Scenario
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Context {
    /// Title of the feature or scenario.
    pub title: String,

    /// Tags of the feature or scenario.
    pub tags: Tags,
}

impl Context {
    /// Creates a new [`Context`].
    #[must_use]
    pub fn new<T>(title: impl Into<String>, tags: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            title: title.into(),
            tags: tags.into_iter().collect(),
        }
    }
}

impl From<&gherkin::Feature> for Context {
    fn from(feature: &gherkin::Feature) -> Self {
        Self::new(feature.name.as_str(), &feature.tags)
    }
}

impl From<&gherkin::Scenario> for Context {
    fn from(scenario: &gherkin::Scenario) -> Self {
        Self::new(scenario.name.as_str(), &scenario.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_keeping_first_occurrence() {
        let tags = ["smoke", "fast", "smoke", "slow"]
            .into_iter()
            .collect::<Tags>();

        assert_eq!(*tags, ["smoke", "fast", "slow"]);
    }

    #[test]
    fn context_from_parts() {
        let ctx = Context::new("s13", Vec::<String>::new());

        assert_eq!(ctx.title, "s13");
        assert!(ctx.tags.is_empty());
    }

    #[test]
    fn context_from_gherkin() {
        // language=Gherkin
        let feature = gherkin::Feature::parse(
            r"
@money @friends
Feature: f13
  @lending
  Rule: r
    @small @lending
    Scenario: s13
      Then everything should be alright
",
            gherkin::GherkinEnv::default(),
        )
        .unwrap();

        let ctx = Context::from(&feature);
        assert_eq!(ctx.title, "f13");
        assert_eq!(*ctx.tags, ["money", "friends"]);

        let ctx = Context::from(&feature.rules[0].scenarios[0]);
        assert_eq!(ctx.title, "s13");
        assert_eq!(*ctx.tags, ["small", "lending"]);
    }
}
