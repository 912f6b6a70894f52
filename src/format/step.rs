// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Step`] lines.

use std::fmt::Write as _;

use crate::{
    error::{FormatError, FormatResult},
    step::PLACEHOLDER,
    Step, StepType,
};

use super::{quoted, table, LINE_END};

/// Returns the lowercase verb of a [`StepType`].
#[must_use]
pub const fn verb(ty: StepType) -> &'static str {
    match ty {
        StepType::Given => "given",
        StepType::When => "when",
        StepType::Then => "then",
    }
}

/// Substitutes every [`PLACEHOLDER`] of the `step` pattern with its
/// `Argument(<value>)` marker.
///
/// # Errors
///
/// If the number of placeholders differs from the number of arguments.
pub fn text(step: &Step) -> FormatResult<String> {
    let pattern = step.pattern();
    let args = step.arguments();

    let placeholders = pattern.matches(PLACEHOLDER).count();
    if placeholders != args.len() {
        return Err(FormatError::argument_count(
            pattern,
            placeholders,
            args.len(),
        ));
    }

    let mut parts = pattern.split(PLACEHOLDER);
    let mut out = parts.next().unwrap_or_default().to_owned();
    for (arg, part) in args.iter().zip(parts) {
        _ = write!(out, "Argument({arg}){part}");
    }
    Ok(out)
}

/// Renders the `step` as
/// `(Step -<verb> '<text>'[ -tableArgument <table>]),`.
///
/// # Errors
///
/// - If the number of placeholders differs from the number of arguments.
/// - If the text or the table contains a quote.
pub fn step(step: &Step) -> FormatResult<String> {
    let text = quoted(&text(step)?)?;
    let table = step
        .table()
        .map(|t| table(t).map(|t| format!(" -tableArgument {t}")))
        .transpose()?
        .unwrap_or_default();

    Ok(format!("(Step -{} {text}{table}{LINE_END}", verb(step.ty())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Table;

    #[test]
    fn renders_plain_step() {
        let s = Step::new(StepType::Then, "everything should be alright");

        assert_eq!(
            step(&s).unwrap(),
            "(Step -then 'everything should be alright'),",
        );
    }

    #[test]
    fn marks_arguments() {
        let s = Step::new(StepType::When, "{} plus {} gives {}")
            .with_arguments([2, 3, 5]);

        assert_eq!(
            step(&s).unwrap(),
            "(Step -when 'Argument(2) plus Argument(3) gives Argument(5)'),",
        );
    }

    #[test]
    fn renders_table_argument() {
        let table = Table::from_rows(
            ["Friend Name", "Borrow date"],
            [["Tom", "08/13/2016"]],
        )
        .unwrap();
        let s = Step::new(StepType::When, "I borrow {} dollars from")
            .with_argument(1923)
            .with_table(table);

        let line = step(&s).unwrap();
        assert_eq!(
            line,
            "(Step -when 'I borrow Argument(1923) dollars from' \
             -tableArgument @{ Header = 'Friend Name', 'Borrow date'; \
             Rows = ,@{ 'Friend Name' = 'Tom'; 'Borrow date' = '08/13/2016' } \
             }),",
        );
        assert!(line.contains("Argument(1923)"));
        assert_eq!(line.matches("Rows = ,").count(), 1);
    }

    #[test]
    fn lowercases_every_verb() {
        for (ty, prefix) in [
            (StepType::Given, "(Step -given"),
            (StepType::When, "(Step -when"),
            (StepType::Then, "(Step -then"),
        ] {
            let line = step(&Step::new(ty, "x")).unwrap();
            assert!(line.starts_with(prefix), "{line}");
            assert!(line.ends_with("),"), "{line}");
        }
    }

    #[test]
    fn fails_on_argument_count_mismatch() {
        let s = Step::new(StepType::Given, "Call me {}");

        assert_eq!(
            step(&s).unwrap_err(),
            FormatError::argument_count("Call me {}", 1, 0),
        );
    }

    #[test]
    fn fails_on_quoted_argument() {
        let s = Step::new(StepType::Given, "Call me {}").with_argument("O'Neil");
        assert!(step(&s).unwrap_err().is_delimiter());
    }
}
