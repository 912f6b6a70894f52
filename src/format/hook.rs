// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lifecycle [`Hook`] lines.

use crate::{error::FormatResult, event::Hook, StepType};

use super::{context, LINE_END};

/// Returns the step kind as named in the `$StepTypeEnum` literal.
const fn kind(ty: StepType) -> &'static str {
    match ty {
        StepType::Given => "Given",
        StepType::When => "When",
        StepType::Then => "Then",
    }
}

/// Renders the `hook` as `(Hook '<name>'[ -withContext <record>]),`.
///
/// Feature and scenario hooks carry their full [`Context`] record, block and
/// step hooks only their step kind.
///
/// # Errors
///
/// If the carried [`Context`] can't be rendered.
///
/// [`Context`]: crate::Context
pub fn hook(hook: &Hook<'_>) -> FormatResult<String> {
    let with_context = match hook {
        Hook::FeatureStarted(ctx) | Hook::ScenarioStarted(ctx) => {
            Some(context(ctx)?)
        }
        Hook::BlockStarted(ty) => {
            Some(format!("@{{ BlockType = $StepTypeEnum.{} }}", kind(*ty)))
        }
        Hook::StepStarted(ty) => {
            Some(format!("@{{ StepType = $StepTypeEnum.{} }}", kind(*ty)))
        }
        Hook::RunStarted
        | Hook::RunFinished
        | Hook::FeatureFinished
        | Hook::ScenarioFinished
        | Hook::BlockFinished
        | Hook::StepFinished => None,
    };

    Ok(match with_context {
        Some(ctx) => format!("(Hook '{hook}' -withContext {ctx}{LINE_END}"),
        None => format!("(Hook '{hook}'{LINE_END}"),
    })
}
