// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Loading [`gherkin::Feature`]s from the file system.

use std::{io, path::Path};

use crate::error::Result;

/// Parses the `.feature` file at `path`, or every `.feature` file under the
/// `path` directory (case-insensitively, recursively) in path order.
///
/// # Errors
///
/// - If the `path` doesn't exist or can't be walked.
/// - If any `.feature` file fails to parse.
pub fn parse(path: impl AsRef<Path>) -> Result<Vec<gherkin::Feature>> {
    let path = path.as_ref().canonicalize()?;

    if path.is_file() {
        let env = gherkin::GherkinEnv::default();
        return Ok(vec![gherkin::Feature::parse_path(path, env)?]);
    }

    let walker = globwalk::GlobWalkerBuilder::new(&path, "*.feature")
        .case_insensitive(true)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let mut files = walker
        .map(|entry| {
            entry
                .map(|e| e.into_path())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
        })
        .collect::<io::Result<Vec<_>>>()?;
    files.sort();

    tracing::debug!(dir = %path.display(), count = files.len(), "found features");

    files
        .into_iter()
        .map(|file| {
            let env = gherkin::GherkinEnv::default();
            gherkin::Feature::parse_path(file, env).map_err(Into::into)
        })
        .collect()
}
