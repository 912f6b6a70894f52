// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI (command line interface) of the `cucumber-trace` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

/// Root CLI of the `cucumber-trace` binary.
///
/// # Example
///
/// ```rust
/// use clap::Parser as _;
/// use cucumber_trace::cli::Opts;
///
/// let opts =
///     Opts::try_parse_from(["cucumber-trace", "-vv", "tests/features"])
///         .unwrap();
///
/// assert_eq!(opts.inputs.len(), 1);
/// assert_eq!(opts.log_level(), tracing::Level::DEBUG);
/// ```
#[derive(Clone, Debug, Parser)]
#[command(
    name = "cucumber-trace",
    about = "Trace Gherkin features, one line per lifecycle event",
    long_about = None,
)]
pub struct Opts {
    /// `.feature` files, or directories to search for them recursively.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// File to write the trace into, instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increases logging verbosity: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Opts {
    /// Returns the most verbose [`Level`] to log at.
    #[must_use]
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_input() {
        assert!(Opts::try_parse_from(["cucumber-trace"]).is_err());
    }

    #[test]
    fn parses_all_options() {
        let opts = Opts::try_parse_from([
            "cucumber-trace",
            "a.feature",
            "features",
            "--output",
            "trace.txt",
            "-vvvv",
        ])
        .unwrap();

        assert_eq!(
            opts.inputs,
            [PathBuf::from("a.feature"), PathBuf::from("features")],
        );
        assert_eq!(opts.output, Some(PathBuf::from("trace.txt")));
        assert_eq!(opts.log_level(), Level::TRACE);
    }

    #[test]
    fn defaults_to_warnings() {
        let opts = Opts::try_parse_from(["cucumber-trace", "x"]).unwrap();
        assert_eq!(opts.output, None);
        assert_eq!(opts.log_level(), Level::WARN);
    }
}
