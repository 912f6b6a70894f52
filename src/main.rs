// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `cucumber-trace` binary: traces `.feature` files with the logging step
//! definitions.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use clap::Parser as _;
use cucumber_trace::{cli::Opts, parser, Definitions, Driver, Recorder};

fn main() -> ExitCode {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(opts.log_level())
        .init();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tracing features failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Opts) -> cucumber_trace::Result<()> {
    let mut features = Vec::new();
    for input in &opts.inputs {
        features.extend(parser::parse(input)?);
    }

    let out: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let recorder = Recorder::new(out);
    let definitions = Definitions::logging();

    Driver::new(&recorder, &definitions).run(features)
}
