// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{io, process::ExitCode};

use anyhow::Context;
use cicommon::logging::init_logging;
use clap::Parser;
use version_manager::args::Args;

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let options = Args::parse().into_options();

    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        std::process::exit(1);
    })
    .context("Failed to set Ctrl+C handler")?;

    let outcome = version_manager::run(&options, &mut io::stdout().lock())?;
    Ok(outcome.into())
}
