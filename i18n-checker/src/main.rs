// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{io, process::ExitCode};

use cicommon::logging::init_logging;
use clap::Parser;
use i18n_key_checker::args::Args;

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let config = Args::parse().into_config();
    let outcome = i18n_key_checker::run(&config, &mut io::stdout().lock())?;
    Ok(outcome.into())
}
